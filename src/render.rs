//! Plain-text views of a search tree.

use std::fmt::Write;

use crate::search::{SearchNode, select_best};

/// Render `root` as an indented outline, one node per line.
///
/// Terminal nodes are tagged `T`, depth-capped nodes `C`. With `limit`, nodes
/// more than `limit` levels below `root` are omitted.
pub fn render_tree(root: &SearchNode, limit: Option<usize>) -> String {
    let mut out = String::new();
    for node in root.iter() {
        let level = node.depth() - root.depth();
        if limit.is_some_and(|l| level > l) {
            continue;
        }
        let tag = if node.is_terminal() {
            " T"
        } else if node.is_depth_capped() {
            " C"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{:indent$}{} d={} s={}{tag}",
            "",
            node.board(),
            node.depth(),
            node.score(),
            indent = level * 2
        );
    }
    out
}

/// Render the children of `root` with their move index and score, marking
/// the one the engine would choose.
pub fn render_choices(root: &SearchNode) -> String {
    let best = select_best(root.children());
    let mut out = String::new();
    let moves = root.board().move_indices().zip(root.children());
    for (i, (index, child)) in moves.enumerate() {
        let mark = if best == Some(i) { " *" } else { "" };
        let _ = writeln!(out, "{index}: {} s={}{mark}", child.board(), child.score());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::search::SearchTree;

    fn tree(s: &str) -> SearchTree {
        SearchTree::build(&s.parse().unwrap(), &EngineConfig::new())
    }

    #[test]
    fn test_render_tree() {
        let t = tree("++--");
        assert_eq!(render_tree(t.root(), None), "++-- d=0 s=1\n  ---- d=1 s=1 T\n");
    }

    #[test]
    fn test_render_tree_limit() {
        let t = tree("++++");
        let text = render_tree(t.root(), Some(1));
        assert_eq!(text.lines().count(), 4);
        assert!(!text.contains("d=2"));
    }

    #[test]
    fn test_render_capped() {
        let config = EngineConfig::new().with_max_depth(0);
        let t = SearchTree::build(&"+++++".parse().unwrap(), &config);
        let text = render_tree(t.root(), None);
        assert!(text.contains("--+++ d=1 s=1 C"));
    }

    #[test]
    fn test_render_choices_uses_move_index() {
        let t = tree("-+++-++");
        assert_eq!(
            render_choices(t.root()),
            "1: ---+-++ s=-5 *\n2: -+---++ s=-5\n5: -+++--- s=-10\n"
        );
    }

    #[test]
    fn test_render_choices() {
        let t = tree("++++");
        assert_eq!(
            render_choices(t.root()),
            "0: --++ s=-5\n1: +--+ s=1 *\n2: ++-- s=-5\n"
        );
    }
}
