//! Bounded exhaustive game-tree search.
//!
//! The engine expands every position reachable from the root up to the
//! configured depth, then scores the tree bottom-up:
//! - A node with no legal move, or deeper than the depth bound, is *stopped*
//!   and scored by depth parity (odd depth wins, even depth loses).
//! - Every other node scores the sum of its children's scores.
//!
//! The sum is a tally of favourable outcomes across all lines, not a minimax
//! value. The engine then plays the root child with the highest tally.

use std::time::Instant;

use tracing::debug;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::movegen::successors;

/// A node in the search tree.
///
/// Children are owned by their parent and kept in move-generation order,
/// which the selector relies on for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    board: Board,
    depth: usize,
    score: i64,
    is_terminal: bool,
    children: Vec<SearchNode>,
}

impl SearchNode {
    /// Expand `board` at `depth` and everything below it.
    fn expand(board: Board, depth: usize, config: &EngineConfig) -> Self {
        let next = successors(&board);
        let is_terminal = next.is_empty();

        if is_terminal || depth > config.max_depth {
            return Self {
                board,
                depth,
                score: config.stopped_score(depth),
                is_terminal,
                children: Vec::new(),
            };
        }

        let children: Vec<SearchNode> = next
            .into_iter()
            .map(|child| SearchNode::expand(child, depth + 1, config))
            .collect();
        let score = children.iter().map(|c| c.score).sum();

        Self {
            board,
            depth,
            score,
            is_terminal,
            children,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Distance in moves from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// True when the board admits no legal move, regardless of depth.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// True when expansion stopped at the depth bound while moves remained.
    pub fn is_depth_capped(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    pub fn children(&self) -> &[SearchNode] {
        &self.children
    }

    /// Pre-order traversal of this node and all its descendants.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Greatest depth found in this subtree.
    pub fn max_depth(&self) -> usize {
        self.iter().map(|n| n.depth).max().unwrap_or(self.depth)
    }
}

/// Pre-order iterator over a [`SearchNode`] subtree.
pub struct Preorder<'a> {
    stack: Vec<&'a SearchNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the first child is visited first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A fully built search tree rooted at the position being evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    root: SearchNode,
}

impl SearchTree {
    /// Build the complete tree for `board` within the configured depth bound.
    ///
    /// The root sits at depth 0. There is no pruning: every node up to
    /// `max_depth + 1` is materialized before this returns.
    pub fn build(board: &Board, config: &EngineConfig) -> Self {
        let start = Instant::now();
        let root = SearchNode::expand(board.clone(), 0, config);
        debug!(
            board = %board,
            nodes = root.node_count(),
            score = root.score,
            elapsed_us = start.elapsed().as_micros() as u64,
            "built search tree"
        );
        Self { root }
    }

    pub fn root(&self) -> &SearchNode {
        &self.root
    }

    /// The root child the engine would play, or `None` if the root is terminal.
    pub fn best_child(&self) -> Option<&SearchNode> {
        select_best(&self.root.children).map(|i| &self.root.children[i])
    }
}

/// Index of the child with the greatest score.
///
/// Ties go to the earliest child in generation order. Returns `None` for an
/// empty slice; callers are expected to check for a terminal position first.
pub fn select_best(children: &[SearchNode]) -> Option<usize> {
    // `Iterator::max_by_key` keeps the last maximum, so scan by hand.
    let mut best: Option<usize> = None;
    for (i, child) in children.iter().enumerate() {
        match best {
            Some(b) if children[b].score >= child.score => {}
            _ => best = Some(i),
        }
    }
    best
}
