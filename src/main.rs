//! Flipgame: play the flip game against a bounded tree-search engine.
//!
//! ## Usage
//!
//! - `flipgame` / `flipgame play` - Interactive game on stdin/stdout
//! - `flipgame shell` - Command protocol for front ends
//! - `flipgame analyze <BOARD>` - Show the engine's scores for a board
//! - `flipgame demo` - Run a few worked examples

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;
use tracing_subscriber::EnvFilter;

use flipgame::board::Board;
use flipgame::config::EngineConfig;
use flipgame::constants::{MAX_BOARD_LEN, MAX_DEPTH, MIN_BOARD_LEN};
use flipgame::generator::random_board;
use flipgame::render::{render_choices, render_tree};
use flipgame::search::SearchTree;
use flipgame::shell::Shell;

/// Flipgame: a bounded game-tree search engine for the flip game
#[derive(Parser)]
#[command(name = "flipgame")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum search depth
    #[arg(long, default_value_t = MAX_DEPTH, global = true)]
    depth: usize,

    /// Shortest random board
    #[arg(long, default_value_t = MIN_BOARD_LEN, global = true)]
    min_len: usize,

    /// Longest random board, and longest board accepted
    #[arg(long, default_value_t = MAX_BOARD_LEN, global = true)]
    max_len: usize,

    /// Seed for random boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine; it answers each of your moves
    Play,
    /// Start the command protocol without automatic replies
    Shell,
    /// Print the engine's scores for every move from BOARD
    Analyze {
        /// Board of '+' and '-' symbols
        board: String,
        /// Also print the search tree, optionally limited to LEVELS levels
        #[arg(long, num_args = 0..=1, value_name = "LEVELS")]
        tree: Option<Option<usize>>,
    },
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::new()
        .with_max_depth(cli.depth)
        .with_board_len(cli.min_len, cli.max_len);
    config.validate()?;
    let rng = cli.seed.map(Rng::with_seed).unwrap_or_else(Rng::new);

    match cli.command {
        Some(Commands::Play) | None => {
            println!("Flipgame: flip a '++' pair to '--'.");
            println!("Commands: moves, play <index|board>, analyze, new, quit\n");
            let mut shell = Shell::new(config, rng, true)?;
            let game = shell.game();
            println!("{}\nmoves: {}\n", game.board(), game.legal_moves().len());
            shell.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Shell) => {
            let mut shell = Shell::new(config, rng, false)?;
            shell.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Analyze { board, tree }) => {
            let board: Board = board
                .parse()
                .with_context(|| format!("cannot parse board '{board}'"))?;
            config.check_board_len(board.len())?;
            analyze(&board, &config, tree);
        }
        Some(Commands::Demo) => run_demo(&config, rng),
    }
    Ok(())
}

fn analyze(board: &Board, config: &EngineConfig, tree: Option<Option<usize>>) {
    let search = SearchTree::build(board, config);
    let root = search.root();
    println!(
        "{board}: score {} over {} nodes (depth {})",
        root.score(),
        root.node_count(),
        root.max_depth()
    );
    if root.is_terminal() {
        println!("no legal moves");
    } else {
        print!("{}", render_choices(root));
    }
    if let Some(limit) = tree {
        println!();
        print!("{}", render_tree(root, limit));
    }
}

fn run_demo(config: &EngineConfig, mut rng: Rng) {
    println!("Flipgame: bounded tree search demo\n");

    for text in ["++--", "+++"] {
        println!("=== {text} ===");
        if let Ok(board) = text.parse::<Board>() {
            analyze(&board, config, Some(None));
        }
        println!();
    }

    println!("=== Random board ===");
    let board = random_board(&mut rng, config);
    analyze(&board, config, None);
}
