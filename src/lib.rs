//! Flipgame: a bounded game-tree search engine for the flip game.
//!
//! Two players take turns flipping an adjacent `++` pair on a row of `+` and
//! `-` symbols into `--`. The engine searches every line up to a fixed depth,
//! scores the tree and plays the child with the best tally.
//!
//! ## Modules
//!
//! - [`constants`] - Default parameters and hard limits
//! - [`config`] - Immutable engine configuration
//! - [`error`] - Error type
//! - [`board`] - Board and move representation
//! - [`movegen`] - Legal move generation
//! - [`search`] - Search tree construction and move selection
//! - [`game`] - Turn controller for human-versus-engine play
//! - [`generator`] - Random starting boards
//! - [`render`] - Text rendering of search trees
//! - [`shell`] - Line-based command protocol
//!
//! ## Example
//!
//! ```
//! use flipgame::board::Board;
//! use flipgame::config::EngineConfig;
//! use flipgame::search::SearchTree;
//!
//! let board: Board = "+++".parse().unwrap();
//! let tree = SearchTree::build(&board, &EngineConfig::new());
//! assert_eq!(tree.root().score(), 2);
//! assert_eq!(tree.best_child().unwrap().board().to_string(), "--+");
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod generator;
pub mod movegen;
pub mod render;
pub mod search;
pub mod shell;

pub use error::{Error, Result};
