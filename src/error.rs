//! Error types for the flip game engine.

use thiserror::Error;

use crate::game::Side;

/// Errors raised by the engine and the turn controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move index {index} for board of length {len}")]
    InvalidMoveIndex { index: usize, len: usize },

    #[error("illegal move: {board} is not reachable in one move")]
    IllegalMove { board: String },

    #[error("invalid symbol '{symbol}' at position {position} (expected '+' or '-')")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("board length {len} exceeds the maximum of {max}")]
    BoardTooLong { len: usize, max: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("not your turn: waiting for {expected} move")]
    NotYourTurn { expected: Side },

    #[error("game already over")]
    GameOver,

    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
