//! Default engine parameters and hard limits.
//!
//! These values seed [`EngineConfig`](crate::config::EngineConfig). The
//! limits are ceilings the configuration may never exceed: the game tree grows
//! exponentially with board length and depth, so both are capped.

// =============================================================================
// Board Symbols
// =============================================================================

/// Text form of the flippable marker (`A`).
pub const PLUS: char = '+';

/// Text form of the flipped marker (`B`).
pub const MINUS: char = '-';

// =============================================================================
// Search Parameters
// =============================================================================

/// Default maximum search depth. Nodes deeper than this are not expanded.
pub const MAX_DEPTH: usize = 8;

/// Score of a stopped node at odd depth.
pub const WIN_SCORE: i64 = 1;

/// Score of a stopped node at even depth.
pub const LOSS_SCORE: i64 = -5;

/// Hard ceiling on the configurable search depth.
pub const DEPTH_LIMIT: usize = 16;

// =============================================================================
// Board Generation
// =============================================================================

/// Shortest generated board.
pub const MIN_BOARD_LEN: usize = 4;

/// Longest generated board, and the longest board the engine accepts.
pub const MAX_BOARD_LEN: usize = 10;

/// Minimum number of `++` pairs a generated board must contain.
pub const MIN_PAIRS: usize = 1;

/// Hard ceiling on the configurable board length.
///
/// An all-`+` board of this length yields about 442k nodes at any depth.
pub const BOARD_LEN_LIMIT: usize = 16;
