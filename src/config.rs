//! Engine configuration.
//!
//! A single immutable value carries every tunable the engine and the board
//! generator read. It is passed explicitly to whoever needs it.

use crate::constants::{
    BOARD_LEN_LIMIT, DEPTH_LIMIT, LOSS_SCORE, MAX_BOARD_LEN, MAX_DEPTH, MIN_BOARD_LEN, MIN_PAIRS,
    WIN_SCORE,
};
use crate::error::{Error, Result};

/// Configuration for the search engine and board generator.
///
/// # Examples
///
/// ```
/// use flipgame::config::EngineConfig;
///
/// let config = EngineConfig::new().with_max_depth(4).with_board_len(4, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Nodes deeper than this are scored without expansion
    pub max_depth: usize,
    /// Score of a stopped node at odd depth
    pub win_score: i64,
    /// Score of a stopped node at even depth
    pub loss_score: i64,
    /// Shortest generated board
    pub min_board_len: usize,
    /// Longest generated or accepted board
    pub max_board_len: usize,
    /// Minimum number of `++` pairs in a generated board
    pub min_pairs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a configuration with the default constants.
    pub fn new() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            win_score: WIN_SCORE,
            loss_score: LOSS_SCORE,
            min_board_len: MIN_BOARD_LEN,
            max_board_len: MAX_BOARD_LEN,
            min_pairs: MIN_PAIRS,
        }
    }

    /// Set the maximum search depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the scores assigned to stopped nodes at odd and even depth.
    pub fn with_scores(mut self, win: i64, loss: i64) -> Self {
        self.win_score = win;
        self.loss_score = loss;
        self
    }

    /// Set the inclusive range of generated board lengths.
    pub fn with_board_len(mut self, min: usize, max: usize) -> Self {
        self.min_board_len = min;
        self.max_board_len = max;
        self
    }

    /// Set the minimum number of `++` pairs in a generated board.
    pub fn with_min_pairs(mut self, pairs: usize) -> Self {
        self.min_pairs = pairs;
        self
    }

    /// Score of a node whose expansion stopped at `depth`.
    #[inline]
    pub fn stopped_score(&self, depth: usize) -> i64 {
        if depth % 2 == 0 {
            self.loss_score
        } else {
            self.win_score
        }
    }

    /// Check the configuration against the hard limits.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > DEPTH_LIMIT {
            return Err(invalid(format!(
                "max depth {} exceeds the limit of {DEPTH_LIMIT}",
                self.max_depth
            )));
        }
        if self.max_board_len > BOARD_LEN_LIMIT {
            return Err(invalid(format!(
                "max board length {} exceeds the limit of {BOARD_LEN_LIMIT}",
                self.max_board_len
            )));
        }
        if self.min_board_len > self.max_board_len {
            return Err(invalid(format!(
                "min board length {} is greater than max board length {}",
                self.min_board_len, self.max_board_len
            )));
        }
        // A board of length n holds at most n - 1 overlapping pairs.
        if self.min_pairs > self.max_board_len.saturating_sub(1) {
            return Err(invalid(format!(
                "{} pairs cannot fit in a board of length {}",
                self.min_pairs, self.max_board_len
            )));
        }
        Ok(())
    }

    /// Reject boards longer than the configured maximum.
    pub fn check_board_len(&self, len: usize) -> Result<()> {
        if len > self.max_board_len {
            return Err(Error::BoardTooLong {
                len,
                max: self.max_board_len,
            });
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfiguration { message }
}
