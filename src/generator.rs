//! Random starting positions.
//!
//! Boards are drawn uniformly and rejected until they hold enough `++` pairs,
//! so a game never starts already decided.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Symbol};
use crate::config::EngineConfig;

/// Draw a random board within the configured length range.
///
/// `config` should already be validated; an unreachable pair requirement
/// would otherwise never be satisfied.
pub fn random_board(rng: &mut Rng, config: &EngineConfig) -> Board {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let len = rng.usize(config.min_board_len..=config.max_board_len);
        let cells = (0..len)
            .map(|_| if rng.bool() { Symbol::Plus } else { Symbol::Minus })
            .collect();
        let board = Board::new(cells);
        if board.pair_count() >= config.min_pairs {
            debug!(board = %board, attempts, "generated board");
            return board;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respects_length_and_pairs() {
        let config = EngineConfig::new().with_board_len(4, 10).with_min_pairs(2);
        let mut rng = Rng::with_seed(7);
        for _ in 0..200 {
            let b = random_board(&mut rng, &config);
            assert!((4..=10).contains(&b.len()), "bad length: {b}");
            assert!(b.pair_count() >= 2, "too few pairs: {b}");
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let config = EngineConfig::new();
        let a = random_board(&mut Rng::with_seed(42), &config);
        let b = random_board(&mut Rng::with_seed(42), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_length() {
        let config = EngineConfig::new().with_board_len(6, 6);
        let mut rng = Rng::with_seed(1);
        assert_eq!(random_board(&mut rng, &config).len(), 6);
    }
}
