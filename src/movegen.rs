//! Legal move generation.

use crate::board::Board;

/// All boards reachable from `board` in one move, ordered by move start index.
///
/// An empty result means the position is terminal.
pub fn successors(board: &Board) -> Vec<Board> {
    board.move_indices().map(|i| board.flipped_at(i)).collect()
}

/// Whether `board` admits no legal move.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    board.move_indices().next().is_none()
}
