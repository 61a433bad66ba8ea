//! Board representation for the flip game.
//!
//! A board is an immutable, fixed-length row of `+` and `-` symbols. A move
//! names the start index of a `++` pair and produces a new board where that
//! pair reads `--`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{MINUS, PLUS};
use crate::error::{Error, Result};

/// One cell of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Flippable marker, written `+`.
    Plus,
    /// Flipped marker, written `-`.
    Minus,
}

impl Symbol {
    pub fn to_char(self) -> char {
        match self {
            Symbol::Plus => PLUS,
            Symbol::Minus => MINUS,
        }
    }

    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            PLUS => Some(Symbol::Plus),
            MINUS => Some(Symbol::Minus),
            _ => None,
        }
    }
}

/// A game position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Vec<Symbol>,
}

impl Board {
    pub fn new(cells: Vec<Symbol>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Symbol> {
        self.cells.get(i).copied()
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Whether a move may start at index `i`.
    #[inline]
    pub fn is_legal_move(&self, i: usize) -> bool {
        i + 1 < self.cells.len()
            && self.cells[i] == Symbol::Plus
            && self.cells[i + 1] == Symbol::Plus
    }

    /// Start indices of all legal moves, ascending.
    pub fn move_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] == Symbol::Plus && pair[1] == Symbol::Plus)
            .map(|(i, _)| i)
    }

    /// Number of `++` pairs, counting overlapping ones.
    pub fn pair_count(&self) -> usize {
        self.move_indices().count()
    }

    /// Flip the pair starting at `i`, returning the resulting board.
    ///
    /// # Errors
    /// [`Error::InvalidMoveIndex`] if `i` is out of range or does not start a `++` pair.
    pub fn apply_move(&self, i: usize) -> Result<Board> {
        if !self.is_legal_move(i) {
            return Err(Error::InvalidMoveIndex {
                index: i,
                len: self.len(),
            });
        }
        Ok(self.flipped_at(i))
    }

    /// Flip without checking. Callers must pass a legal index.
    pub(crate) fn flipped_at(&self, i: usize) -> Board {
        let mut cells = self.cells.clone();
        cells[i] = Symbol::Minus;
        cells[i + 1] = Symbol::Minus;
        Board { cells }
    }

    /// Index of the move that turns `self` into `next`, if one exists.
    pub fn move_to(&self, next: &Board) -> Option<usize> {
        self.move_indices().find(|&i| self.flipped_at(i) == *next)
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Symbol::from_char(symbol).ok_or(Error::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>>>()
            .map(Board::new)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let b = board("++-+");
        assert_eq!(b.len(), 4);
        assert_eq!(b.get(2), Some(Symbol::Minus));
        assert_eq!(b.to_string(), "++-+");
    }

    #[test]
    fn test_parse_empty() {
        let b = board("");
        assert!(b.is_empty());
        assert_eq!(b.to_string(), "");
    }

    #[test]
    fn test_parse_rejects_other_symbols() {
        let err = "++x-".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidSymbol {
                symbol: 'x',
                position: 2
            }
        );
    }

    #[test]
    fn test_move_indices() {
        assert_eq!(board("+++-++").move_indices().collect::<Vec<_>>(), [0, 1, 4]);
        assert_eq!(board("+-+-").pair_count(), 0);
    }

    #[test]
    fn test_apply_move() {
        let b = board("-+++");
        assert_eq!(b.apply_move(1).unwrap().to_string(), "---+");
        assert_eq!(b.apply_move(2).unwrap().to_string(), "-+--");
        // Source board is untouched
        assert_eq!(b.to_string(), "-+++");
    }

    #[test]
    fn test_apply_move_rejects_bad_index() {
        let b = board("-+++");
        assert_eq!(
            b.apply_move(0),
            Err(Error::InvalidMoveIndex { index: 0, len: 4 })
        );
        assert!(b.apply_move(3).is_err());
        assert!(b.apply_move(99).is_err());
        assert!(board("").apply_move(0).is_err());
    }

    #[test]
    fn test_move_to() {
        let b = board("++++");
        assert_eq!(b.move_to(&board("+--+")), Some(1));
        assert_eq!(b.move_to(&board("----")), None);
        assert_eq!(b.move_to(&board("++++")), None);
    }
}
