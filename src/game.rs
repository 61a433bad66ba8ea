//! Turn controller for a human-versus-engine game.
//!
//! The game alternates between the human and the engine. Before each side
//! moves, the controller checks whether that side faces a board with no legal
//! move; if so, the game ends and *that* side is declared the winner.

use std::fmt;

use tracing::{info, trace};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::movegen::{is_terminal, successors};
use crate::search::SearchTree;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Engine,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Engine,
            Side::Engine => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Engine => write!(f, "engine"),
        }
    }
}

/// Controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingHumanMove,
    AwaitingEngineMove,
    GameOver { winner: Side },
}

impl GameState {
    fn awaiting(side: Side) -> Self {
        match side {
            Side::Human => GameState::AwaitingHumanMove,
            Side::Engine => GameState::AwaitingEngineMove,
        }
    }

    /// Side expected to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            GameState::AwaitingHumanMove => Some(Side::Human),
            GameState::AwaitingEngineMove => Some(Side::Engine),
            GameState::GameOver { .. } => None,
        }
    }
}

/// The engine's reply to a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineMove {
    /// Board after the engine's move
    pub board: Board,
    /// Start index of the flipped pair
    pub index: usize,
    /// Aggregated score of the chosen child
    pub score: i64,
    /// Number of nodes in the search tree
    pub nodes: usize,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    config: EngineConfig,
    board: Board,
    state: GameState,
    history: Vec<Board>,
}

impl Game {
    /// Start a game on `board` with `first` to move.
    ///
    /// # Errors
    /// Fails if the configuration is invalid or the board is longer than
    /// `config.max_board_len`.
    pub fn new(board: Board, config: EngineConfig, first: Side) -> Result<Self> {
        config.validate()?;
        config.check_board_len(board.len())?;
        let mut game = Self {
            config,
            history: vec![board.clone()],
            board,
            state: GameState::awaiting(first),
        };
        game.settle(first);
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Boards seen so far, starting position first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Boards the side to move may choose from.
    pub fn legal_moves(&self) -> Vec<Board> {
        successors(&self.board)
    }

    /// Play the human move that produces `next`.
    ///
    /// # Errors
    /// [`Error::IllegalMove`] if `next` is not one move away. The game state
    /// is unchanged on any error.
    pub fn play_human(&mut self, next: &Board) -> Result<()> {
        self.expect_turn(Side::Human)?;
        if self.board.move_to(next).is_none() {
            return Err(Error::IllegalMove {
                board: next.to_string(),
            });
        }
        self.advance(next.clone(), Side::Human);
        Ok(())
    }

    /// Play the human move starting at index `i`.
    pub fn play_human_index(&mut self, i: usize) -> Result<()> {
        self.expect_turn(Side::Human)?;
        let next = self.board.apply_move(i)?;
        self.advance(next, Side::Human);
        Ok(())
    }

    /// Search the current position and play the engine's choice.
    pub fn play_engine(&mut self) -> Result<EngineMove> {
        self.expect_turn(Side::Engine)?;
        let reply = self.think()?;
        self.advance(reply.board.clone(), Side::Engine);
        Ok(reply)
    }

    /// Search the current position without playing.
    pub fn think(&self) -> Result<EngineMove> {
        let tree = SearchTree::build(&self.board, &self.config);
        for child in tree.root().children() {
            trace!(board = %child.board(), score = child.score(), "candidate");
        }
        let best = tree.best_child().ok_or(Error::NoLegalMoves)?;
        let index = self.board.move_to(best.board()).ok_or(Error::NoLegalMoves)?;
        Ok(EngineMove {
            board: best.board().clone(),
            index,
            score: best.score(),
            nodes: tree.root().node_count(),
        })
    }

    /// Replace the depth bound for subsequent engine moves.
    pub fn set_max_depth(&mut self, depth: usize) -> Result<()> {
        let config = self.config.clone().with_max_depth(depth);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn expect_turn(&self, side: Side) -> Result<()> {
        match self.state.to_move() {
            None => Err(Error::GameOver),
            Some(expected) if expected != side => Err(Error::NotYourTurn { expected }),
            Some(_) => Ok(()),
        }
    }

    fn advance(&mut self, next: Board, mover: Side) {
        info!(side = %mover, from = %self.board, to = %next, "move played");
        self.history.push(next.clone());
        self.board = next;
        self.settle(mover.opponent());
    }

    /// Hand the turn to `side`, or end the game if `side` cannot move.
    fn settle(&mut self, side: Side) {
        if is_terminal(&self.board) {
            info!(winner = %side, board = %self.board, "game over");
            self.state = GameState::GameOver { winner: side };
        } else {
            self.state = GameState::awaiting(side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(s: &str, first: Side) -> Game {
        Game::new(s.parse().unwrap(), EngineConfig::new(), first).unwrap()
    }

    #[test]
    fn test_starts_awaiting_first_mover() {
        assert_eq!(game("++++", Side::Human).state(), GameState::AwaitingHumanMove);
        assert_eq!(game("++++", Side::Engine).state(), GameState::AwaitingEngineMove);
    }

    #[test]
    fn test_terminal_start_ends_immediately() {
        let g = game("+-+-", Side::Human);
        assert_eq!(g.state(), GameState::GameOver { winner: Side::Human });
        let g = game("", Side::Engine);
        assert_eq!(g.winner(), Some(Side::Engine));
    }

    #[test]
    fn test_human_then_engine() {
        let mut g = game("++++", Side::Human);
        g.play_human_index(0).unwrap();
        assert_eq!(g.board().to_string(), "--++");
        assert_eq!(g.state(), GameState::AwaitingEngineMove);

        let reply = g.play_engine().unwrap();
        assert_eq!(reply.board.to_string(), "----");
        assert_eq!(reply.index, 2);
        // Human now faces a board with no moves and is declared the winner.
        assert_eq!(g.winner(), Some(Side::Human));
        assert_eq!(g.history().len(), 3);
    }

    #[test]
    fn test_engine_facing_terminal_wins() {
        let mut g = game("++-", Side::Human);
        g.play_human(&"---".parse().unwrap()).unwrap();
        assert_eq!(g.winner(), Some(Side::Engine));
        assert_eq!(g.play_engine(), Err(Error::GameOver));
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut g = game("++-+", Side::Human);
        assert!(matches!(
            g.play_human(&"-+-+".parse().unwrap()),
            Err(Error::IllegalMove { .. })
        ));
        assert!(matches!(
            g.play_human_index(2),
            Err(Error::InvalidMoveIndex { .. })
        ));
        assert_eq!(g.board().to_string(), "++-+");
        assert_eq!(g.state(), GameState::AwaitingHumanMove);
        assert_eq!(g.history().len(), 1);
    }

    #[test]
    fn test_think_on_terminal_board() {
        let g = game("+-+", Side::Engine);
        assert_eq!(g.state(), GameState::GameOver { winner: Side::Engine });
        assert_eq!(g.think(), Err(Error::NoLegalMoves));
    }

    #[test]
    fn test_wrong_turn() {
        let mut g = game("++++", Side::Human);
        assert_eq!(
            g.play_engine(),
            Err(Error::NotYourTurn {
                expected: Side::Human
            })
        );
    }

    #[test]
    fn test_engine_picks_highest_score() {
        let g = game("++++", Side::Engine);
        let reply = g.think().unwrap();
        assert_eq!(reply.board.to_string(), "+--+");
        assert_eq!(reply.score, 1);
        assert_eq!(reply.nodes, 6);
    }

    #[test]
    fn test_rejects_long_board() {
        let long = "+".repeat(11);
        let result = Game::new(long.parse().unwrap(), EngineConfig::new(), Side::Human);
        assert_eq!(result.unwrap_err(), Error::BoardTooLong { len: 11, max: 10 });
    }

    #[test]
    fn test_set_max_depth() {
        let mut g = game("++++", Side::Human);
        assert!(g.set_max_depth(3).is_ok());
        assert_eq!(g.config().max_depth, 3);
        assert!(g.set_max_depth(99).is_err());
        assert_eq!(g.config().max_depth, 3);
    }
}
