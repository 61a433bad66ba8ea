//! Line-based command protocol for playing against the engine.
//!
//! The protocol follows the shape of the Go Text Protocol: each line holds an
//! optional numeric id, a command and its arguments. Successful responses
//! start with `=`, failures with `?`, and every response ends with a blank
//! line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `new [board]` - Start a new game, on a random board when none is given
//! - `showboard` - Show the current board
//! - `moves` - List legal moves as `index: board`
//! - `play <index|board>` - Play a human move, by start index or resulting board
//! - `genmove` - Let the engine move
//! - `status` - Show whose turn it is, or who won
//! - `depth <n>` - Set the search depth
//! - `analyze` - Show the engine's scores for each legal move
//! - `showtree [levels]` - Print the search tree from the current board
//!
//! ## Example
//!
//! ```ignore
//! use flipgame::shell::Shell;
//! let mut shell = Shell::new(EngineConfig::new(), Rng::new(), false)?;
//! shell.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use fastrand::Rng;
use tracing::warn;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::game::{Game, GameState, Side};
use crate::generator::random_board;
use crate::render::{render_choices, render_tree};
use crate::search::SearchTree;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "analyze",
    "depth",
    "genmove",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "new",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "showtree",
    "status",
    "version",
];

/// Shell state.
pub struct Shell {
    /// Game in progress
    game: Game,
    /// Configuration for new games
    config: EngineConfig,
    /// Source of random starting boards
    rng: Rng,
    /// Answer a human move with an engine move in the same response
    autoreply: bool,
}

impl Shell {
    /// Create a shell with a fresh game on a random board, human to move.
    pub fn new(config: EngineConfig, mut rng: Rng, autoreply: bool) -> Result<Self> {
        config.validate()?;
        let board = random_board(&mut rng, &config);
        let game = Game::new(board, config.clone(), Side::Human)?;
        Ok(Self {
            game,
            config,
            rng,
            autoreply,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "new" => {
                let board = match args.first() {
                    Some(text) => match text.parse::<Board>() {
                        Ok(board) => board,
                        Err(e) => return (false, e.to_string()),
                    },
                    None => random_board(&mut self.rng, &self.config),
                };
                match Game::new(board, self.config.clone(), Side::Human) {
                    Ok(game) => {
                        self.game = game;
                        (true, self.describe())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, self.game.board().to_string()),

            "moves" => {
                let lines: Vec<String> = self
                    .game
                    .board()
                    .move_indices()
                    .zip(self.game.legal_moves())
                    .map(|(i, b)| format!("{i}: {b}"))
                    .collect();
                (true, lines.join("\n"))
            }

            "play" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let result = match arg.parse::<usize>() {
                    Ok(index) => self.game.play_human_index(index),
                    Err(_) => arg
                        .parse::<Board>()
                        .and_then(|next| self.game.play_human(&next)),
                };
                if let Err(e) = result {
                    warn!(input = %arg, error = %e, "rejected human move");
                    return (false, e.to_string());
                }
                if self.autoreply && self.game.state() == GameState::AwaitingEngineMove {
                    return self.genmove();
                }
                (true, self.describe())
            }

            "genmove" => self.genmove(),

            "status" => (true, self.status()),

            "depth" => match args.first().map(|a| a.parse::<usize>()) {
                Some(Ok(depth)) => match self.game.set_max_depth(depth) {
                    Ok(()) => {
                        self.config.max_depth = depth;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                },
                Some(Err(_)) => (false, "invalid depth".to_string()),
                None => (true, self.config.max_depth.to_string()),
            },

            "analyze" => {
                let tree = SearchTree::build(self.game.board(), self.game.config());
                if tree.root().children().is_empty() {
                    return (false, "no legal moves".to_string());
                }
                (true, render_choices(tree.root()).trim_end().to_string())
            }

            "showtree" => {
                let limit = match args.first().map(|a| a.parse::<usize>()) {
                    Some(Ok(levels)) => Some(levels),
                    Some(Err(_)) => return (false, "invalid level count".to_string()),
                    None => None,
                };
                let tree = SearchTree::build(self.game.board(), self.game.config());
                (true, render_tree(tree.root(), limit).trim_end().to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn genmove(&mut self) -> (bool, String) {
        match self.game.play_engine() {
            Ok(reply) => (
                true,
                format!("{}: {}\n{}", reply.index, reply.board, self.status()),
            ),
            Err(e) => (false, e.to_string()),
        }
    }

    fn describe(&self) -> String {
        format!("{}\n{}", self.game.board(), self.status())
    }

    fn status(&self) -> String {
        match self.game.state() {
            GameState::AwaitingHumanMove => "human to move".to_string(),
            GameState::AwaitingEngineMove => "engine to move".to_string(),
            GameState::GameOver { winner } => format!("game over: {winner} wins"),
        }
    }
}
