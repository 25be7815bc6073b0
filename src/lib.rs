//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Games**: board, rules, and [`GameHistory`], the snapshot list with a
//!   cursor that supports jumping back and branching
//! - **Session**: [`GameSession`] wraps a game and notifies subscribers of
//!   every change
//! - **Config**: [`GameConfig`] loaded from TOML
//! - **TUI**: a ratatui front end
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameHistory, GameStatus, Player, Position};
//!
//! let mut game = GameHistory::new();
//! game.apply_move(Position::Center).unwrap();
//! game.apply_move(Position::TopLeft).unwrap();
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight).unwrap();
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{GameEvent, GameSession};

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameHistory, GameOptions, GameStatus, GameView, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, JumpError, JumpPolicy, Move, MoveError, Player, Position,
    Square, history_label, rules, turn,
};
