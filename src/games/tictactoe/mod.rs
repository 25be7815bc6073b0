//! Tic-tac-toe with a time-travel move history.

mod action;
mod history;
pub mod invariants;
mod options;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use history::{GameHistory, history_label, turn};
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use options::{GameOptions, JumpPolicy};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
pub use view::GameView;
