//! Rule options that are fixed for the lifetime of a game.

use serde::{Deserialize, Serialize};

/// What `jump_to` does with a move number past the end of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumpPolicy {
    /// Refuse the jump and leave the cursor where it is.
    #[default]
    Reject,
    /// Jump to the latest snapshot instead.
    Clamp,
}

/// Rule options for a [`GameHistory`](super::GameHistory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameOptions {
    /// Report a full board with no winner as a draw. Off by default, in
    /// which case the status keeps naming the next player.
    #[serde(default)]
    pub detect_draws: bool,
    /// Handling of out-of-range jumps.
    #[serde(default)]
    pub jump_policy: JumpPolicy,
}
