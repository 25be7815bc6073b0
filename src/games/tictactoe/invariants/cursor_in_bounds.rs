//! Cursor invariant: history is non-empty and the cursor points into it.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= current_move < history.len()`.
///
/// Implies the history holds at least one snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing snapshot"
    }
}
