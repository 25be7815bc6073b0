//! Monotonic board invariant: squares never change once set.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: each snapshot adds exactly one mark to its predecessor.
///
/// The first snapshot is the empty board, and no square that is occupied
/// in one snapshot is cleared or overwritten in a later one.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(game: &GameHistory) -> bool {
        let starts_empty = game
            .history()
            .first()
            .is_some_and(|board| board.occupied() == 0);

        starts_empty && game.moves().iter().all(Option::is_some)
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
