//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameHistory, turn};
use super::Invariant;

/// Invariant: the mark added by snapshot `n + 1` belongs to `turn(n)`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.moves()
            .iter()
            .enumerate()
            .all(|(n, mv)| mv.is_some_and(|mv| mv.player == turn(n)))
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
