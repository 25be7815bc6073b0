//! Render-ready snapshot of a game.

use super::history::GameHistory;
use super::types::{GameStatus, Player, Square};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Marks in row-major order; `None` for empty squares.
    board: [Option<Player>; 9],
    /// Derived status.
    status: GameStatus,
    /// Status line, e.g. "Next player: X".
    status_text: String,
    /// Indices of the winning triple, if any.
    winning_line: Option<[usize; 3]>,
    /// One label per history entry.
    history_labels: Vec<String>,
    /// Index of the entry on display.
    current_move: usize,
}

impl From<&GameHistory> for GameView {
    fn from(game: &GameHistory) -> Self {
        let status = game.status();
        let squares = *game.current_board().squares();
        Self {
            board: squares.map(Square::player),
            status,
            status_text: status.to_string(),
            winning_line: game
                .winning_line()
                .map(|line| line.map(|pos| pos.to_index())),
            history_labels: game.history_labels(),
            current_move: game.current_move(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_view_of_won_game() {
        let mut game = GameHistory::new();
        for idx in [0, 4, 1, 3, 2] {
            game.apply_move(Position::ALL[idx]).unwrap();
        }
        let view = GameView::from(&game);
        assert_eq!(view.status_text(), "Winner: X");
        assert_eq!(view.winning_line(), &Some([0, 1, 2]));
        assert_eq!(view.board()[4], Some(Player::O));
        assert_eq!(view.board()[8], None);
        assert_eq!(view.history_labels().len(), 6);
        assert_eq!(*view.current_move(), 5);
    }

    #[test]
    fn test_view_serializes_marks_as_strings() {
        let mut game = GameHistory::new();
        game.apply_move(Position::Center).unwrap();
        let json = serde_json::to_value(GameView::from(&game)).unwrap();
        assert_eq!(json["board"][4], "X");
        assert!(json["board"][0].is_null());
        assert_eq!(json["status_text"], "Next player: O");
        assert!(json["winning_line"].is_null());
        assert_eq!(json["history_labels"][1], "Go to move #1");
    }
}
