//! Board history with time travel.
//!
//! [`GameHistory`] keeps every board snapshot of the current branch and a
//! cursor into it. Turn, winner and winning line are derived from the
//! snapshot under the cursor on every query.

use super::action::{JumpError, Move, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::options::{GameOptions, JumpPolicy};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Player to move at the given move number: X on even, O on odd.
pub fn turn(move_number: usize) -> Player {
    if move_number % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Label shown for a history entry.
pub fn history_label(move_number: usize) -> String {
    if move_number == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", move_number)
    }
}

/// Sequence of board snapshots plus the snapshot currently on display.
///
/// Invariants: `history` is never empty and `current_move` always indexes
/// into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    history: Vec<Board>,
    current_move: usize,
    options: GameOptions,
}

impl GameHistory {
    /// Creates a history holding one empty board, with default options.
    #[instrument]
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    /// Creates a history holding one empty board.
    #[instrument]
    pub fn with_options(options: GameOptions) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            options,
        }
    }

    /// Builds a history from raw parts without checking anything.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
            options: GameOptions::default(),
        }
    }

    /// Rule options this game was created with.
    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// All snapshots of the current branch, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Index of the newest snapshot.
    pub fn last_move(&self) -> usize {
        self.history.len() - 1
    }

    /// The snapshot on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Player who moves next from the snapshot on display.
    pub fn to_move(&self) -> Player {
        turn(self.current_move)
    }

    /// Winner on the snapshot on display.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Winning triple on the snapshot on display.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Whether `pos` belongs to the winning line on display.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }

    /// Status of the snapshot on display.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.options.detect_draws && rules::is_full(self.current_board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Labels for every history entry, in order.
    pub fn history_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(history_label).collect()
    }

    /// Moves that produced each snapshot after the first.
    ///
    /// Entry `n` is the move that turned snapshot `n` into `n + 1`; `None`
    /// when the two snapshots do not differ by exactly one new mark.
    pub fn moves(&self) -> Vec<Option<Move>> {
        self.history
            .windows(2)
            .map(|pair| added_mark(&pair[0], &pair[1]))
            .collect()
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Snapshots after the one on display are discarded before the new one
    /// is appended, so playing from the past starts a new branch.
    ///
    /// # Errors
    ///
    /// Refuses the move, leaving the game untouched, when the board on
    /// display already has a winner or the square is occupied.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Move, MoveError> {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            debug!(%winner, "Move refused: game already won");
            return Err(MoveError::GameOver(winner));
        }
        if !board.is_empty(pos) {
            debug!("Move refused: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let mut next = board.clone();
        next.set(pos, Square::Occupied(player));

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            %player,
            position = %pos,
            discarded,
            current_move = self.current_move,
            "Move applied"
        );
        debug_assert!(HistoryInvariants::check_all(self).is_ok());
        Ok(Move::new(player, pos))
    }

    /// Moves the cursor to snapshot `move_number` without touching history.
    ///
    /// Returns the move number actually on display afterwards.
    ///
    /// # Errors
    ///
    /// With [`JumpPolicy::Reject`], refuses a move number past the end of
    /// history. With [`JumpPolicy::Clamp`] this never fails.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<usize, JumpError> {
        let target = if move_number < self.history.len() {
            move_number
        } else {
            match self.options.jump_policy {
                JumpPolicy::Reject => {
                    debug!(len = self.history.len(), "Jump refused: out of range");
                    return Err(JumpError::OutOfRange {
                        requested: move_number,
                        len: self.history.len(),
                    });
                }
                JumpPolicy::Clamp => self.last_move(),
            }
        };

        self.current_move = target;
        debug!(target, "Jumped");
        debug_assert!(HistoryInvariants::check_all(self).is_ok());
        Ok(target)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// The single mark present in `after` but not in `before`.
fn added_mark(before: &Board, after: &Board) -> Option<Move> {
    let mut added = Position::ALL.iter().filter_map(|&pos| {
        match (before.get(pos), after.get(pos)) {
            (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
            _ => None,
        }
    });
    let first = added.next()?;
    let changed_elsewhere = Position::ALL
        .iter()
        .any(|&pos| pos != first.position && before.get(pos) != after.get(pos));
    (!changed_elsewhere).then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameHistory {
        let mut game = GameHistory::new();
        for &idx in indices {
            game.apply_move(Position::ALL[idx]).expect("legal move");
        }
        game
    }

    #[test]
    fn test_new_history_has_one_empty_board() {
        let game = GameHistory::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_turn_alternates() {
        assert_eq!(turn(0), Player::X);
        assert_eq!(turn(1), Player::O);
        for n in 0..20 {
            assert_ne!(turn(n), turn(n + 1));
        }
    }

    #[test]
    fn test_moves_alternate_marks() {
        let game = play(&[4, 0, 8]);
        let board = game.current_board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut game = play(&[4]);
        let before = game.clone();
        assert_eq!(
            game.apply_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let mut game = play(&[0, 4, 1, 3, 2]);
        assert_eq!(game.winner(), Some(Player::X));
        let before = game.clone();
        assert_eq!(
            game.apply_move(Position::BottomRight),
            Err(MoveError::GameOver(Player::X))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_from_past_discards_later_snapshots() {
        let mut game = play(&[0, 1, 2, 3]);
        assert_eq!(game.history().len(), 5);
        game.jump_to(2).unwrap();
        game.apply_move(Position::Center).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_move(), 3);
        assert_eq!(game.history().len(), game.current_move() + 1);
        // Snapshot 3 now holds X in the center; square 2 is free again.
        let board = game.current_board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert!(board.is_empty(Position::TopRight));
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut game = play(&[0, 1, 2]);
        let snapshots = game.history().to_vec();
        assert_eq!(game.jump_to(1), Ok(1));
        assert_eq!(game.history(), snapshots.as_slice());
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.jump_to(3), Ok(3));
        assert_eq!(game.current_move(), 3);
    }

    #[test]
    fn test_jump_out_of_range_rejected_by_default() {
        let mut game = play(&[0]);
        let before = game.clone();
        assert_eq!(
            game.jump_to(5),
            Err(JumpError::OutOfRange {
                requested: 5,
                len: 2
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_out_of_range_clamps_when_configured() {
        let mut game = GameHistory::with_options(GameOptions {
            jump_policy: JumpPolicy::Clamp,
            ..GameOptions::default()
        });
        game.apply_move(Position::Center).unwrap();
        game.jump_to(0).unwrap();
        assert_eq!(game.jump_to(42), Ok(1));
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_jump_back_past_win_reopens_play() {
        let mut game = play(&[0, 4, 1, 3, 2]);
        game.jump_to(4).unwrap();
        assert_eq!(game.winner(), None);
        assert_eq!(game.apply_move(Position::BottomRight).map(|m| m.player), Ok(Player::X));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_full_board_without_winner() {
        // X:0,1,5,6,8  O:2,3,4,7
        let mut game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert!(rules::is_full(game.current_board()));
        assert_eq!(game.winner(), None);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.status(), GameStatus::InProgress(Player::O));
        assert_eq!(game.status().to_string(), "Next player: O");
        let before = game.clone();
        assert!(game.apply_move(Position::Center).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw_reported_when_enabled() {
        let mut game = GameHistory::with_options(GameOptions {
            detect_draws: true,
            ..GameOptions::default()
        });
        for idx in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            game.apply_move(Position::ALL[idx]).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        game.jump_to(8).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_winning_squares() {
        let game = play(&[0, 4, 1, 3, 2]);
        assert!(game.is_winning_square(Position::TopLeft));
        assert!(game.is_winning_square(Position::TopCenter));
        assert!(game.is_winning_square(Position::TopRight));
        assert!(!game.is_winning_square(Position::Center));
    }

    #[test]
    fn test_labels_and_moves() {
        let game = play(&[4, 0]);
        assert_eq!(
            game.history_labels(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
        assert_eq!(
            game.moves(),
            vec![
                Some(Move::new(Player::X, Position::Center)),
                Some(Move::new(Player::O, Position::TopLeft)),
            ]
        );
    }
}
