//! Exhaustive checks of the win rules over every possible board.

use tictactoe_timeline::{Board, Player, Square, rules, rules::LINES};

/// Every assignment of {empty, X, O} to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

#[test]
fn test_winner_and_winning_line_never_disagree() {
    for board in all_boards() {
        let winner = rules::check_winner(&board);
        let line = rules::winning_line(&board);
        assert_eq!(winner.is_some(), line.is_some(), "{}", board.display());

        if let (Some(winner), Some(line)) = (winner, line) {
            for pos in line {
                assert_eq!(board.get(pos), Square::Occupied(winner));
            }
        }
    }
}

#[test]
fn test_winning_line_is_first_complete_line_in_scan_order() {
    for board in all_boards() {
        let first_complete = LINES.into_iter().find(|[a, b, c]| {
            board.get(*a) != Square::Empty
                && board.get(*a) == board.get(*b)
                && board.get(*a) == board.get(*c)
        });
        assert_eq!(rules::winning_line(&board), first_complete);
    }
}

#[test]
fn test_draw_requires_full_board_without_winner() {
    for board in all_boards() {
        assert_eq!(
            rules::is_draw(&board),
            rules::is_full(&board) && rules::check_winner(&board).is_none()
        );
    }
}
