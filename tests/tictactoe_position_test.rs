//! Tests for turning user input into moves on the engine.

use tictactoe_timeline::{GameHistory, Player, Position, Square};

/// Parses `input` and applies it, returning whether the engine saw a move.
fn play_input(game: &mut GameHistory, input: &str) -> bool {
    match Position::from_label_or_number(input) {
        Some(pos) => game.apply_move(pos).is_ok(),
        None => false,
    }
}

#[test]
fn test_unparseable_input_never_reaches_engine() {
    let mut game = GameHistory::new();
    play_input(&mut game, "4");
    let before = game.clone();

    for input in ["9", "42", "-1", "nowhere", ""] {
        assert!(!play_input(&mut game, input), "{input:?} should be rejected");
    }
    assert_eq!(game, before);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_partial_labels_are_rejected() {
    let mut game = GameHistory::new();

    for input in ["top", "left", "-", "cent", "middle"] {
        assert!(!play_input(&mut game, input), "{input:?} should be rejected");
    }
    assert_eq!(game.history().len(), 1);
    assert!(game.current_board().squares().iter().all(|sq| *sq == Square::Empty));
}

#[test]
fn test_labels_and_indices_land_on_same_squares() {
    let mut game = GameHistory::new();
    assert!(play_input(&mut game, "Top-left"));
    assert!(play_input(&mut game, "4"));
    assert!(play_input(&mut game, "bottom-right"));

    let board = game.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));

    // "0" names the occupied top-left square; the engine refuses it.
    assert!(!play_input(&mut game, "0"));
    assert_eq!(game.current_move(), 3);
}

#[test]
fn test_valid_moves_follow_the_engine() {
    let mut game = GameHistory::new();
    assert_eq!(Position::valid_moves(game.current_board()).len(), 9);

    play_input(&mut game, "center");
    play_input(&mut game, "top-right");
    let valid = Position::valid_moves(game.current_board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::Center));
    assert!(!valid.contains(&Position::TopRight));

    game.jump_to(0).expect("jump to start");
    assert_eq!(Position::valid_moves(game.current_board()).len(), 9);
}
