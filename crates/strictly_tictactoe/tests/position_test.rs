//! Tests for tic-tac-toe positions and board rendering.

use strictly_tictactoe::{Board, Player, Position, Square};
use strum::IntoEnumIterator;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_all_matches_declaration_order() {
    let iterated: Vec<Position> = Position::iter().collect();
    assert_eq!(iterated, Position::ALL.to_vec());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_cell_labels() {
    assert_eq!(Position::TopLeft.cell_label(Square::Empty), "Cell 1, empty");
    assert_eq!(
        Position::BottomRight.cell_label(Square::Occupied(Player::O)),
        "Cell 9, O"
    );
}

#[test]
fn test_board_display() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));
    assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}
