//! Tests for tic-tac-toe position enum.

use strictly_minimax::{Board, Mark, Position, Square};

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
fn test_move_numbers_are_one_based() {
    assert_eq!(Position::TopLeft.move_number(), 1);
    assert_eq!(Position::BottomRight.move_number(), 9);
    assert_eq!(Position::from_move_number("4"), Some(Position::MiddleLeft));
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
    assert_eq!(board.empty_count(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::Human));
    board.set(Position::Center, Square::Occupied(Mark::Ai));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert_eq!(board.empty_count(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
