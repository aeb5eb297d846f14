//! Board and placement behavior through the public API

use walltris::core::{can_place_at, drop_shape, find_resting_row, get_shape, Board, PlaceError};
use walltris::types::{PieceKind, FILLED};

#[test]
fn new_board_has_three_walls() {
    let board = Board::new(8);
    for y in 0..8 {
        assert!(board.is_wall(0, y));
        assert!(board.is_wall(7, y));
        assert_eq!(board.get(0, y), Some(FILLED));
        assert_eq!(board.get(7, y), Some(FILLED));
    }
    for x in 0..8 {
        assert_eq!(board.get(x, 7), Some(FILLED));
    }
    // Open top and empty interior.
    assert_eq!(board.get(3, 0), Some(0));
    assert_eq!(board.interior_filled_count(), 0);
    assert_eq!(board.get(8, 0), None);
}

#[test]
fn can_place_at_follows_the_walls() {
    let straight = get_shape(PieceKind::Straight);
    assert!(!can_place_at(12, 0, &straight));
    assert!(can_place_at(12, 1, &straight));
    assert!(can_place_at(12, 7, &straight));
    assert!(!can_place_at(12, 8, &straight));
}

#[test]
fn drop_on_empty_board_fills_cell_count() {
    for kind in PieceKind::ALL {
        let mut board = Board::new(10);
        let shape = get_shape(kind);
        let before = board.filled_count();
        let row = drop_shape(&mut board, &shape, 3).unwrap();
        assert_eq!(row, 9, "{kind:?}");
        assert_eq!(board.filled_count(), before + shape.cell_count(), "{kind:?}");
    }
}

#[test]
fn identical_piece_stacks_on_the_first() {
    for kind in [
        PieceKind::Straight,
        PieceKind::Square,
        PieceKind::LShape,
        PieceKind::SevenShape,
    ] {
        let mut board = Board::new(12);
        let shape = get_shape(kind);
        let first = drop_shape(&mut board, &shape, 4).unwrap();
        let second = drop_shape(&mut board, &shape, 4).unwrap();
        assert_eq!(second, first - shape.height(), "{kind:?}");
    }
}

#[test]
fn search_does_not_mutate_the_board() {
    let board = Board::new(12);
    let shape = get_shape(PieceKind::Square);
    assert_eq!(find_resting_row(&board, &shape, 5), Some(11));
    assert_eq!(board.interior_filled_count(), 0);
}

#[test]
fn out_of_bounds_drop_is_rejected_untouched() {
    let mut board = Board::new(12);
    let shape = get_shape(PieceKind::Square);
    assert_eq!(
        drop_shape(&mut board, &shape, 10),
        Err(PlaceError::OutOfBounds { left: 10 })
    );
    assert_eq!(board.interior_filled_count(), 0);
}

#[test]
fn second_n_shape_nests_into_the_first() {
    // The kinks interlock, so the second piece sits one row lower than a
    // plain stack would.
    let mut board = Board::new(12);
    let shape = get_shape(PieceKind::NShape);
    assert_eq!(drop_shape(&mut board, &shape, 4), Ok(11));
    assert_eq!(drop_shape(&mut board, &shape, 4), Ok(9));
    assert_eq!(board.interior_filled_count(), 8);
}
