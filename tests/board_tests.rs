//! Board tests - walls, merging and line clearing

use turn_tetris::core::{Board, BoardError, Grid, Piece, Position};
use turn_tetris::types::{effective_size, Cell, PieceKind, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

fn board_from(rows: &[&str]) -> Board {
    Board::from_grid(Grid::parse(rows).unwrap()).unwrap()
}

#[test]
fn test_board_new_has_walls_and_floor() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        let board = Board::new(size);
        let side = effective_size(size) as i32;
        assert_eq!(board.size(), size);
        assert_eq!(board.eff_size(), size + 2);

        for row in 0..side {
            for col in 0..side {
                let boundary = col == 0 || col == side - 1 || row == side - 1;
                let expected = if boundary { Cell::Filled } else { Cell::Empty };
                assert_eq!(board.get(row, col), Some(expected), "size {size} ({row}, {col})");
            }
        }
        assert_eq!(board.interior_filled_count(), 0);
    }
}

#[test]
fn test_board_top_row_is_open() {
    let board = Board::new(6);
    for col in 1..7 {
        assert_eq!(board.get(0, col), Some(Cell::Empty));
    }
    assert_eq!(board.get(-1, 3), None);
    assert_eq!(board.get(3, 8), None);
}

#[test]
fn test_render_snapshot_leaves_board_untouched() {
    let board = Board::new(4);
    let view = board.render_snapshot(&Piece::new(PieceKind::J), Position::new(1, 1));

    assert_eq!(
        view.to_string(),
        "*    *\n**   *\n**   *\n***  *\n*    *\n******\n"
    );
    assert_eq!(board, Board::new(4));
}

#[test]
fn test_render_snapshot_drops_cells_off_grid() {
    let board = Board::new(4);
    let view = board.render_snapshot(&Piece::new(PieceKind::I), Position::new(-2, 2));
    assert_eq!(view.filled_count(), board.grid().filled_count() + 2);
}

#[test]
fn test_merge_without_full_row() {
    let mut board = Board::new(4);
    let cleared = board.merge_and_clear(&Piece::new(PieceKind::O), Position::new(3, 1));
    assert_eq!(cleared, 0);
    assert_eq!(board.interior_filled_count(), 4);
    assert!(board.is_filled(3, 1));
    assert!(board.is_filled(4, 2));
}

#[test]
fn test_merge_never_empties_cells() {
    let mut board = board_from(&["*    *", "*    *", "*    *", "* *  *", "* *  *", "******"]);
    let before = board.interior_filled_count();
    // Overlapping merge: legality is the caller's problem, cells stay filled.
    board.merge_and_clear(&Piece::new(PieceKind::I), Position::new(1, 2));
    assert_eq!(board.interior_filled_count(), before + 2);
}

#[test]
fn test_clear_single_row() {
    let mut board = board_from(&[
        "*    *",
        "*    *",
        "*    *",
        "*    *",
        "*** **",
        "******",
    ]);
    let cleared = board.merge_and_clear(&Piece::new(PieceKind::I), Position::new(1, 3));
    assert_eq!(cleared, 1);
    assert_eq!(
        board.grid().to_string(),
        "*    *\n*    *\n*  * *\n*  * *\n*  * *\n******\n"
    );
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = board_from(&[
        "*    *",
        "*    *",
        "** ***",
        "*  * *",
        "** ***",
        "******",
    ]);
    // Vertical I in column 2 completes rows 2 and 4 but not row 3
    let cleared = board.merge_and_clear(&Piece::new(PieceKind::I), Position::new(1, 2));
    assert_eq!(cleared, 2);
    assert_eq!(
        board.grid().to_string(),
        "*    *\n*    *\n*    *\n* *  *\n* ** *\n******\n"
    );
}

#[test]
fn test_floor_is_never_cleared() {
    let mut board = Board::new(4);
    let floor_before: Vec<Cell> = board.grid().row(5).unwrap().to_vec();
    board.merge_and_clear(&Piece::new(PieceKind::O), Position::new(3, 3));
    assert_eq!(board.grid().row(5), Some(floor_before.as_slice()));
}

#[test]
fn test_grid_parse_errors() {
    assert_eq!(
        Grid::parse(&["***", "*x*", "***"]),
        Err(BoardError::BadChar {
            row: 1,
            col: 1,
            ch: 'x'
        })
    );
    assert_eq!(
        Grid::parse(&["****", "*"]),
        Err(BoardError::NotSquare { rows: 2, cols: 4 })
    );
    assert_eq!(
        Board::from_grid(Grid::parse(&["**", "**"]).unwrap()),
        Err(BoardError::TooSmall { side: 2 })
    );
}
