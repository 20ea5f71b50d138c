//! Pieces module - shape catalog, transforms and legality checks
//!
//! A piece is a small binary matrix. Rotating it builds a new matrix; nothing
//! is edited in place. Every legality check comes down to [`overlaps`] against
//! the permanent grid, which never contains the falling piece itself.

use arrayvec::ArrayVec;

use crate::board::Grid;
use crate::rng::RandomSource;
use crate::types::{PieceKind, SPAWN_ROW};

/// Largest row or column count of any piece matrix
pub const MAX_EXTENT: usize = 4;

/// Offset of an occupied cell from the piece's top-left corner, as (row, col)
pub type CellOffset = (usize, usize);

/// Grid location of a piece matrix's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Canonical matrix for each kind, rows top to bottom
fn canonical_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1], &[1], &[1], &[1]],
        PieceKind::J => &[&[1, 0], &[1, 0], &[1, 1]],
        PieceKind::L => &[&[0, 1], &[0, 1], &[1, 1]],
        PieceKind::S => &[&[0, 1], &[1, 1], &[1, 0]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
    }
}

/// A piece shape: `height` x `width` cells, unused mask entries stay false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    height: usize,
    width: usize,
    mask: [[bool; MAX_EXTENT]; MAX_EXTENT],
}

impl Piece {
    /// Canonical (spawn) orientation of a kind
    pub fn new(kind: PieceKind) -> Self {
        let rows = canonical_rows(kind);
        let mut mask = [[false; MAX_EXTENT]; MAX_EXTENT];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                mask[r][c] = v == 1;
            }
        }
        Self {
            kind,
            height: rows.len(),
            width: rows[0].len(),
            mask,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> ArrayVec<CellOffset, { MAX_EXTENT * MAX_EXTENT }> {
        let mut out = ArrayVec::new();
        for r in 0..self.height {
            for c in 0..self.width {
                if self.mask[r][c] {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Matrix as 0/1 rows, mostly for tests and debugging
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|r| (0..self.width).map(|c| self.mask[r][c] as u8).collect())
            .collect()
    }
}

/// Every kind in catalog order, canonical orientation
pub fn catalog() -> [Piece; 5] {
    PieceKind::ALL.map(Piece::new)
}

/// Pick one of the five shapes uniformly
pub fn random_piece(rng: &mut impl RandomSource) -> Piece {
    let kinds = PieceKind::ALL;
    Piece::new(kinds[rng.pick_index(kinds.len())])
}

/// Spawn position: the top row, a uniformly random column that keeps the
/// whole width clear of both side walls.
///
/// Returns `None` when the piece is too wide for the grid.
pub fn random_spawn_position(
    piece: &Piece,
    eff_size: usize,
    rng: &mut impl RandomSource,
) -> Option<Position> {
    let upper = eff_size.checked_sub(piece.width())?;
    if upper <= 1 {
        return None;
    }
    let col = rng.pick_range(1, upper);
    Some(Position::new(SPAWN_ROW, col as i32))
}

/// Shift a position. No bounds checking.
pub fn translate(position: Position, d_row: i32, d_col: i32) -> Position {
    Position::new(position.row + d_row, position.col + d_col)
}

/// Rotate 90° clockwise: reverse the rows, then transpose
pub fn rotate_cw(piece: &Piece) -> Piece {
    let (h, w) = (piece.height, piece.width);
    let mut mask = [[false; MAX_EXTENT]; MAX_EXTENT];
    for (r, row) in mask.iter_mut().enumerate().take(w) {
        for (c, cell) in row.iter_mut().enumerate().take(h) {
            *cell = piece.mask[h - 1 - c][r];
        }
    }
    Piece {
        kind: piece.kind,
        height: w,
        width: h,
        mask,
    }
}

/// Rotate 90° counter-clockwise: transpose, then reverse the rows
pub fn rotate_ccw(piece: &Piece) -> Piece {
    let (h, w) = (piece.height, piece.width);
    let mut mask = [[false; MAX_EXTENT]; MAX_EXTENT];
    for (r, row) in mask.iter_mut().enumerate().take(w) {
        for (c, cell) in row.iter_mut().enumerate().take(h) {
            *cell = piece.mask[c][w - 1 - r];
        }
    }
    Piece {
        kind: piece.kind,
        height: w,
        width: h,
        mask,
    }
}

/// True if any occupied piece cell lands on a filled (or off-grid) cell
pub fn overlaps(grid: &Grid, piece: &Piece, position: Position) -> bool {
    piece.occupied().iter().any(|&(dr, dc)| {
        grid.is_blocked(position.row + dr as i32, position.col + dc as i32)
    })
}

pub fn can_move_left(grid: &Grid, piece: &Piece, position: Position) -> bool {
    !overlaps(grid, piece, translate(position, 0, -1))
}

pub fn can_move_right(grid: &Grid, piece: &Piece, position: Position) -> bool {
    !overlaps(grid, piece, translate(position, 0, 1))
}

pub fn can_move_down(grid: &Grid, piece: &Piece, position: Position) -> bool {
    !overlaps(grid, piece, translate(position, 1, 0))
}

/// Rotation is checked in place: same top-left corner, new matrix
pub fn can_rotate_cw(grid: &Grid, piece: &Piece, position: Position) -> bool {
    !overlaps(grid, &rotate_cw(piece), position)
}

pub fn can_rotate_ccw(grid: &Grid, piece: &Piece, position: Position) -> bool {
    !overlaps(grid, &rotate_ccw(piece), position)
}
