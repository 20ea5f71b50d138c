//! Board module - manages the game grid
//!
//! The board is a square grid of `Cell`s with side `size + 2`. The left column,
//! right column and bottom row are walls that are filled once at creation and
//! never cleared. Row 0 is open so pieces can enter from the top.
//! Uses a flat row-major `Vec` for storage.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left wall.

use std::fmt;

use thiserror::Error;

use crate::pieces::{Piece, Position};
use crate::types::{effective_size, Cell};

/// Errors raised when building a board or grid from prepared data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid is {rows} rows by {cols} columns, expected a square")]
    NotSquare { rows: usize, cols: usize },
    #[error("grid side {side} is too small to hold walls and a floor")]
    TooSmall { side: usize },
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadChar { row: usize, col: usize, ch: char },
    #[error("boundary cell at row {row}, column {col} is empty")]
    OpenBoundary { row: usize, col: usize },
}

/// A square matrix of cells.
///
/// This is the representation the piece rules are checked against. The board
/// owns one permanently; render snapshots are free-standing copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    /// Flat array of cells, row-major order (row * side + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// All-empty grid, no walls.
    pub fn empty(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Parse a grid from text rows, `*` for filled and ` ` for empty.
    ///
    /// Short rows are padded with empty cells.
    pub fn parse(rows: &[&str]) -> Result<Self, BoardError> {
        let side = rows.len();
        let mut grid = Self::empty(side);
        for (row, line) in rows.iter().enumerate() {
            let cols = line.chars().count();
            if cols > side {
                return Err(BoardError::NotSquare { rows: side, cols });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '*' => Cell::Filled,
                    ' ' => Cell::Empty,
                    _ => return Err(BoardError::BadChar { row, col, ch }),
                };
                grid.cells[row * side + col] = cell;
            }
        }
        Ok(grid)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(row * self.side + col)
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if the cell is filled or lies outside the grid.
    ///
    /// Pieces may never occupy such a cell.
    pub fn is_blocked(&self, row: i32, col: i32) -> bool {
        !matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Cells of one row. Returns None if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.side {
            return None;
        }
        let start = row * self.side;
        Some(&self.cells[start..start + self.side])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side.max(1)).take(self.side)
    }

    /// Check if a row is completely filled (walls included)
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_filled()))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Write a walled empty row at `row`.
    fn reset_row(&mut self, row: usize) {
        let side = self.side;
        let start = row * side;
        for (col, cell) in self.cells[start..start + side].iter_mut().enumerate() {
            *cell = if col == 0 || col == side - 1 {
                Cell::Filled
            } else {
                Cell::Empty
            };
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The game board - a walled square grid
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Interior size (without walls)
    size: usize,
    grid: Grid,
}

impl Board {
    /// Create a new board with `size` interior columns and rows
    pub fn new(size: usize) -> Self {
        let side = effective_size(size);
        let mut grid = Grid::empty(side);
        for row in 0..side {
            grid.reset_row(row);
        }
        grid.cells[(side - 1) * side..].fill(Cell::Filled);
        Self { size, grid }
    }

    /// Adopt a prepared grid.
    ///
    /// Fails unless the left column, right column and bottom row are all filled.
    pub fn from_grid(grid: Grid) -> Result<Self, BoardError> {
        let side = grid.side();
        if side < 3 {
            return Err(BoardError::TooSmall { side });
        }
        for (row, cells) in grid.rows().enumerate() {
            for col in [0, side - 1] {
                if !cells[col].is_filled() {
                    return Err(BoardError::OpenBoundary { row, col });
                }
            }
        }
        let floor = grid.row(side - 1).unwrap_or_default();
        if let Some(col) = floor.iter().position(|c| !c.is_filled()) {
            return Err(BoardError::OpenBoundary { row: side - 1, col });
        }
        Ok(Self {
            size: side - 2,
            grid,
        })
    }

    /// Interior size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side of the stored grid, walls included
    pub fn eff_size(&self) -> usize {
        self.grid.side()
    }

    /// Read-only view of the permanent grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.grid.get(row, col)
    }

    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        matches!(self.grid.get(row, col), Some(Cell::Filled))
    }

    /// Filled cells strictly inside the walls and above the floor
    pub fn interior_filled_count(&self) -> usize {
        let side = self.eff_size();
        self.grid
            .rows()
            .take(side - 1)
            .map(|cells| cells[1..side - 1].iter().filter(|c| c.is_filled()).count())
            .sum()
    }

    /// Overlay a piece on a copy of the grid for display.
    ///
    /// The board itself is left untouched. Piece cells that fall outside the
    /// grid are dropped.
    pub fn render_snapshot(&self, piece: &Piece, position: Position) -> Grid {
        let mut view = self.grid.clone();
        overlay(&mut view, piece, position);
        view
    }

    /// Lock a piece into the grid, then clear complete rows.
    ///
    /// Cells are OR-ed in, so nothing already filled is ever emptied. Legality
    /// is the caller's concern. Returns the number of rows cleared; the floor
    /// never counts.
    pub fn merge_and_clear(&mut self, piece: &Piece, position: Position) -> usize {
        overlay(&mut self.grid, piece, position);
        self.clear_full_rows()
    }

    /// Clear all full rows above the floor, shifting the rest down.
    /// Uses a two-pointer scan from the bottom up.
    fn clear_full_rows(&mut self) -> usize {
        let side = self.grid.side();
        let floor = side - 1;
        let mut cleared = 0;
        let mut write_row = floor;

        for read_row in (0..floor).rev() {
            if self.grid.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * side;
                    self.grid
                        .cells
                        .copy_within(src..src + side, write_row * side);
                }
            }
        }

        // Fresh rows at the top for every row removed
        for row in 0..write_row {
            self.grid.reset_row(row);
        }

        cleared
    }
}

fn overlay(grid: &mut Grid, piece: &Piece, position: Position) {
    for (dr, dc) in piece.occupied() {
        let row = position.row + dr as i32;
        let col = position.col + dc as i32;
        if let Some(cell) = grid.get(row, col) {
            grid.set(row, col, cell.or(Cell::Filled));
        }
    }
}
