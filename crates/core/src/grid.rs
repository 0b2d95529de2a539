//! Grid module - manages the 8x8 playfield
//!
//! Each cell is empty or holds the color of the block that covered it.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) with row 0 at the top and col 0 at the left.
//!
//! Unlike a falling-block board, cleared lines are simply emptied in place;
//! nothing above them shifts.

use arrayvec::ArrayVec;

use crate::shapes::{Block, Shape};
use crate::types::{BlockColor, Cell, GRID_CELLS, GRID_SIZE};

const SIZE: usize = GRID_SIZE as usize;

/// Indices of the rows and columns removed by one clear, each ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    pub rows: ArrayVec<u8, SIZE>,
    pub cols: ArrayVec<u8, SIZE>,
}

impl ClearedLines {
    /// Total rows plus columns
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The playfield - 8 rows x 8 columns in row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Build a grid from text rows: `.` is empty, any other character is a
    /// filled cell. Filled cells take `color`.
    ///
    /// Returns `None` unless there are exactly 8 rows of exactly 8 characters.
    /// Full lines are kept as given; nothing is cleared.
    pub fn from_rows(rows: &[&str], color: BlockColor) -> Option<Self> {
        if rows.len() != SIZE {
            return None;
        }
        let mut grid = Self::new();
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != SIZE {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    grid.cells[r * SIZE + c] = Some(color);
                }
            }
        }
        Some(grid)
    }

    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row as usize * SIZE + col as usize)
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and unoccupied
    pub fn is_empty_at(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    pub fn is_row_full(&self, row: u8) -> bool {
        if row >= GRID_SIZE {
            return false;
        }
        let start = row as usize * SIZE;
        self.cells[start..start + SIZE].iter().all(Option::is_some)
    }

    pub fn is_col_full(&self, col: u8) -> bool {
        if col >= GRID_SIZE {
            return false;
        }
        (0..SIZE).all(|r| self.cells[r * SIZE + col as usize].is_some())
    }

    /// Whether `shape` fits with its top-left corner at (row, col).
    ///
    /// The bounding box must lie inside the grid and every occupied sub-cell
    /// must land on an empty cell.
    pub fn can_place(&self, shape: &Shape, row: u8, col: u8) -> bool {
        if row as u16 + shape.height() as u16 > GRID_SIZE as u16
            || col as u16 + shape.width() as u16 > GRID_SIZE as u16
        {
            return false;
        }
        shape
            .cells()
            .all(|(dr, dc)| self.is_empty_at(row + dr, col + dc))
    }

    /// Whether `shape` fits at any anchor. Exhaustive over all anchors that
    /// keep the bounding box on the grid.
    pub fn fits_anywhere(&self, shape: &Shape) -> bool {
        let max_row = GRID_SIZE - shape.height();
        let max_col = GRID_SIZE - shape.width();
        (0..=max_row).any(|r| (0..=max_col).any(|c| self.can_place(shape, r, c)))
    }

    /// Whether any block in the set has at least one valid anchor
    pub fn can_place_any<'a>(&self, blocks: impl IntoIterator<Item = &'a Block>) -> bool {
        blocks.into_iter().any(|b| self.fits_anywhere(b.shape()))
    }

    /// Write the shape's occupied cells with `color`.
    ///
    /// Returns false (and writes nothing) if the placement is not valid.
    pub fn stamp(&mut self, shape: &Shape, row: u8, col: u8, color: BlockColor) -> bool {
        if !self.can_place(shape, row, col) {
            return false;
        }
        for (dr, dc) in shape.cells() {
            self.set(row + dr, col + dc, Some(color));
        }
        true
    }

    /// Detect full rows and columns without changing anything.
    ///
    /// Every row and every column is checked, rows first.
    pub fn full_lines(&self) -> ClearedLines {
        let mut lines = ClearedLines::default();
        for r in 0..GRID_SIZE {
            if self.is_row_full(r) {
                lines.rows.push(r);
            }
        }
        for c in 0..GRID_SIZE {
            if self.is_col_full(c) {
                lines.cols.push(c);
            }
        }
        lines
    }

    /// Clear every full row and column and return which ones were cleared.
    ///
    /// Detection happens before any cell is emptied, so a row and a column
    /// that cross are both cleared and their shared cell is emptied once.
    pub fn clear_lines(&mut self) -> ClearedLines {
        let lines = self.full_lines();
        for &r in &lines.rows {
            let start = r as usize * SIZE;
            self.cells[start..start + SIZE].fill(None);
        }
        for &c in &lines.cols {
            for r in 0..SIZE {
                self.cells[r * SIZE + c as usize] = None;
            }
        }
        lines
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write color codes (0 = empty) for snapshots
    pub fn write_u8_grid(&self, out: &mut [[u8; SIZE]; SIZE]) {
        for (r, row) in out.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.cells[r * SIZE + c].map_or(0, |color| color.code());
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
