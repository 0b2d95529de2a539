//! Shapes module - the fixed catalog of placeable blocks
//!
//! Every catalog entry is one fixed orientation stored in its minimal bounding
//! box, from a single cell up to the full 3x3 block (the straight fours are
//! 1x4 and 4x1). Shapes are never rotated; mirrored and rotated variants
//! are separate entries.
//!
//! Rows are encoded as bitmasks read left to right: in a shape of width `w`,
//! column `c` is bit `w - 1 - c`, so `0b110` in a width-3 shape covers the two
//! leftmost columns.

use crate::types::BlockColor;

/// Largest bounding-box side of any catalog shape
pub const MAX_SHAPE_SIDE: u8 = 4;

/// Number of catalog shapes
pub const SHAPE_COUNT: usize = 23;

/// Shapes with this many cells or more belong to the large pool
pub const LARGE_SHAPE_MIN_CELLS: u32 = 4;

/// Immutable occupancy matrix of one block shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: u8,
    width: u8,
    rows: [u8; MAX_SHAPE_SIDE as usize],
}

impl Shape {
    const fn new(width: u8, rows: &[u8]) -> Self {
        let mut out = [0u8; MAX_SHAPE_SIDE as usize];
        let mut i = 0;
        while i < rows.len() {
            out[i] = rows[i];
            i += 1;
        }
        Self {
            height: rows.len() as u8,
            width,
            rows: out,
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether the sub-cell at (row, col) of the bounding box is occupied
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        self.rows[row as usize] & (1 << (self.width - 1 - col)) != 0
    }

    /// Occupied sub-cells as (row, col) offsets from the top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height).flat_map(move |r| {
            (0..self.width)
                .filter(move |&c| self.is_filled(r, c))
                .map(move |c| (r, c))
        })
    }

    pub fn cell_count(&self) -> u32 {
        self.rows[..self.height as usize]
            .iter()
            .map(|row| row.count_ones())
            .sum()
    }

    /// Large shapes feed the difficulty-scaled pool
    pub fn is_large(&self) -> bool {
        self.cell_count() >= LARGE_SHAPE_MIN_CELLS
    }
}

/// The shape catalog, small shapes first.
pub const SHAPES: [Shape; SHAPE_COUNT] = [
    // Single cell and straight pieces.
    Shape::new(1, &[0b1]),
    Shape::new(2, &[0b11]),
    Shape::new(1, &[0b1, 0b1]),
    Shape::new(3, &[0b111]),
    Shape::new(1, &[0b1, 0b1, 0b1]),
    // Three-cell corners.
    Shape::new(2, &[0b11, 0b10]),
    Shape::new(2, &[0b11, 0b01]),
    Shape::new(2, &[0b10, 0b11]),
    Shape::new(2, &[0b01, 0b11]),
    // Diagonal pair.
    Shape::new(2, &[0b10, 0b01]),
    // Square and straight fours.
    Shape::new(2, &[0b11, 0b11]),
    Shape::new(4, &[0b1111]),
    Shape::new(1, &[0b1, 0b1, 0b1, 0b1]),
    // L/J orientations.
    Shape::new(2, &[0b10, 0b10, 0b11]),
    Shape::new(2, &[0b01, 0b01, 0b11]),
    Shape::new(3, &[0b111, 0b100]),
    Shape::new(3, &[0b001, 0b111]),
    // T orientations.
    Shape::new(3, &[0b010, 0b111]),
    Shape::new(3, &[0b111, 0b010]),
    Shape::new(2, &[0b01, 0b11, 0b01]),
    Shape::new(2, &[0b10, 0b11, 0b10]),
    // Rectangle and the full 3x3.
    Shape::new(3, &[0b111, 0b111]),
    Shape::new(3, &[0b111, 0b111, 0b111]),
];

/// Catalog indices of every shape with 4+ cells
pub const LARGE_SHAPE_INDICES: [u8; 13] = [10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22];

/// Index into [`SHAPES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub(crate) u8);

impl ShapeId {
    /// Returns `None` for indices outside the catalog
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < SHAPE_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn shape(self) -> &'static Shape {
        &SHAPES[self.0 as usize]
    }
}

/// A placeable block: a catalog shape paired with a display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub shape: ShapeId,
    pub color: BlockColor,
}

impl Block {
    pub fn new(shape: ShapeId, color: BlockColor) -> Self {
        Self { shape, color }
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape.shape()
    }
}
