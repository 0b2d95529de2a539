//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed square:
//!
//! - **Rows**: 8 (indexed 0-7, top to bottom)
//! - **Columns**: 8 (indexed 0-7, left to right)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLACEMENT_POINTS` | 5 | Flat award for every accepted placement |
//! | `LINE_POINTS` | 10 | Per row/column cleared in one move |
//! | `STREAK_BONUS` | 20 | Per consecutive clearing move before this one |
//!
//! The combo bonus is `2^count` where `count` is the number of rows plus
//! columns cleared by a single move.
//!
//! # Difficulty
//!
//! Every `LEVEL_SCORE_STEP` (250) points raise the level by one, and each level
//! adds `LARGE_CHANCE_PER_LEVEL` (8%) to the chance that a freshly generated
//! block is drawn from the large-shape pool.
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{BlockColor, GRID_CELLS, GRID_SIZE};
//!
//! // Snapshot codes are stable and nonzero
//! let teal = BlockColor::Teal;
//! assert_eq!(BlockColor::from_code(teal.code()), Some(teal));
//! assert_eq!(BlockColor::from_code(0), None);
//!
//! assert_eq!(GRID_SIZE, 8);
//! assert_eq!(GRID_CELLS, 64);
//! ```

/// Grid side length in cells (8 rows by 8 columns)
pub const GRID_SIZE: u8 = 8;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of candidate blocks offered at a time
pub const BLOCKS_PER_SET: usize = 3;

/// Number of colors in the block palette
pub const PALETTE_SIZE: usize = 5;

/// Points awarded for every accepted placement, cleared lines or not
pub const PLACEMENT_POINTS: u32 = 5;

/// Points per row or column cleared in a single move
pub const LINE_POINTS: u32 = 10;

/// Bonus per previous consecutive clearing move
pub const STREAK_BONUS: u32 = 20;

/// Score needed per difficulty level
pub const LEVEL_SCORE_STEP: u32 = 250;

/// Added chance (per level) of drawing from the large-shape pool
pub const LARGE_CHANCE_PER_LEVEL: f64 = 0.08;

/// The five block colors.
///
/// Color has no gameplay effect; it only tags grid cells for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Teal,
    Blue,
    Orange,
    Purple,
}

impl BlockColor {
    /// Every palette entry in generation order
    pub const ALL: [BlockColor; PALETTE_SIZE] = [
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
    ];

    /// Stable snapshot code (1..=5). Zero is reserved for empty cells.
    pub fn code(&self) -> u8 {
        match self {
            BlockColor::Red => 1,
            BlockColor::Teal => 2,
            BlockColor::Blue => 3,
            BlockColor::Orange => 4,
            BlockColor::Purple => 5,
        }
    }

    /// Inverse of [`BlockColor::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BlockColor::Red),
            2 => Some(BlockColor::Teal),
            3 => Some(BlockColor::Blue),
            4 => Some(BlockColor::Orange),
            5 => Some(BlockColor::Purple),
            _ => None,
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Cell covered by a placed block of that color
pub type Cell = Option<BlockColor>;

/// Player actions produced by the input layer
///
/// These are semantic and carry no game rules; the input cursor turns them
/// into placement requests for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Move the placement cursor one row up
    CursorUp,
    /// Move the placement cursor one row down
    CursorDown,
    /// Move the placement cursor one column left
    CursorLeft,
    /// Move the placement cursor one column right
    CursorRight,
    /// Select a tray slot directly (0-based)
    SelectBlock(u8),
    /// Cycle selection to the next tray slot
    NextBlock,
    /// Cycle selection to the previous tray slot
    PrevBlock,
    /// Place the selected block at the cursor
    Place,
    /// Start a new game
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_constants() {
        assert_eq!(PLACEMENT_POINTS, 5);
        assert_eq!(LINE_POINTS, 10);
        assert_eq!(STREAK_BONUS, 20);
        assert_eq!(LEVEL_SCORE_STEP, 250);
        assert_eq!(GRID_CELLS, 64);
    }

    #[test]
    fn test_color_codes_roundtrip_and_skip_zero() {
        for color in BlockColor::ALL {
            assert_ne!(color.code(), 0);
            assert_eq!(BlockColor::from_code(color.code()), Some(color));
        }
        assert_eq!(BlockColor::from_code(0), None);
        assert_eq!(BlockColor::from_code(PALETTE_SIZE as u8 + 1), None);
    }

    #[test]
    fn test_palette_order_matches_codes() {
        for (i, color) in BlockColor::ALL.iter().enumerate() {
            assert_eq!(color.code() as usize, i + 1);
        }
    }
}
