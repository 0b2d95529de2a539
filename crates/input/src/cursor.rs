//! Placement cursor: which tray slot is selected and where its top-left
//! corner would land.
//!
//! The cursor only knows the bounding box of each tray block, never the grid
//! contents, so it keeps the box on the grid but leaves fit checks to the
//! engine.

use crate::types::{PlayerAction, BLOCKS_PER_SET, GRID_SIZE};

/// Bounding box (height, width) of the block in a tray slot, `None` if empty
pub type TraySlot = Option<(u8, u8)>;

/// What the caller should forward to the engine after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    /// Cursor state changed (or nothing happened); nothing to forward
    None,
    /// Attempt to place tray slot `index` at (row, col)
    Place { index: usize, row: u8, col: u8 },
    /// Start a new game
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementCursor {
    selected: usize,
    row: u8,
    col: u8,
}

impl PlacementCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, action: PlayerAction, tray: &[TraySlot; BLOCKS_PER_SET]) -> CursorCommand {
        match action {
            PlayerAction::CursorUp => self.row = self.row.saturating_sub(1),
            PlayerAction::CursorDown => self.row = self.row.saturating_add(1),
            PlayerAction::CursorLeft => self.col = self.col.saturating_sub(1),
            PlayerAction::CursorRight => self.col = self.col.saturating_add(1),
            PlayerAction::SelectBlock(i) => {
                let i = i as usize;
                if tray.get(i).is_some_and(Option::is_some) {
                    self.selected = i;
                }
            }
            PlayerAction::NextBlock => self.cycle(tray, 1),
            PlayerAction::PrevBlock => self.cycle(tray, BLOCKS_PER_SET - 1),
            PlayerAction::Place => {
                self.sync(tray);
                return CursorCommand::Place {
                    index: self.selected,
                    row: self.row,
                    col: self.col,
                };
            }
            PlayerAction::Restart => {
                self.reset();
                return CursorCommand::Restart;
            }
        }
        self.sync(tray);
        CursorCommand::None
    }

    /// Re-clamp after the tray changed under the cursor (e.g. after a move).
    ///
    /// An empty selected slot moves the selection to the next filled one.
    pub fn sync(&mut self, tray: &[TraySlot; BLOCKS_PER_SET]) {
        if tray[self.selected].is_none() {
            self.cycle(tray, 1);
        }
        let (height, width) = tray[self.selected].unwrap_or((1, 1));
        self.row = self.row.min(GRID_SIZE.saturating_sub(height));
        self.col = self.col.min(GRID_SIZE.saturating_sub(width));
    }

    fn cycle(&mut self, tray: &[TraySlot; BLOCKS_PER_SET], step: usize) {
        for n in 1..=BLOCKS_PER_SET {
            let candidate = (self.selected + n * step) % BLOCKS_PER_SET;
            if tray[candidate].is_some() {
                self.selected = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: [TraySlot; BLOCKS_PER_SET] = [Some((1, 1)), Some((3, 3)), Some((2, 1))];

    #[test]
    fn test_cursor_clamps_to_selected_box() {
        let mut cursor = PlacementCursor::new();
        for _ in 0..20 {
            cursor.apply(PlayerAction::CursorDown, &FULL);
            cursor.apply(PlayerAction::CursorRight, &FULL);
        }
        assert_eq!((cursor.row(), cursor.col()), (7, 7));

        cursor.apply(PlayerAction::SelectBlock(1), &FULL);
        assert_eq!(cursor.selected(), 1);
        assert_eq!((cursor.row(), cursor.col()), (5, 5));
    }

    #[test]
    fn test_cursor_does_not_underflow() {
        let mut cursor = PlacementCursor::new();
        cursor.apply(PlayerAction::CursorUp, &FULL);
        cursor.apply(PlayerAction::CursorLeft, &FULL);
        assert_eq!((cursor.row(), cursor.col()), (0, 0));
    }

    #[test]
    fn test_cycle_wraps_and_skips_empty() {
        let tray = [Some((1, 1)), None, Some((1, 1))];
        let mut cursor = PlacementCursor::new();
        cursor.apply(PlayerAction::NextBlock, &tray);
        assert_eq!(cursor.selected(), 2);
        cursor.apply(PlayerAction::NextBlock, &tray);
        assert_eq!(cursor.selected(), 0);
        cursor.apply(PlayerAction::PrevBlock, &tray);
        assert_eq!(cursor.selected(), 2);
        cursor.apply(PlayerAction::SelectBlock(1), &tray);
        assert_eq!(cursor.selected(), 2);
    }

    #[test]
    fn test_place_and_restart_commands() {
        let mut cursor = PlacementCursor::new();
        cursor.apply(PlayerAction::SelectBlock(2), &FULL);
        cursor.apply(PlayerAction::CursorRight, &FULL);
        assert_eq!(
            cursor.apply(PlayerAction::Place, &FULL),
            CursorCommand::Place {
                index: 2,
                row: 0,
                col: 1
            }
        );
        assert_eq!(
            cursor.apply(PlayerAction::Restart, &FULL),
            CursorCommand::Restart
        );
        assert_eq!(cursor, PlacementCursor::new());
    }
}
