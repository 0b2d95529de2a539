use crate::shapes::Block;
use crate::types::{BLOCKS_PER_SET, GRID_SIZE};

/// Read-only copy of a session for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color codes per cell, 0 = empty (see `BlockColor::code`)
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    /// Tray slots in presentation order
    pub blocks: [Option<Block>; BLOCKS_PER_SET],
    pub score: u32,
    pub combo: u32,
    pub streak: u32,
    pub level: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub moves: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn block(&self, index: usize) -> Option<Block> {
        self.blocks.get(index).copied().flatten()
    }

    pub fn is_occupied(&self, row: u8, col: u8) -> bool {
        self.grid
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .is_some_and(|&v| v != 0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize],
            blocks: [None; BLOCKS_PER_SET],
            score: 0,
            combo: 0,
            streak: 0,
            level: 0,
            game_over: false,
            episode_id: 0,
            moves: 0,
            lines_cleared: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeId;
    use crate::types::BlockColor;

    #[test]
    fn test_is_occupied_and_bounds() {
        let mut snap = GameSnapshot::default();
        snap.grid[2][5] = BlockColor::Blue.code();
        assert!(snap.is_occupied(2, 5));
        assert!(!snap.is_occupied(5, 2));
        assert!(!snap.is_occupied(8, 0));
    }

    #[test]
    fn test_block_slots() {
        let mut snap = GameSnapshot::default();
        let block = Block::new(ShapeId::new(4).unwrap(), BlockColor::Red);
        snap.blocks[1] = Some(block);
        assert_eq!(snap.block(0), None);
        assert_eq!(snap.block(1), Some(block));
        assert_eq!(snap.block(3), None);
        assert!(snap.playable());
    }
}
