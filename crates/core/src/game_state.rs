//! Game state module - the turn controller
//!
//! This module ties together the grid, shape catalog, block generator and
//! scoring. One accepted placement runs as a single step: stamp the block,
//! award placement points, clear full lines, update combo/streak, refill the
//! tray to three blocks and finally check whether any block still fits.
//!
//! Invalid requests are normal control flow. They come back as a
//! [`MoveOutcome`] with `accepted == false` and leave the state untouched.

use arrayvec::ArrayVec;
use log::{debug, info};
use thiserror::Error;

use crate::grid::{ClearedLines, Grid};
use crate::rng::{difficulty_level, BlockGenerator, RandomSource, SimpleRng};
use crate::scoring::{calculate_clear_score, placement_points};
use crate::shapes::Block;
use crate::snapshot::GameSnapshot;
use crate::types::{BLOCKS_PER_SET, GRID_SIZE};

/// Why a placement request was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no block in slot {index}")]
    InvalidIndex { index: usize },
    #[error("block does not fit at row {row}, col {col}")]
    InvalidPlacement { row: u8, col: u8 },
    #[error("the game is over")]
    MoveAfterGameOver,
}

/// Result of one placement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    /// Set exactly when `accepted` is false
    pub rejection: Option<PlacementError>,
    pub cleared_rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub cleared_cols: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub score_delta: u32,
    pub total_score: u32,
    pub game_over: bool,
}

impl MoveOutcome {
    fn rejected(error: PlacementError, total_score: u32, game_over: bool) -> Self {
        Self {
            accepted: false,
            rejection: Some(error),
            cleared_rows: ArrayVec::new(),
            cleared_cols: ArrayVec::new(),
            score_delta: 0,
            total_score,
            game_over,
        }
    }

    /// Rows plus columns cleared by this move
    pub fn lines_cleared(&self) -> u32 {
        (self.cleared_rows.len() + self.cleared_cols.len()) as u32
    }
}

/// Complete session state, exclusively owned by the caller
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    blocks: ArrayVec<Block, BLOCKS_PER_SET>,
    generator: BlockGenerator<R>,
    score: u32,
    /// Lines cleared by the most recent move
    combo: u32,
    /// Consecutive clearing moves, including the most recent one
    streak: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Accepted placements this episode.
    moves: u32,
    /// Total rows and columns cleared this episode.
    lines_cleared: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing blocks from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut generator = BlockGenerator::new(rng);
        let blocks = ArrayVec::from(generator.three_blocks(0));
        Self::assemble(Grid::new(), blocks, generator)
    }

    /// Start from an arbitrary grid and tray. Later refills draw from `rng`.
    ///
    /// `grid` must not hold full lines: play never leaves one standing
    /// between moves, so the next placement would clear it and score it as
    /// its own.
    pub fn from_parts(grid: Grid, blocks: [Block; BLOCKS_PER_SET], rng: R) -> Self {
        debug_assert!(
            grid.full_lines().is_empty(),
            "starting grid has full lines"
        );
        Self::assemble(grid, ArrayVec::from(blocks), BlockGenerator::new(rng))
    }

    fn assemble(
        grid: Grid,
        blocks: ArrayVec<Block, BLOCKS_PER_SET>,
        generator: BlockGenerator<R>,
    ) -> Self {
        let game_over = !grid.can_place_any(&blocks);
        Self {
            grid,
            blocks,
            generator,
            score: 0,
            combo: 0,
            streak: 0,
            game_over,
            episode_id: 0,
            moves: 0,
            lines_cleared: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<Block> {
        self.blocks.get(index).copied()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn level(&self) -> u32 {
        difficulty_level(self.score)
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn rng(&self) -> &R {
        self.generator.rng()
    }

    /// Reset to an empty grid, zero score/combo/streak and three fresh
    /// blocks. Works from any state, including game over.
    pub fn start_new_game(&mut self) -> GameSnapshot {
        self.grid.clear();
        self.blocks = ArrayVec::from(self.generator.three_blocks(0));
        self.score = 0;
        self.combo = 0;
        self.streak = 0;
        self.moves = 0;
        self.lines_cleared = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.game_over = !self.can_place_any();
        info!("new game started (episode {})", self.episode_id);
        self.snapshot()
    }

    /// Whether at least one current block fits somewhere
    pub fn can_place_any(&self) -> bool {
        self.grid.can_place_any(&self.blocks)
    }

    /// Read-only placement check for drag previews.
    ///
    /// Same answer as the grid-level fit test for the block in `index`;
    /// never mutates.
    pub fn query_valid_placement(&self, index: usize, row: u8, col: u8) -> bool {
        self.blocks
            .get(index)
            .is_some_and(|block| self.grid.can_place(block.shape(), row, col))
    }

    fn validate(&self, index: usize, row: u8, col: u8) -> Result<Block, PlacementError> {
        if self.game_over {
            return Err(PlacementError::MoveAfterGameOver);
        }
        let block = self
            .block(index)
            .ok_or(PlacementError::InvalidIndex { index })?;
        if !self.grid.can_place(block.shape(), row, col) {
            return Err(PlacementError::InvalidPlacement { row, col });
        }
        Ok(block)
    }

    /// Place the block in slot `index` with its top-left corner at
    /// (row, col).
    pub fn attempt_placement(&mut self, index: usize, row: u8, col: u8) -> MoveOutcome {
        let block = match self.validate(index, row, col) {
            Ok(block) => block,
            Err(err) => {
                debug!("placement rejected: {err}");
                return MoveOutcome::rejected(err, self.score, self.game_over);
            }
        };

        self.grid.stamp(block.shape(), row, col, block.color);
        let mut score_delta = placement_points();

        let cleared = self.grid.clear_lines();
        score_delta = score_delta.saturating_add(self.apply_clear(&cleared));
        self.score = self.score.saturating_add(score_delta);

        self.blocks.remove(index);
        while !self.blocks.is_full() {
            self.blocks.push(self.generator.random_block(self.score));
        }

        self.moves = self.moves.wrapping_add(1);
        if !self.can_place_any() {
            self.game_over = true;
            info!(
                "game over after {} moves with score {}",
                self.moves, self.score
            );
        }

        debug!(
            "placed slot {} at ({}, {}): +{} (rows {:?}, cols {:?}, streak {})",
            index,
            row,
            col,
            score_delta,
            cleared.rows.as_slice(),
            cleared.cols.as_slice(),
            self.streak
        );

        MoveOutcome {
            accepted: true,
            rejection: None,
            cleared_rows: cleared.rows,
            cleared_cols: cleared.cols,
            score_delta,
            total_score: self.score,
            game_over: self.game_over,
        }
    }

    /// Update combo/streak for a move and return its clear bonus.
    ///
    /// The streak bonus uses the streak from before this move.
    fn apply_clear(&mut self, cleared: &ClearedLines) -> u32 {
        let count = cleared.count();
        if count == 0 {
            self.combo = 0;
            self.streak = 0;
            return 0;
        }
        let result = calculate_clear_score(count, self.streak);
        self.combo = count;
        self.streak = self.streak.saturating_add(1);
        self.lines_cleared = self.lines_cleared.saturating_add(count);
        result.total
    }

    /// Overwrite `out` with the current state without allocating a new view
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);
        out.blocks = [None; BLOCKS_PER_SET];
        for (slot, block) in out.blocks.iter_mut().zip(self.blocks.iter()) {
            *slot = Some(*block);
        }
        out.score = self.score;
        out.combo = self.combo;
        out.streak = self.streak;
        out.level = self.level();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeId;
    use crate::types::BlockColor;

    fn block(index: u8) -> Block {
        Block::new(ShapeId::new(index).unwrap(), BlockColor::Orange)
    }

    #[test]
    fn test_new_game_has_three_blocks_and_is_playable() {
        let state = GameState::new(12345);
        assert_eq!(state.blocks().len(), BLOCKS_PER_SET);
        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
        assert!(state.grid().is_empty());
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut state = GameState::from_parts(
            Grid::new(),
            [block(22), block(0), block(0)],
            SimpleRng::new(3),
        );
        let before = state.snapshot();

        let out = state.attempt_placement(3, 0, 0);
        assert_eq!(out.rejection, Some(PlacementError::InvalidIndex { index: 3 }));

        let out = state.attempt_placement(0, 6, 0);
        assert_eq!(
            out.rejection,
            Some(PlacementError::InvalidPlacement { row: 6, col: 0 })
        );
        assert!(!out.accepted);
        assert_eq!(out.score_delta, 0);

        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_streak_bonus_uses_pre_increment_value() {
        // Row 0 and row 1 each miss only their leftmost cell.
        let rows = [
            ".#######", ".#######", "........", "........", "........", "........", "........",
            "........",
        ];
        let grid = Grid::from_rows(&rows, BlockColor::Red).unwrap();
        let mut state = GameState::from_parts(grid, [block(0), block(0), block(0)], SimpleRng::new(8));

        let first = state.attempt_placement(0, 0, 0);
        assert!(first.accepted);
        assert_eq!(first.score_delta, 5 + 10 + 2);
        assert_eq!(state.streak(), 1);
        assert_eq!(state.combo(), 1);

        let second = state.attempt_placement(0, 1, 0);
        assert_eq!(second.score_delta, 5 + 10 + 2 + 20);
        assert_eq!(state.streak(), 2);
        assert_eq!(state.score(), 17 + 37);
        assert_eq!(state.lines_cleared(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "starting grid has full lines")]
    fn test_from_parts_rejects_full_lines() {
        let grid = Grid::from_rows(&["###.####"; 8], BlockColor::Red).unwrap();
        GameState::from_parts(grid, [block(0), block(0), block(0)], SimpleRng::new(1));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PlacementError::MoveAfterGameOver.to_string(), "the game is over");
        assert_eq!(
            PlacementError::InvalidIndex { index: 9 }.to_string(),
            "no block in slot 9"
        );
        assert_eq!(
            PlacementError::InvalidPlacement { row: 6, col: 1 }.to_string(),
            "block does not fit at row 6, col 1"
        );
    }

    #[test]
    fn test_snapshot_into_overwrites_stale_view() {
        let mut stale = GameSnapshot::default();
        stale.grid[3][3] = BlockColor::Red.code();
        stale.score = 999;
        stale.game_over = true;

        let state = GameState::from_parts(Grid::new(), [block(0), block(4), block(9)], SimpleRng::new(2));
        state.snapshot_into(&mut stale);

        assert_eq!(stale, state.snapshot());
        assert!(!stale.is_occupied(3, 3));
        assert_eq!(stale.block(1), Some(block(4)));
    }
}
