//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and session state.
//! It has **no dependencies** on rendering, input devices, or storage, making it:
//!
//! - **Deterministic**: Same seed (or scripted [`RandomSource`]) produces identical games
//! - **Testable**: Independent sessions, no globals
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free moves**: Trays and cleared-line lists are fixed-capacity
//!
//! # Module Structure
//!
//! - [`grid`]: 8x8 grid with placement checks and row/column clearing
//! - [`shapes`]: The 23-entry shape catalog and block instances
//! - [`rng`]: Seedable randomness and difficulty-scaled block generation
//! - [`scoring`]: Placement points, combo and streak bonuses
//! - [`game_state`]: The turn controller (place, score, clear, refill, game over)
//! - [`snapshot`]: Copyable read-only session view for presentation
//!
//! # Game Rules
//!
//! - **Placement**: A block may go anywhere its bounding box fits and every
//!   occupied cell lands on an empty grid cell. Blocks never rotate.
//! - **Clearing**: Every full row and column is emptied after each placement,
//!   crossing lines included.
//! - **Scoring**: 5 per placement, plus `count*10 + 2^count + streak*20` when
//!   `count` lines clear.
//! - **Tray**: Three blocks; each one used is replaced immediately.
//! - **Game over**: When no tray block fits anywhere.
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! let snap = game.start_new_game();
//! assert_eq!(snap.score, 0);
//!
//! // Any block fits the top-left corner of an empty grid.
//! assert!(game.query_valid_placement(0, 0, 0));
//! let outcome = game.attempt_placement(0, 0, 0);
//! assert!(outcome.accepted);
//! assert_eq!(outcome.score_delta, 5);
//! assert_eq!(game.blocks().len(), 3);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, MoveOutcome, PlacementError};
pub use grid::{ClearedLines, Grid};
pub use rng::{BlockGenerator, RandomSource, SimpleRng};
pub use scoring::{calculate_clear_score, placement_points, ScoreResult};
pub use shapes::{Block, Shape, ShapeId, SHAPES};
pub use snapshot::GameSnapshot;
