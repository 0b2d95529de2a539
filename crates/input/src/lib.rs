//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game rules. It maps
//! `crossterm` key events into [`crate::types::PlayerAction`]s and tracks the
//! placement cursor, turning actions into placement requests that the caller
//! forwards to the engine.

pub mod cursor;
pub mod map;

pub use block_blast_types as types;

pub use cursor::{CursorCommand, PlacementCursor};
pub use map::{handle_key_event, should_quit};
