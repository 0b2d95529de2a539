//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It renders into a plain
//! framebuffer that is then flushed to the terminal, rather than using a
//! widget toolkit.
//!
//! - [`GameView`] is pure: snapshot + overlay in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and only writes changed cells
//! - Cells are 2 characters wide to keep the 8x8 grid roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{CursorView, FlashView, GameView, ViewOverlay, Viewport};
pub use renderer::{changed_runs, encode_frame_into, Run, TerminalRenderer};
