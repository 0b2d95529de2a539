//! Block Blast (workspace facade crate).
//!
//! Re-exports the workspace crates as `block_blast::{core,input,term,types}`
//! and hosts the pieces of the terminal app that sit outside the engine:
//! command-line configuration, logging setup and best-score persistence.

pub use block_blast_core as core;
pub use block_blast_input as input;
pub use block_blast_term as term;
pub use block_blast_types as types;

pub mod best_score;
pub mod config;
pub mod logging;
