//! Walltris (workspace facade crate).
//!
//! Re-exports the workspace crates as `walltris::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use walltris_core as core;
pub use walltris_input as input;
pub use walltris_term as term;
pub use walltris_types as types;
