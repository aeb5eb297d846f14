//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] and recognizes the
//! session keys (quit and confirm) the driver handles itself.

pub mod map;

pub use walltris_types as types;

pub use map::{handle_key_event, is_confirm, should_quit};
