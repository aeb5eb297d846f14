//! Terminal rendering for walltris.
//!
//! Snapshots are rendered into a plain framebuffer first, so layout can be
//! unit-tested without a terminal. Only [`TerminalRenderer`] touches stdout.
//! Board cells are drawn 2 chars wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use walltris_core as core;
pub use walltris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport, HELP_TEXT};
pub use renderer::{encode_full_into, TerminalRenderer};
