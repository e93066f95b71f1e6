//! Terminal rendering for the hex map.
//!
//! A small, game-oriented rendering layer: the map view draws into a plain
//! character framebuffer and the renderer flushes it to the terminal with
//! crossterm. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Show map pixels at full horizontal resolution (half-block cells)
//! - Only write the cells that changed between frames

pub mod fb;
pub mod map_view;
pub mod renderer;

pub use hexwar_core as core;
pub use hexwar_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use map_view::{MapLayout, MapView, TermSize};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
