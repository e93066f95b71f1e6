//! Terminal input module.
//!
//! Maps `crossterm` key events to map scroll directions and keeps track of
//! held keys, producing one [`types::ScrollIntent`] per frame. Works with
//! terminals that never report key releases (held keys time out).

pub mod handler;
pub mod map;

pub use hexwar_types as types;

pub use handler::ScrollInput;
pub use map::{scroll_key, should_quit, ScrollKey};
