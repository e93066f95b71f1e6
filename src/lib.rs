//! Hexagon war game map viewer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`hexwar::{core, input, term, types}`) and holds the host-side pieces:
//! environment configuration and logging setup.

pub mod config;
pub mod logging;

pub use hexwar_core as core;
pub use hexwar_input as input;
pub use hexwar_term as term;
pub use hexwar_types as types;

pub use config::AppConfig;
