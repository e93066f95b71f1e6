//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HEXWAR_COLS` | 60 | Grid columns |
//! | `HEXWAR_ROWS` | 40 | Grid rows |
//! | `HEXWAR_SEED` | 1 | Seed for tile variants |
//! | `HEXWAR_PANEL_COLS` | 20 | Side panel width (terminal columns) |
//! | `HEXWAR_LEGACY_BOUNDS` | off | `1`/`true`: inclusive upper grid bounds |
//! | `HEXWAR_LOG_FILE` | unset | Log destination; logging is off without it |
//!
//! A variable that is set but does not parse is an error, not a silent default.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::core::{BoundsPolicy, HexGrid};
use crate::types::{
    DEFAULT_COLS, DEFAULT_PANEL_COLS, DEFAULT_ROWS, HEX_HEIGHT, HEX_SHORT_WIDTH, HEX_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub cols: i32,
    pub rows: i32,
    pub seed: u32,
    pub panel_cols: u16,
    pub legacy_bounds: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            seed: 1,
            panel_cols: DEFAULT_PANEL_COLS,
            legacy_bounds: false,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_file = lookup("HEXWAR_LOG_FILE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let legacy_bounds = lookup("HEXWAR_LEGACY_BOUNDS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            cols: parse_var(&lookup, "HEXWAR_COLS", defaults.cols)?,
            rows: parse_var(&lookup, "HEXWAR_ROWS", defaults.rows)?,
            seed: parse_var(&lookup, "HEXWAR_SEED", defaults.seed)?,
            panel_cols: parse_var(&lookup, "HEXWAR_PANEL_COLS", defaults.panel_cols)?,
            legacy_bounds,
            log_file,
        })
    }

    pub fn bounds_policy(&self) -> BoundsPolicy {
        if self.legacy_bounds {
            BoundsPolicy::InclusiveUpper
        } else {
            BoundsPolicy::Exclusive
        }
    }

    /// Grid with the default tile size and this config's extents.
    pub fn grid(&self) -> Result<HexGrid> {
        let grid = HexGrid::new(self.cols, self.rows, HEX_WIDTH, HEX_HEIGHT, HEX_SHORT_WIDTH)?;
        Ok(grid.with_bounds(self.bounds_policy()))
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow!("config: invalid {} value: {:?}", key, raw)),
    }
}
