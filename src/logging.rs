//! Logging setup.
//!
//! The viewer owns the terminal (raw mode, alternate screen), so log records
//! cannot go to stderr. They go to `HEXWAR_LOG_FILE` when it is set, filtered
//! by `RUST_LOG` (default `info`); otherwise no logger is installed.

use std::fs::File;

use anyhow::{Context, Result};

use crate::config::AppConfig;

pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("logging: cannot create {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logging: logger already installed")?;

    log::info!("logging to {}", path.display());
    Ok(())
}
