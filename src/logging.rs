use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

/// Sends log lines to `path`. The terminal belongs to the game, so with no
/// path nothing is installed and every event is dropped.
pub fn init(path: Option<&Path>, level: Level) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => return Ok(()),
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("installing log subscriber")
}
