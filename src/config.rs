use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "gridsnake", about = "Snake on a 40x25 character grid")]
pub struct Config {
    /// Length of one display frame in milliseconds
    #[arg(long, default_value_t = 20)]
    pub frame_ms: u64,

    /// Display frames between two snake moves
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames_per_tick: u32,

    /// Seed for food placement (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Config {
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
