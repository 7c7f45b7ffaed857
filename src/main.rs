mod board;
mod clock;
mod config;
mod deque;
mod food;
mod game;
mod grid;
mod input;
mod logging;
mod score;
mod snake;
mod state;
mod term;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::clock::FrameClock;
use crate::config::Config;
use crate::food::RandomSpawner;

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref(), config.log_level)?;

    let spawner = match config.seed {
        Some(seed) => RandomSpawner::new(seed),
        None => RandomSpawner::from_random(),
    };
    let clock = FrameClock::new(config.frame(), config.frames_per_tick);
    info!(seed = spawner.seed(), tick_ms = clock.tick_interval().as_millis() as u64, "starting");

    let mut game = game::SnakeGame::new(clock, spawner);

    // Restore the terminal whether the game quit or failed
    let res = game.initialize().and_then(|_| game.run());
    game.clean_exit()?;
    res
}
