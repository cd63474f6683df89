mod config;
mod food;
mod game;
mod input;
mod session;
mod snake;
mod term;

use std::{fs::File, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::config::GameConfig;

pub type TermInt = u16;
/// Terminal screen position
pub type Coords = (TermInt, TermInt);
/// Grid cell as (column, row)
pub type Cell = (i16, i16);

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(i16).range(5..=200))]
    width: i16,

    /// Grid height in cells
    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(i16).range(5..=200))]
    height: i16,

    /// Delay between game ticks, in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal is in raw mode while playing, so logs only go to a file
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(cli.log_level.into(), Config::default(), file)
            .context("Failed to initialize logger")?;
    }

    let config = GameConfig {
        tick_interval: Duration::from_millis(cli.tick_ms),
        ..GameConfig::new(cli.width, cli.height)
    };
    config.validate()?;
    info!("Starting snake with {:?}", config);

    let mut game = game::SnakeGame::new(config)?;
    game.initialize()?;

    let result = run(&mut game);
    game.shutdown()?;
    result
}

fn run(game: &mut game::SnakeGame) -> Result<()> {
    game.show_intro()?;

    loop {
        // The main game loop takes care of exiting cleanly on quit
        game.play()?;
    }
}
