//! Strictly Markers - Unified CLI
//!
//! Console and terminal UI frontends over one game engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Seats};
use strictly_markers::{
    run_tui, Console, GameConfig, GameEngine, MoveProtocol, PlayerNames, Roster,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Console { seats } => run_console(&cli.config, &seats),
        Command::Tui { seats } => run_board(&cli.config, &seats),
        Command::Roster => {
            print_roster();
            Ok(())
        }
    }
}

/// Run a range-move match on stdin/stdout
fn run_console(config_path: &std::path::Path, seats: &Seats) -> Result<()> {
    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (config, names) = load(config_path, seats)?;
    let mut engine = GameEngine::new(*config.board_size(), MoveProtocol::Range)?;
    info!(size = config.board_size(), "Starting console match");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(&mut engine, &names, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

/// Run a point-move match in the terminal UI
fn run_board(config_path: &std::path::Path, seats: &Seats) -> Result<()> {
    let (config, names) = load(config_path, seats)?;
    let engine = GameEngine::new(*config.board_size(), MoveProtocol::Point)?;
    run_tui(engine, names, config.log_file())
}

#[instrument(skip(seats))]
fn load(config_path: &std::path::Path, seats: &Seats) -> Result<(GameConfig, PlayerNames)> {
    let config = GameConfig::load_or_default(config_path)?.with_board_size(seats.size)?;
    let names = resolve_names(&config, seats)?;
    Ok((config, names))
}

/// Config names, replaced by roster picks where given
fn resolve_names(config: &GameConfig, seats: &Seats) -> Result<PlayerNames> {
    Roster::classic()
        .seat(seats.player_one, seats.player_two, &config.player_names())
        .context("Invalid player selection")
}

fn print_roster() {
    for (i, character) in Roster::classic().characters().iter().enumerate() {
        println!("{:>2}. {}", i + 1, character.name);
    }
}
