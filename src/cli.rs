//! Command-line interface for strictly_markers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Markers - misère marker-removal game
#[derive(Parser, Debug)]
#[command(name = "strictly_markers")]
#[command(about = "Take markers from a square board; whoever takes the last one loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the match configuration file
    #[arg(short, long, global = true, default_value = "strictly_markers.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Seat overrides shared by the playable frontends.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Seats {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Roster number for the first player (see `roster`)
    #[arg(long)]
    pub player_one: Option<usize>,

    /// Roster number for the second player (see `roster`)
    #[arg(long)]
    pub player_two: Option<usize>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal with range moves ("from" and "to" per turn)
    Console {
        /// Board size and seat overrides
        #[command(flatten)]
        seats: Seats,
    },

    /// Play in a full-screen board with point moves
    Tui {
        /// Board size and seat overrides
        #[command(flatten)]
        seats: Seats,
    },

    /// List the selectable characters
    Roster,
}
