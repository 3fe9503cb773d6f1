//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a scripted opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a scripted opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Seed for the opponent's random choices (reproducible games)
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the opponent answers a move, in milliseconds
        #[arg(long)]
        opponent_delay_ms: Option<u64>,

        /// Pause before the opponent opens a game, in milliseconds
        #[arg(long)]
        opening_delay_ms: Option<u64>,
    },

    /// Pit the opponent against a first-free-cell player and print the tally
    Autoplay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
