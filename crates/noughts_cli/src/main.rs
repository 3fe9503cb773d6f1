//! Noughts - terminal front end
//!
//! Plays tic-tac-toe against the scripted opponent from the `noughts` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod cli;
mod config;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use noughts::GameEngine;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play {
            seed,
            opponent_delay_ms,
            opening_delay_ms,
        } => {
            let config = apply_overrides(config, seed, opponent_delay_ms, opening_delay_ms);
            run_play(config).await
        }
        Command::Autoplay { games, seed } => run_autoplay(games, seed.or(*config.seed())),
    }
}

/// Command-line flags win over the config file.
fn apply_overrides(
    config: PlayConfig,
    seed: Option<u64>,
    opponent_delay_ms: Option<u64>,
    opening_delay_ms: Option<u64>,
) -> PlayConfig {
    let seed = seed.or(*config.seed());
    let opponent_delay_ms = opponent_delay_ms.unwrap_or(*config.opponent_delay_ms());
    let opening_delay_ms = opening_delay_ms.unwrap_or(*config.opening_delay_ms());
    config
        .with_seed(seed)
        .with_opponent_delay_ms(opponent_delay_ms)
        .with_opening_delay_ms(opening_delay_ms)
}

/// Run an interactive session on stdin/stdout
#[instrument(skip_all)]
async fn run_play(config: PlayConfig) -> Result<()> {
    info!(?config, "Starting interactive session");
    let mut engine = match config.seed() {
        Some(seed) => GameEngine::seeded(*seed),
        None => GameEngine::from_entropy(),
    };

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    let score = terminal::run_session(&mut engine, &config, input, &mut out).await?;
    println!("Final score: {}", score);
    Ok(())
}

/// Run unattended games and print the tally
#[instrument]
fn run_autoplay(games: u32, seed: Option<u64>) -> Result<()> {
    let mut engine = match seed {
        Some(seed) => GameEngine::seeded(seed),
        None => GameEngine::from_entropy(),
    };
    let score = autoplay::run(&mut engine, games)?;
    println!("{} games: {}", games, score);
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
