//! Neon Tic-Tac-Toe - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use neon_tictactoe::{App, NeonConfig, SeededRandom, parse_moves, render_text, replay, run_tui};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, seed } => {
            let config = load_config(config.as_deref())?.with_seed(seed);
            run_tui(config).await
        }
        Command::Replay {
            moves,
            json,
            config,
        } => run_replay(&moves, json, config.as_deref()),
    }
}

/// Loads the config file if one was given, defaults otherwise.
fn load_config(path: Option<&Path>) -> Result<NeonConfig> {
    match path {
        Some(path) => NeonConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(NeonConfig::default()),
    }
}

/// Replays moves without a terminal UI.
#[instrument(skip(config))]
fn run_replay(moves: &[String], json: bool, config: Option<&Path>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(config)?;
    let moves = parse_moves(moves)?;
    let mut app = App::new(
        config.effect_settings(),
        SeededRandom::new(config.seed().unwrap_or_default()),
    );

    info!(count = moves.len(), "Replaying moves");
    let snapshot = replay(&mut app, &moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render_text(&snapshot));
    }
    Ok(())
}
