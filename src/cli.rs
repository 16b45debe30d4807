//! Command-line interface for neon_tictactoe.

use clap::{Parser, Subcommand};

/// Neon Tic-Tac-Toe - themed tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "neon_tictactoe")]
#[command(about = "Themed tic-tac-toe with score tracking and win effects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse or keyboard)
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for particle placement (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a list of moves headlessly and print the result
    Replay {
        /// Cells to play in order: 0-8 or labels such as `center`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
