//! Command-line interface for the timeline binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use timeline_tictactoe::Position;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./timeline.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; plays interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// List history newest first
        #[arg(long)]
        descending: bool,
    },

    /// Play a list of moves without a terminal UI and print the result
    Replay {
        /// Cells to play in order, as 0-8 or labels like "center"
        #[arg(value_parser = parse_position)]
        moves: Vec<Position>,

        /// History index to jump to after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// List history newest first
        #[arg(long)]
        descending: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{s}' is not a cell (use 0-8 or a label like top-left)"))
}
