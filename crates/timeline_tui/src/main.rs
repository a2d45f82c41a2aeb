//! Timeline - tic-tac-toe with time travel

use anyhow::{Context, Result};
use clap::Parser;
use timeline_tictactoe::SortOrder;
use timeline_tui::{Cli, Command, TuiConfig, logging::init_stderr_logging, replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        None => run_tui(&config),
        Some(Command::Play { descending }) => run_tui(&with_descending(config, descending)),
        Some(Command::Replay {
            moves,
            jump,
            descending,
            json,
        }) => {
            init_stderr_logging(&config);
            let config = with_descending(config, descending);
            info!(moves = moves.len(), ?jump, "Replaying moves");

            let report = replay(&moves, jump, *config.sort_order())
                .context("Failed to replay moves")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(())
        }
    }
}

fn with_descending(config: TuiConfig, descending: bool) -> TuiConfig {
    if descending {
        config.with_sort_order(SortOrder::Descending)
    } else {
        config
    }
}
