//! Terminal tic-tac-toe with a rewindable move history.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_rewind::SortOrder;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output never lands in the TUI.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting tictactoe_rewind");

    let order = if cli.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };

    tui::run(order)
}
