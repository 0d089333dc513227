//! Command-line interface for tictactoe_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Terminal tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start with the move list in descending order (newest first)
    #[arg(long)]
    pub descending: bool,

    /// File to write tracing output to
    #[arg(long, default_value = "tictactoe_rewind.log")]
    pub log_file: PathBuf,
}
