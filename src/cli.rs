//! Command-line interface for tictactoe.

use clap::Parser;

/// Two-player console tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter (overrides RUST_LOG), e.g. "debug" or "tictactoe=trace"
    #[arg(long)]
    pub log: Option<String>,
}
