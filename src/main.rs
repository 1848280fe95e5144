//! Console tic-tac-toe binary.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(spec) => EnvFilter::try_new(spec)?,
        None => EnvFilter::from_default_env(),
    };
    // Logs go to stderr; stdout carries the game.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;

    info!("Session finished");
    Ok(())
}
