//! Acme Katas - command-line front end.

mod cli;

use acme_katas::{KataConfig, commands};
use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KataConfig::from_file(path)?,
        None => KataConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting acme_katas");
    debug!(?config, "Effective configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Fizzbuzz { start, end, json } => {
            let (start, end) = config.fizzbuzz_range(start, end);
            commands::fizzbuzz(start, end, json, &mut out)
        }
        Command::Tictactoe { moves, json } => {
            commands::tictactoe(&moves, json, &mut out).map(|_| ())
        }
    }
}
