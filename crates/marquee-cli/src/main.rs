use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "An auto-advancing banner carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to play (shorthand for `run`)
    deck: Option<PathBuf>,

    /// Override the auto-advance interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a deck
    Run {
        /// Deck file; defaults to the configured deck path
        deck: Option<PathBuf>,
        /// Override the auto-advance interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Validate a deck file
    Check {
        /// Deck file to validate
        deck: PathBuf,
    },
    /// Write a sample deck file
    Init {
        /// Where to write the sample deck
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run { deck, interval_ms }) => {
            commands::run::run(config, deck, interval_ms)
        }
        None => commands::run::run(config, cli.deck, cli.interval_ms),
        Some(Commands::Check { deck }) => commands::check::run(&deck),
        Some(Commands::Init { path }) => commands::init::run(&path),
    }
}
