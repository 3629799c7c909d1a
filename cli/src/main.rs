//! # MIC Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `mic` CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and applying command-line overrides
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! mic --help
//!
//! # Look up a medicine without the simulated delay
//! mic --delay-ms 0 lookup paracetamol
//!
//! # Chat with a reproducible reply sequence and debug logging
//! mic -vv --seed 42 chat "Hello"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration files and apply `--delay-ms` / `--seed`
//! 4. Route to appropriate command handler
//! 5. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use mic::commands;
use mic::core::config::{self, Config};
use mic::core::error::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "mic",
    about = "MIC – Medicine Information Checker",
    long_about = "Know Your Meds. Avoid Hospital Beds.\n\
                  Look up common medicines and ask MedBot general questions.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Simulated processing delay in milliseconds (default 1000).
    #[arg(long, value_name = "MS", global = true)]
    delay_ms: Option<u64>,
    /// Seed for MedBot's reply selection, for a reproducible conversation.
    #[arg(long, value_name = "SEED", global = true)]
    seed: Option<u64>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up medicine information by name.
    #[command(alias = "l")]
    Lookup(commands::lookup::LookupArgs),
    /// Ask MedBot a question.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List the medicines the lookup knows about.
    Catalog(commands::catalog::CatalogArgs),
}

fn load_effective_config(cli: &Cli) -> Result<Config> {
    config::load_config()?.with_overrides(cli.delay_ms, cli.seed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match load_effective_config(&cli) {
        Ok(cfg) => match cli.command {
            Commands::Lookup(args) => commands::lookup::handle_lookup(args, &cfg).await,
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg).await,
            Commands::Catalog(args) => commands::catalog::handle_catalog(args).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
