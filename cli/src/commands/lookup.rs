//! # MIC Lookup Command
//!
//! File: cli/src/commands/lookup.rs
//!
//! ## Overview
//!
//! Implements `mic lookup`, the terminal counterpart of the page's
//! "Enter Medicine Name" form. For every name given:
//! 1. Blank names are skipped with a hint, exactly like an empty form submit.
//! 2. The lookup is submitted and "Searching..." is shown on stderr.
//! 3. After the simulated delay the record is printed as four labeled
//!    fields, or as one line of JSON with `--json`.
//!
//! Unknown medicines are not an error; they print the "not available" record.
//!
//! ## Examples
//!
//! ```bash
//! mic lookup paracetamol
//! mic lookup "  IBUPROFEN " aspirin --json
//! mic --delay-ms 0 lookup vitaminZ
//! ```
//!
use crate::common::pacing::Pacer;
use crate::common::ui;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::session::{LookupSubmission, SessionState, SessionUpdate};
use clap::Parser;
use tracing::{info, warn};

/// # Lookup Arguments (`LookupArgs`)
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Medicine name(s) to look up, e.g. Paracetamol, Ibuprofen, Aspirin.
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
    /// Print each record as a single line of JSON.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Lookup Command (`handle_lookup`)
///
/// Looks the names up one at a time. The next lookup is only submitted once
/// the previous one has completed, since a session refuses a second lookup
/// while one is still searching.
pub async fn handle_lookup(args: LookupArgs, config: &Config) -> Result<()> {
    info!("Handling lookup command for {} name(s)", args.names.len());

    let mut session = SessionState::from_config(config);
    let pacer = Pacer::start();

    if !args.json {
        println!("{}", ui::banner());
    }

    for name in &args.names {
        pacer.catch_up(&mut session);
        match session.submit_lookup(name) {
            LookupSubmission::Scheduled => eprintln!("{}", ui::SEARCHING),
            LookupSubmission::Blank => {
                warn!("Skipping blank medicine name");
                eprintln!("{}", ui::BLANK_LOOKUP);
                continue;
            }
            LookupSubmission::Busy => {
                warn!("Lookup still in progress, skipping '{}'", name);
                continue;
            }
        }

        let mut completed = Vec::new();
        pacer
            .settle(&mut session, |_, update| {
                if let SessionUpdate::LookupCompleted(record) = update {
                    completed.push(record);
                }
            })
            .await;

        for record in completed {
            if args.json {
                println!("{}", ui::to_json(&record)?);
            } else {
                println!("{}", ui::render_record(&record));
            }
        }
    }

    Ok(())
}
