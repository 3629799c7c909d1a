//! # MIC Catalog Command
//!
//! File: cli/src/commands/catalog.rs
//!
//! ## Overview
//!
//! Implements `mic catalog`, which lists the medicines the lookup knows about
//! by their canonical names. With `--json` it prints the full records as a
//! JSON array instead.
//!
use crate::common::ui;
use crate::core::error::Result;
use crate::engine::medicine::{MedicineCatalog, MedicineRecord};
use clap::Parser;
use tracing::info;

/// # Catalog Arguments (`CatalogArgs`)
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Print the full catalog records as JSON.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Catalog Command (`handle_catalog`)
pub async fn handle_catalog(args: CatalogArgs) -> Result<()> {
    info!("Handling catalog command");
    let catalog = MedicineCatalog::seeded();

    if args.json {
        let records: Vec<&MedicineRecord> = catalog.records().collect();
        println!("{}", ui::to_json(&records)?);
        return Ok(());
    }

    println!("Known medicines:");
    for name in catalog.names() {
        println!("  {}", name);
    }
    println!("\nFound {} medicine(s). Use 'mic lookup <NAME>' for details.", catalog.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_json_flag() {
        assert!(CatalogArgs::try_parse_from(["catalog", "--json"]).unwrap().json);
        assert!(!CatalogArgs::try_parse_from(["catalog"]).unwrap().json);
    }
}
