//! The medicine lookup algorithm.

use super::catalog::{normalize_key, MedicineCatalog};
use super::record::MedicineRecord;
use tracing::debug;

/// Resolves `raw_name` against `catalog`.
///
/// On a hit the catalog record is returned unchanged, carrying its canonical
/// display name. On a miss the fallback record is returned with `name` set to
/// `raw_name` exactly as given (not trimmed, not lower-cased).
///
/// Callers must not pass a blank name; blank input is rejected before the
/// lookup is requested. If one slips through it simply misses and falls back.
pub fn lookup(catalog: &MedicineCatalog, raw_name: &str) -> MedicineRecord {
    match catalog.get(raw_name) {
        Some(record) => {
            debug!("Catalog hit for '{}' -> {}", normalize_key(raw_name), record.name);
            record.clone()
        }
        None => {
            debug!("Catalog miss for '{}', returning fallback record", normalize_key(raw_name));
            MedicineRecord::unavailable(raw_name)
        }
    }
}
