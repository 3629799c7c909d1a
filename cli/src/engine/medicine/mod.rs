//! # Medicine Lookup Engine
//!
//! File: cli/src/engine/medicine/mod.rs
//!
//! ## Overview
//!
//! Maps a user-supplied medicine name to a [`MedicineRecord`]. Names are
//! normalized (trimmed, lower-cased) and matched exactly against a fixed
//! [`MedicineCatalog`]. Unknown names are not an error: they produce a record
//! whose descriptive fields point the user to a healthcare provider.
//!
//! ```rust
//! use mic::engine::medicine::{lookup, MedicineCatalog};
//!
//! let catalog = MedicineCatalog::seeded();
//! assert_eq!(lookup(&catalog, "  ASPIRIN ").name, "Aspirin");
//! assert_eq!(lookup(&catalog, "vitaminZ").name, "vitaminZ");
//! ```
//!
mod catalog;
mod lookup;
mod record;

pub use catalog::{normalize_key, MedicineCatalog};
pub use lookup::lookup;
pub use record::{
    MedicineRecord, UNAVAILABLE_PRECAUTIONS, UNAVAILABLE_SIDE_EFFECTS, UNAVAILABLE_USE,
};
