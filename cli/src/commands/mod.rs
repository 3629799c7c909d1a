//! # MIC Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the commands of the `mic` CLI. It is the
//! presentation layer: each command collects input, calls into a
//! `SessionState`, and renders what comes back.
//!
//! ## Commands
//!
//! - `lookup`: Look up one or more medicines by name
//! - `chat`: Talk to MedBot, from arguments or interactively
//! - `catalog`: List the medicines the lookup knows
//!
//! Each command defines its own arguments structure and handler function.
//!

/// `mic catalog`: lists known medicines.
pub mod catalog;
/// `mic chat`: the MedBot conversation panel.
pub mod chat;
/// `mic lookup`: the medicine information form.
pub mod lookup;
