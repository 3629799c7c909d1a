//! # MIC Engines
//!
//! File: cli/src/engine/mod.rs
//!
//! ## Overview
//!
//! The two independent engines at the heart of MIC. Neither calls the other
//! and they share no state:
//!
//! - `medicine`: Normalizes a medicine name and resolves it against a fixed
//!   catalog, falling back to an "information not available" record.
//! - `chat`: Appends user messages to a transcript and picks a canned reply
//!   uniformly at random from a fixed corpus.
//!
//! Timing is not the engines' business. The simulated delay lives in
//! `session`, which owns the scheduler and invokes the engines.
//!

/// Medicine record model, seeded catalog and the lookup algorithm.
pub mod medicine;
/// Chat messages, the append-only transcript, the reply corpus and reply selection.
pub mod chat;
