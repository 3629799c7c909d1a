//! # MIC Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! MIC (Medicine Information Checker) pairs a medicine lookup with a small
//! canned-reply chat bot. The library exposes both engines, the session state
//! that drives them, and the command handlers used by the `mic` binary, so
//! integration tests under `tests/` can reach all of it.
//!
//! ## Architecture
//!
//! - `engine`: The medicine lookup and chat response engines (pure logic)
//! - `session`: Per-session state and the delayed delivery of results
//! - `core`: Configuration, errors and the virtual-time scheduler
//! - `common`: Terminal rendering and real-time pacing
//! - `commands`: The `lookup`, `chat` and `catalog` command handlers
//!

pub mod commands;
pub mod common;
pub mod core;
pub mod engine;
pub mod session;
