//! # MIC Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities for the terminal front-end, kept apart from command
//! logic (`commands::`) and core infrastructure (`core::`):
//!
//! - **`pacing`**: Drives a session's virtual clock from tokio's real clock.
//! - **`ui`**: Renders records, chat messages and JSON output.
//!

/// Real-time driving of the session's deferred tasks.
pub mod pacing;
/// Terminal rendering of records, chat lines and JSON.
pub mod ui;
