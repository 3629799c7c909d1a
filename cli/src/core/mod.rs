//! # MIC Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure the engines and commands build on:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `schedule`: Virtual-time queue of one-shot deferred tasks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{MicError, Result}; // For error handling
//! use crate::core::schedule::Scheduler; // For delivering delayed results
//! ```
//!
pub mod config;
pub mod error;
pub mod schedule;
