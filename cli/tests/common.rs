//! # MIC CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`lookup.rs`, `chat.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and pulls
//! this module in with `mod common;`.
//!
//! Commands are run inside a sandbox directory that doubles as `HOME`, so a
//! developer's own `config.toml` or `.mic.toml` never leaks into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// # Get MIC Command (`mic_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `mic` binary.
///
/// ## Panics
/// Panics if the `mic` binary cannot be found via `Command::cargo_bin`.
pub fn mic_cmd() -> Command {
    Command::cargo_bin("mic").expect("Failed to find mic binary for testing")
}

/// # Create Sandbox (`sandbox`)
///
/// A temporary directory with an empty `.git` directory in it, which stops the
/// project configuration search from climbing out of the sandbox.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// # MIC Command In Sandbox (`mic_in`)
///
/// Runs `mic` from `dir` with `HOME` and `XDG_CONFIG_HOME` pointing inside it.
pub fn mic_in(dir: &Path) -> Command {
    let mut cmd = mic_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a `.mic.toml` project configuration into `dir`.
pub fn write_project_config(dir: &Path, content: &str) {
    fs::write(dir.join(".mic.toml"), content).expect("Failed to write .mic.toml");
}

/// Writes the user `config.toml` that `mic_in` picks up through
/// `XDG_CONFIG_HOME`.
pub fn write_user_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".config").join("mic");
    fs::create_dir_all(&config_dir).expect("Failed to create user config dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config.toml");
}

/// Stdout of a finished command as a `String`.
pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}
