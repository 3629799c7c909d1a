//! # MIC Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for MIC, handling loading,
//! merging, validation, and access to configuration data. Configuration only
//! tunes the presentation layer: how long the simulated processing delay lasts,
//! what the chat bot is called, and whether reply selection is seeded.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Global command-line flags (`--delay-ms`, `--seed`)
//! 2. Project-specific `.mic.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/mic/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [timing]
//! response_delay_ms = 250
//!
//! [chat]
//! bot_name = "MedBot"
//! seed = 42
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?.with_overrides(Some(0), None)?;
//! let delay = cfg.timing.response_delay();
//! ```
//!
use crate::core::error::{MicError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Upper bound for the simulated delay. Anything longer makes the CLI look hung.
pub const MAX_RESPONSE_DELAY_MS: u64 = 60_000;

/// The effective configuration, after merging every source and applying
/// defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub timing: TimingConfig,
    pub chat: ChatConfig,
}

/// Timing of the simulated processing delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Delay between a request and the availability of its result, in
    /// milliseconds. Applies to lookups and bot replies alike.
    pub response_delay_ms: u64,
}

/// Settings for the chat panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Display name of the bot.
    pub bot_name: String,
    /// Seed for reply selection. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

/// A single configuration file as written on disk. Every setting is optional
/// so an explicit value can be told apart from one the file leaves out.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    timing: TimingFile,
    #[serde(default)]
    chat: ChatFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct TimingFile {
    response_delay_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ChatFile {
    bot_name: Option<String>,
    seed: Option<u64>,
}

impl ConfigFile {
    /// Keeps every value set in `self` and takes the rest from `fallback`.
    fn or(self, fallback: ConfigFile) -> ConfigFile {
        ConfigFile {
            timing: TimingFile {
                response_delay_ms: self
                    .timing
                    .response_delay_ms
                    .or(fallback.timing.response_delay_ms),
            },
            chat: ChatFile {
                bot_name: self.chat.bot_name.or(fallback.chat.bot_name),
                seed: self.chat.seed.or(fallback.chat.seed),
            },
        }
    }

    /// Fills whatever is still unset with the built-in defaults.
    fn into_config(self) -> Config {
        Config {
            timing: TimingConfig {
                response_delay_ms: self
                    .timing
                    .response_delay_ms
                    .unwrap_or_else(default_response_delay_ms),
            },
            chat: ChatConfig {
                bot_name: self.chat.bot_name.unwrap_or_else(default_bot_name),
                seed: self.chat.seed,
            },
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            seed: None,
        }
    }
}

impl TimingConfig {
    /// The configured delay as a `Duration`.
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Config {
    /// Applies command-line overrides on top of the file-based configuration
    /// and re-validates the result.
    pub fn with_overrides(mut self, delay_ms: Option<u64>, seed: Option<u64>) -> Result<Self> {
        if let Some(delay_ms) = delay_ms {
            debug!("Overriding response delay from command line: {}ms", delay_ms);
            self.timing.response_delay_ms = delay_ms;
        }
        if seed.is_some() {
            debug!("Overriding chat seed from command line: {:?}", seed);
            self.chat.seed = seed;
        }
        validate_config(&self).context("Configuration validation failed")?;
        Ok(self)
    }
}

fn default_response_delay_ms() -> u64 {
    1_000
}
fn default_bot_name() -> String {
    "MedBot".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".mic.toml";

/// Loads user and project configuration files, merges them and validates
/// the result. Missing files are not an error.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let merged_config = merge_configs(user_config, project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "MIC", "mic") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.mic.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Every value the project file sets wins over the user file, even when it
/// matches the default. Defaults fill whatever neither file sets.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    match project {
        Some(project) => project.or(user).into_config(),
        None => user.into_config(),
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    if config.timing.response_delay_ms > MAX_RESPONSE_DELAY_MS {
        return Err(anyhow!(MicError::Config(format!(
            "response_delay_ms of {} exceeds the maximum of {}ms.",
            config.timing.response_delay_ms, MAX_RESPONSE_DELAY_MS
        ))));
    }
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(MicError::Config(
            "bot_name cannot be blank.".to_string()
        )));
    }
    Ok(())
}
