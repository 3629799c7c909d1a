//! # MIC Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the MIC application.
//!
//! The lookup and chat engines themselves never fail: an unknown medicine is
//! answered with a fallback record and a blank chat message is simply ignored.
//! Errors only arise in the surrounding layers:
//! - Configuration loading and validation
//! - Terminal I/O in the interactive chat loop
//! - JSON rendering of records and transcripts
//! - Construction of an empty reply corpus
//!
//! ## Architecture
//!
//! - `MicError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if config.chat.bot_name.trim().is_empty() {
//!     return Err(MicError::Config("bot_name cannot be blank".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the MIC application.
#[derive(Error, Debug)]
pub enum MicError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Response corpus must contain at least one reply.")]
    EmptyCorpus,

    #[error("Response corpus reply {index} is blank.")]
    BlankReply { index: usize },

    #[error("Terminal I/O failed: {source}")]
    Terminal {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to render output as JSON: {source}")]
    Render {
        #[from]
        source: serde_json::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = MicError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        assert_eq!(
            MicError::EmptyCorpus.to_string(),
            "Response corpus must contain at least one reply."
        );
        assert_eq!(
            MicError::BlankReply { index: 2 }.to_string(),
            "Response corpus reply 2 is blank."
        );

        let io_err: MicError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(io_err.to_string().starts_with("Terminal I/O failed:"));
    }
}
