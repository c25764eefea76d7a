//! Error types for the examlens library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ExamLensError`] enum. Validation failures are reported up front; no
//! operation ever returns a partial result.
//!
//! # Examples
//!
//! ```
//! use examlens::error::{ExamLensError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(ExamLensError::validation("text is required"));
//!     }
//!     Ok(text)
//! }
//!
//! assert!(require_text("  ").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for examlens operations.
#[derive(Error, Debug)]
pub enum ExamLensError {
    /// A required text or keyword list was missing or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A keyword list contained a malformed entry.
    #[error("Input shape error: {0}")]
    InputShape(String),

    /// Analysis-related errors (tagging, tokenization, patterns).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (reading configuration or thesaurus files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by pluggable collaborators
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ExamLensError.
pub type Result<T> = std::result::Result<T, ExamLensError>;

impl ExamLensError {
    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        ExamLensError::Validation(msg.into())
    }

    /// Create a new input shape error.
    pub fn input_shape<S: Into<String>>(msg: S) -> Self {
        ExamLensError::InputShape(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ExamLensError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ExamLensError::Config(msg.into())
    }
}
