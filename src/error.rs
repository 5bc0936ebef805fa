//! Error types for sqlsplit.
//!
//! Splitting and classification never fail; these errors only cover the
//! surfaces around them (reading input, loading config, writing output).

use thiserror::Error;

/// Main error type for sqlsplit operations.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Input errors (script file missing, stdin unreadable, etc.)
    #[error("Input error: {0}")]
    Io(String),

    /// Configuration errors (invalid config file, unknown output format, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output errors (serialization failure, unwritable output file, etc.)
    #[error("Output error: {0}")]
    Output(String),
}

impl SplitError {
    /// Creates an input error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an output error with the given message.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "Input Error",
            Self::Config(_) => "Configuration Error",
            Self::Output(_) => "Output Error",
        }
    }
}

/// Result type alias using SplitError.
pub type Result<T> = std::result::Result<T, SplitError>;
