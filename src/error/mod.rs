// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the hook.
//!
//! Every error is terminal for a single invocation; the binary maps all of
//! them to exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for hook operations.
#[derive(Error, Debug)]
pub enum HookError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message file could not be read
    #[error("Failed to read commit message from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // The assembled grammar did not compile
    #[error("Invalid commit grammar: {0}")]
    Pattern(#[from] regex::Error),

    // Expected negative result of a check
    #[error("Your commit message is incorrect")]
    NotConventional,
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;
