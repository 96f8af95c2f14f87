// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional Commits commit-msg hook.
//!
//! Checks that a commit message starts with a Conventional Commits header,
//! e.g. `feat(api)!: drop v1 endpoints`, for use as a git hook gate.
//!
//! # Example
//!
//! ```
//! use conventional_commit_hook::rules::{is_commit_conventional, TypeSet};
//!
//! assert!(is_commit_conventional("feat: add login flow", &TypeSet::default()));
//! assert!(!is_commit_conventional("update readme", &TypeSet::default()));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::HookConfig;
pub use error::{HookError, Result};
pub use rules::{is_commit_conventional, TypeSet};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of the hook.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
