// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Header validation and its report.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use console::style;

use super::grammar::Pattern;
use super::types::{conventional_types_list, TypeSet};

/// Result of checking a commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The message as read.
    pub message: String,
    /// Types the message was checked against.
    pub types: TypeSet,
    /// Grammar used for the check.
    pub pattern: Pattern,
    /// Whether the message matched.
    pub valid: bool,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format. Silent on success.
    fn print_text(&self) {
        if self.valid {
            return;
        }

        println!("{}", style("Your commit message is incorrect").red().bold());
        println!(
            "  {} {}",
            style("→").dim(),
            style("expected <type>[(scope)][!]: <subject>").dim()
        );
        println!(
            "  {} {}",
            style("→").dim(),
            style(format!("allowed types: {}", self.types)).dim()
        );
    }

    /// Print in JSON format. A failure is also reported on stderr.
    fn print_json(&self) {
        if !self.valid {
            eprintln!("{}", style("Your commit message is incorrect").red().bold());
        }


        let json = serde_json::json!({
            "valid": self.valid,
            "message": self.message,
            "types": self.types,
            "pattern": self.pattern.as_str(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}

/// Check `message` against the header grammar for `types`.
pub fn validate(message: &str, types: &TypeSet) -> Result<ValidationResult> {
    let types = conventional_types_list(types);
    let pattern = Pattern::build(&types);
    tracing::debug!("Checking message against: {}", pattern);

    let valid = pattern.compile()?.is_match(message);
    tracing::debug!("Message is {}", if valid { "conventional" } else { "not conventional" });

    Ok(ValidationResult {
        message: message.to_string(),
        types,
        pattern,
        valid,
    })
}

/// Whether `message` follows Conventional Commits for the given types.
pub fn is_commit_conventional(message: &str, types: &TypeSet) -> bool {
    match validate(message, types) {
        Ok(result) => result.valid,
        Err(e) => {
            tracing::warn!("Could not build commit grammar: {}", e);
            false
        }
    }
}
