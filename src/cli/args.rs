// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::HookConfig;
use crate::rules::TypeSet;
use crate::version;

/// Check a git commit message for Conventional Commits formatting.
///
/// Intended to run as a commit-msg hook: git passes the path of the message
/// file as the last argument, after any allowed types.
#[derive(Parser, Debug)]
#[command(name = "conventional-commit-hook")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Check a git commit message for Conventional Commits formatting", long_about = None)]
pub struct Cli {
    /// Optional list of types to support, then a file containing a git commit message
    #[arg(value_name = "TYPES... INPUT", required = true, num_args = 1..)]
    pub args: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// Parse the process arguments. `--version` reports the embedded git
    /// SHA and commit date.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse_args_from(std::env::args_os())
    }

    /// Parse from an explicit argument list.
    pub fn try_parse_args_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command().version(version::version_string());
        let matches = command.try_get_matches_from_mut(itr)?;
        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))
    }

    /// The commit message file, always the last positional.
    pub fn input(&self) -> &Path {
        // `args` is required with at least one value
        self.args
            .split_last()
            .map(|(input, _)| Path::new(input.as_str()))
            .unwrap_or_else(|| Path::new(""))
    }

    /// Types given before the input path.
    pub fn types(&self) -> &[String] {
        self.args
            .split_last()
            .map(|(_, types)| types)
            .unwrap_or_default()
    }

    /// Whether types were given on the command line.
    pub fn has_types(&self) -> bool {
        !self.types().is_empty()
    }

    /// Resolve the allowed types: command line, then an explicit
    /// configuration file, then the built-in list.
    pub fn resolve_types(&self, config: &HookConfig) -> TypeSet {
        if self.has_types() {
            TypeSet::new(self.types().iter().cloned())
        } else {
            config.type_set().unwrap_or_default()
        }
    }
}
