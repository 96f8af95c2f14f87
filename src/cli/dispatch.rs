// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Running a check from parsed arguments.

use crate::config::HookConfig;
use crate::error::{HookError, Result};
use crate::rules;

use super::args::Cli;

/// Run the CLI with the given arguments.
///
/// Returns [`HookError::NotConventional`] once the diagnostic has been
/// printed for a message that does not match.
pub fn run(cli: Cli) -> Result<()> {
    // Only an explicit --config is read; without one the built-in list applies
    let config = match &cli.config {
        Some(config_path) => HookConfig::load_from(config_path)?,
        None => HookConfig::default(),
    };
    let types = cli.resolve_types(&config);
    tracing::debug!("Allowed types: {}", types);

    let input = cli.input();
    let message = std::fs::read_to_string(input).map_err(|source| HookError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let result = rules::validate(&message, &types)?;
    result.print(cli.format);

    if result.is_valid() {
        Ok(())
    } else {
        Err(HookError::NotConventional)
    }
}
