// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, HookError, Result};
use std::path::Path;

use super::schema::HookConfig;

/// Load configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<HookConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HookError::Config(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        } else {
            HookError::Config(ConfigError::ParseError {
                message: format!("Failed to read {}: {}", path.display(), e),
            })
        }
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string. Blank type tags are rejected.
pub fn parse_config(content: &str) -> Result<HookConfig> {
    let config: HookConfig = toml::from_str(content).map_err(|e| {
        HookError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    if let Some(blank) = config.types.iter().position(|t| t.trim().is_empty()) {
        return Err(HookError::Config(ConfigError::InvalidValue {
            key: format!("types[{}]", blank),
            message: "type tags must not be blank".to_string(),
        }));
    }

    Ok(config)
}
