// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::rules::TypeSet;

/// Hook configuration, as read from the file given with `--config`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HookConfig {
    /// Allowed commit types. Empty means "use the built-in list".
    pub types: Vec<String>,
}

impl HookConfig {
    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Configured types, if any were set.
    pub fn type_set(&self) -> Option<TypeSet> {
        if self.types.is_empty() {
            None
        } else {
            Some(TypeSet::new(self.types.iter().cloned()))
        }
    }
}
