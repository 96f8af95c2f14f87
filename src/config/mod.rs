// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module.
//!
//! A TOML file passed with `--config` can replace the built-in type list
//! when no types are given on the command line. No file is read otherwise.

mod loader;
mod schema;

pub use loader::{load_config_from, parse_config};
pub use schema::HookConfig;
