// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header rules.
//!
//! The grammar is a single anchored regular expression assembled from the
//! allowed type tags plus fixed scope, delimiter and subject fragments.

mod grammar;
mod types;
mod validator;

pub use grammar::Pattern;
pub use types::{conventional_types_list, TypeSet, CONVENTIONAL_TYPES, DEFAULT_TYPES};
pub use validator::{is_commit_conventional, validate, ValidationResult};
