// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Regular-expression grammar for a Conventional Commits header.

use crate::error::Result;
use regex::Regex;

use super::types::TypeSet;

/// Optional parenthesised scope, e.g. `(api-client)`.
const SCOPE: &str = r"(\([\w /:-]+\))?";

/// Colon, optionally preceded by the breaking-change marker.
const DELIMITER: &str = r"!?:";

/// Single space followed by the rest of the message.
const SUBJECT: &str = r" .+";

/// An assembled header grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(String);

impl Pattern {
    /// Assemble the grammar for the given type tags.
    ///
    /// Tags match literally. `.` spans newlines and the pattern is anchored
    /// to the whole input.
    pub fn build(types: &TypeSet) -> Self {
        let alternation = types
            .iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        Self(format!("(?s)^({alternation}){SCOPE}{DELIMITER}{SUBJECT}$"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compile into a matcher.
    pub fn compile(&self) -> Result<Regex> {
        Ok(Regex::new(&self.0)?)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
