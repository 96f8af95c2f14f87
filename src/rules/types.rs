// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Allowed commit type tags.

use serde::Serialize;

/// The canonical Conventional Commits types.
pub const CONVENTIONAL_TYPES: &[&str] = &["feat", "fix"];

/// Types accepted when nothing else is configured.
pub const DEFAULT_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// An ordered set of allowed type tags.
///
/// Insertion order is kept, duplicates and blank tags are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeSet(Vec<String>);

impl TypeSet {
    /// Build a set from any sequence of tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if tag.trim().is_empty() || set.contains(&tag) {
                continue;
            }
            set.push(tag);
        }
        Self(set)
    }

    /// Whether `tag` is allowed. Case-sensitive.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::new(DEFAULT_TYPES.iter().copied())
    }
}

impl std::fmt::Display for TypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Resolve the effective type set for a check.
///
/// An empty set falls back to [`CONVENTIONAL_TYPES`]; any other set is used
/// as given. The canonical types are not merged into non-empty sets.
pub fn conventional_types_list(types: &TypeSet) -> TypeSet {
    if types.is_empty() {
        TypeSet::new(CONVENTIONAL_TYPES.iter().copied())
    } else {
        types.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_types() {
        let types = TypeSet::default();
        assert_eq!(types.len(), 11);
        assert_eq!(types.iter().next(), Some("build"));
        assert!(types.contains("feat"));
        assert!(types.contains("revert"));
        assert!(!types.contains("feature"));
    }

    #[test]
    fn test_type_set_dedup_keeps_order() {
        let types = TypeSet::new(["fix", "feat", "fix", "", "  ", "docs"]);
        assert_eq!(types.iter().collect::<Vec<_>>(), vec!["fix", "feat", "docs"]);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let types = TypeSet::new(["feat"]);
        assert!(!types.contains("Feat"));
    }

    #[test]
    fn test_empty_set_falls_back_to_canonical() {
        let resolved = conventional_types_list(&TypeSet::new(Vec::<String>::new()));
        assert_eq!(resolved.iter().collect::<Vec<_>>(), vec!["feat", "fix"]);
    }

    #[test]
    fn test_non_empty_set_is_not_merged() {
        let resolved = conventional_types_list(&TypeSet::new(["hotfix"]));
        assert_eq!(resolved.iter().collect::<Vec<_>>(), vec!["hotfix"]);
        assert!(!resolved.contains("feat"));
    }

    #[test]
    fn test_display_joins_tags() {
        assert_eq!(TypeSet::new(["feat", "fix"]).to_string(), "feat, fix");
    }
}
