//! Resolver configuration
//!
//! This module provides configuration options for canonical name resolution. The defaults
//! implement the documented contract (case-insensitive lookups); the presets exist for
//! callers that need exact matching.

use unicase::UniCase;

/// Configuration for resolving canonical names against a member universe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Compare namespaces, type names, member names and parameter signatures ignoring case
    /// (default: true)
    pub ignore_case: bool,

    /// Maximum number of segments in a queried type path (default: 64)
    /// Deeper paths resolve to `None` without searching
    pub max_nesting_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            max_nesting_depth: 64,
        }
    }
}

impl ResolverConfig {
    /// Creates a configuration that only accepts exact-case matches
    #[must_use]
    pub fn strict() -> Self {
        Self {
            ignore_case: false,
            ..Self::default()
        }
    }

    /// Compare two names according to this configuration
    ///
    /// Ignoring case means Unicode case folding, so any casing of a name (including one
    /// produced by `str::to_lowercase` or `str::to_uppercase`) matches the original.
    #[must_use]
    pub fn names_match(&self, left: &str, right: &str) -> bool {
        if self.ignore_case {
            UniCase::new(left) == UniCase::new(right)
        } else {
            left == right
        }
    }
}
