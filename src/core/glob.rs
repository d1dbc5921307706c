//! Path-aware glob patterns
//!
//! `*` and `?` stop at `/`, `**` spans path segments, and `[...]`, `[!...]`
//! and `{a,b}` are supported. Matching is case-sensitive and anchored at
//! both ends of the value.

use crate::core::error::ConditionError;
use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

/// A compiled glob pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    /// Compile a pattern, failing on malformed syntax
    pub fn new(pattern: &str) -> Result<Self, ConditionError> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|source| ConditionError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            source: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// The pattern text this glob was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether the whole value matches the pattern
    pub fn is_match(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }
}

/// Match a raw pattern against a value.
///
/// A pattern that fails to compile never matches.
pub fn matches(pattern: &str, value: &str) -> bool {
    match GlobPattern::new(pattern) {
        Ok(glob) => glob.is_match(value),
        Err(err) => {
            debug!("{}", err);
            false
        }
    }
}
