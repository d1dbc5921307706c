//! Condition error types

use thiserror::Error;

/// Errors raised while building condition primitives
#[derive(Debug, Error)]
pub enum ConditionError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Unknown condition dimension: {0}")]
    UnknownDimension(String),

    #[error("YAML syntax error: {0}")]
    Syntax(#[from] yaml_rust2::scanner::ScanError),

    #[error("Expected a mapping of conditions, found a {0}")]
    InvalidBlock(&'static str),
}
