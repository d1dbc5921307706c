//! pipeline-when - include/exclude glob conditions for pipeline stages

pub mod cli;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    Condition, ConditionError, ConditionMap, Conditions, Dimension, GlobPattern, Node,
};
