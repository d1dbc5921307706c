//! Core condition models
//!
//! This module defines the include/exclude pattern conditions that gate
//! pipeline stages, and the flexible YAML shapes they are parsed from.

pub mod condition;
pub mod conditions;
pub mod error;
pub mod glob;
pub mod matrix;
pub mod node;
mod shape;

pub use condition::Condition;
pub use conditions::{Conditions, Dimension};
pub use error::ConditionError;
pub use glob::GlobPattern;
pub use matrix::ConditionMap;
pub use node::Node;
