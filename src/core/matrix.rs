//! Matrix axis conditions

use crate::core::{error::ConditionError, node::Node, shape};
use serde::Serialize;
use std::collections::BTreeMap;

/// Include/exclude filters over named matrix axes, one pattern per axis.
///
/// A bare map is shorthand for `include`; its entries override any
/// structured `include` entry with the same axis name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConditionMap {
    /// Axis name -> pattern the axis value must match
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub include: BTreeMap<String, String>,

    /// Axis name -> pattern that rejects the axis value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub exclude: BTreeMap<String, String>,
}

impl ConditionMap {
    /// Whether no axis filters are set
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Parse matrix filters from YAML text; only YAML syntax errors fail
    pub fn from_yaml(yaml: &str) -> Result<Self, ConditionError> {
        Ok(Self::from_node(&Node::parse(yaml)?))
    }

    /// Build matrix filters from any accepted shape of a generic node
    pub fn from_node(node: &Node) -> Self {
        let axes = |name: &str| {
            shape::field(node, name)
                .and_then(shape::string_map)
                .unwrap_or_default()
        };

        // structured entries first, then the bare map on top
        let mut include = axes("include");
        let exclude = axes("exclude");
        if let Some(bare) = shape::string_map(node) {
            for (axis, pattern) in bare {
                include.insert(axis, pattern);
            }
        }

        Self { include, exclude }
    }
}
