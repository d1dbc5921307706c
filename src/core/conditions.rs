//! Condition groups loaded from YAML

use crate::core::{
    condition::Condition, error::ConditionError, matrix::ConditionMap, node::Node, shape,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A named dimension of a triggering event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Action,
    Cron,
    Ref,
    Repo,
    Instance,
    Target,
    Event,
    Branch,
    Status,
    Paths,
}

impl Dimension {
    /// All dimensions in declaration order
    pub const ALL: [Dimension; 10] = [
        Dimension::Action,
        Dimension::Cron,
        Dimension::Ref,
        Dimension::Repo,
        Dimension::Instance,
        Dimension::Target,
        Dimension::Event,
        Dimension::Branch,
        Dimension::Status,
        Dimension::Paths,
    ];

    /// The YAML key of this dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Action => "action",
            Dimension::Cron => "cron",
            Dimension::Ref => "ref",
            Dimension::Repo => "repo",
            Dimension::Instance => "instance",
            Dimension::Target => "target",
            Dimension::Event => "event",
            Dimension::Branch => "branch",
            Dimension::Status => "status",
            Dimension::Paths => "paths",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConditionError::UnknownDimension(s.to_string()))
    }
}

/// A group of runtime conditions, one per event dimension plus matrix filters.
///
/// Unset dimensions are empty and match every value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conditions {
    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub action: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub cron: Condition,

    #[serde(rename = "ref", skip_serializing_if = "Condition::is_empty")]
    pub reference: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub repo: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub instance: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub target: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub event: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub branch: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub status: Condition,

    #[serde(skip_serializing_if = "Condition::is_empty")]
    pub paths: Condition,

    /// Matrix axis filters
    #[serde(skip_serializing_if = "ConditionMap::is_empty")]
    pub matrix: ConditionMap,
}

impl Conditions {
    /// Load a conditions block from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse a conditions block from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let node = Node::parse(yaml).context("Invalid conditions document")?;
        let conditions = Self::from_node(&node).context("Invalid conditions document")?;
        Ok(conditions)
    }

    /// Build a conditions block from a generic node.
    ///
    /// A null node is an empty block and unknown keys are ignored; only a
    /// scalar or sequence in place of the block is rejected.
    pub fn from_node(node: &Node) -> Result<Self, ConditionError> {
        match node {
            Node::Null => return Ok(Self::default()),
            Node::Mapping(_) => {}
            Node::Scalar(_) => return Err(ConditionError::InvalidBlock("scalar")),
            Node::Sequence(_) => return Err(ConditionError::InvalidBlock("sequence")),
        }

        let condition = |dimension: Dimension| {
            shape::field(node, dimension.as_str())
                .map(Condition::from_node)
                .unwrap_or_default()
        };

        Ok(Self {
            action: condition(Dimension::Action),
            cron: condition(Dimension::Cron),
            reference: condition(Dimension::Ref),
            repo: condition(Dimension::Repo),
            instance: condition(Dimension::Instance),
            target: condition(Dimension::Target),
            event: condition(Dimension::Event),
            branch: condition(Dimension::Branch),
            status: condition(Dimension::Status),
            paths: condition(Dimension::Paths),
            matrix: shape::field(node, "matrix")
                .map(ConditionMap::from_node)
                .unwrap_or_default(),
        })
    }

    /// The condition for a given dimension
    pub fn condition(&self, dimension: Dimension) -> &Condition {
        match dimension {
            Dimension::Action => &self.action,
            Dimension::Cron => &self.cron,
            Dimension::Ref => &self.reference,
            Dimension::Repo => &self.repo,
            Dimension::Instance => &self.instance,
            Dimension::Target => &self.target,
            Dimension::Event => &self.event,
            Dimension::Branch => &self.branch,
            Dimension::Status => &self.status,
            Dimension::Paths => &self.paths,
        }
    }

    /// Whether no dimension or matrix filter is set
    pub fn is_empty(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.condition(*d).is_empty()) && self.matrix.is_empty()
    }
}
