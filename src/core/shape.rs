//! Shape matchers over generic YAML nodes
//!
//! Each matcher either recognizes the node as a given shape and returns it,
//! or returns `None` so the caller can try the next one.

use crate::core::node::Node;
use std::collections::BTreeMap;
use tracing::trace;

/// Interpret a node as a single scalar string
pub fn scalar(node: &Node) -> Option<String> {
    match node {
        Node::Scalar(s) => Some(s.clone()),
        _ => None,
    }
}

/// Interpret a collection item as a string; null items become empty strings
fn item(node: &Node) -> Option<String> {
    match node {
        Node::Null => Some(String::new()),
        other => scalar(other),
    }
}

/// Interpret a node as a list of strings, dropping non-scalar items
pub fn string_list(node: &Node) -> Option<Vec<String>> {
    match node {
        Node::Sequence(items) => Some(
            items
                .iter()
                .filter_map(|n| {
                    let s = item(n);
                    if s.is_none() {
                        trace!("Dropping non-scalar list item");
                    }
                    s
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Interpret a node as a map of strings, dropping non-scalar entries
pub fn string_map(node: &Node) -> Option<BTreeMap<String, String>> {
    match node {
        Node::Mapping(entries) => Some(
            entries
                .iter()
                .filter_map(|(k, v)| Some((item(k)?, item(v)?)))
                .collect(),
        ),
        _ => None,
    }
}

/// Look up a named field of a mapping node
pub fn field<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
    match node {
        Node::Mapping(entries) => entries
            .iter()
            .find(|(k, _)| matches!(k, Node::Scalar(key) if key == name))
            .map(|(_, v)| v),
        _ => None,
    }
}

/// Whether the node is a mapping (the structured include/exclude shape)
pub fn is_mapping(node: &Node) -> bool {
    matches!(node, Node::Mapping(_))
}
