//! Generic YAML document tree
//!
//! Scalars keep their source text exactly as written, so `1.10` stays
//! `"1.10"` and `True` stays `"True"`. Only plain `~`, `null` and empty
//! scalars resolve to `Node::Null`. Tags are ignored.

use crate::core::error::ConditionError;
use std::collections::HashMap;
use yaml_rust2::parser::{Event, EventReceiver, Parser};
use yaml_rust2::scanner::TScalarStyle;

/// A parsed YAML node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Null,
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(Node, Node)>),
}

impl Node {
    /// Parse the first document of a YAML string; an empty document is `Null`
    pub fn parse(yaml: &str) -> Result<Self, ConditionError> {
        let mut builder = NodeBuilder::default();
        Parser::new_from_str(yaml).load(&mut builder, false)?;
        Ok(builder.root.unwrap_or(Node::Null))
    }
}

fn is_plain_null(value: &str) -> bool {
    matches!(value, "" | "~" | "null" | "Null" | "NULL")
}

enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        anchor: usize,
        entries: Vec<(Node, Node)>,
        key: Option<Node>,
    },
}

#[derive(Default)]
struct NodeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    root: Option<Node>,
}

impl NodeBuilder {
    fn finish(&mut self, anchor: usize, node: Node) {
        // anchor ids start at 1
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }

        match self.stack.last_mut() {
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { entries, key, .. }) => match key.take() {
                Some(k) => entries.push((k, node)),
                None => *key = Some(node),
            },
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
        }
    }
}

impl EventReceiver for NodeBuilder {
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Scalar(value, style, anchor, _) => {
                let node = if matches!(style, TScalarStyle::Plain) && is_plain_null(&value) {
                    Node::Null
                } else {
                    Node::Scalar(value)
                };
                self.finish(anchor, node);
            }
            Event::SequenceStart(anchor, ..) => self.stack.push(Frame::Sequence {
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, ..) => self.stack.push(Frame::Mapping {
                anchor,
                entries: Vec::new(),
                key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence { anchor, items }) => {
                    self.finish(anchor, Node::Sequence(items))
                }
                Some(Frame::Mapping { anchor, entries, .. }) => {
                    self.finish(anchor, Node::Mapping(entries))
                }
                None => {}
            },
            Event::Alias(id) => {
                let node = self.anchors.get(&id).cloned().unwrap_or(Node::Null);
                self.finish(0, node);
            }
            _ => {}
        }
    }
}
