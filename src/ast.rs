//! Output tree for a translated conflang source
//!
//! The root is always a `config` element. Its children are [`Node`]s in the order the
//! parser appended them. Every text in the tree is the raw source string, with at most its
//! surrounding whitespace stripped; numbers and quoted strings are not interpreted.

use serde::Serialize;
use std::fmt;

/// Text of a `constant_eval` node whose name was not declared when it was processed
pub const UNDEFINED: &str = "undefined";

/// Tag names used by the tree serializers
pub mod tags {
    pub const ROOT: &str = "config";
    pub const GLOBAL: &str = "global";
    pub const DICT: &str = "dict";
    pub const ITEM: &str = "item";
    pub const ARRAY: &str = "array";
    pub const VALUE: &str = "value";
    pub const CONSTANT_EVAL: &str = "constant_eval";
}

/// The `config` root and its children
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Document { nodes }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

/// A `key="..."` entry inside a dict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictItem {
    pub key: String,
    pub value: String,
}

impl DictItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        DictItem {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A child of the `config` root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Global {
        name: String,
        value: String,
    },
    Dict {
        items: Vec<DictItem>,
    },
    Array {
        values: Vec<String>,
    },
    /// `value` is `None` when the reference could not be resolved
    ConstantEval {
        name: String,
        value: Option<String>,
    },
}

impl Node {
    pub fn global(name: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Global {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn dict(items: Vec<DictItem>) -> Self {
        Node::Dict { items }
    }

    pub fn array<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Node::Array {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn constant_eval(name: impl Into<String>, value: Option<String>) -> Self {
        Node::ConstantEval {
            name: name.into(),
            value,
        }
    }

    /// Element name of this node in the tag output
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Global { .. } => tags::GLOBAL,
            Node::Dict { .. } => tags::DICT,
            Node::Array { .. } => tags::ARRAY,
            Node::ConstantEval { .. } => tags::CONSTANT_EVAL,
        }
    }

    /// Text content of a leaf node; `None` for nodes that only hold children
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Global { value, .. } => Some(value),
            Node::ConstantEval { value, .. } => Some(value.as_deref().unwrap_or(UNDEFINED)),
            Node::Dict { .. } | Node::Array { .. } => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Global { name, value } => write!(f, "global {} = {}", name, value),
            Node::Dict { items } => write!(f, "dict ({} items)", items.len()),
            Node::Array { values } => write!(f, "array ({} values)", values.len()),
            Node::ConstantEval { name, .. } => {
                write!(f, "?[{}] -> {}", name, self.text().unwrap_or(UNDEFINED))
            }
        }
    }
}
