//! XML tag serialization
//!
//! Serializes a [`Document`] to XML. The default rendering is compact, the same shape
//! `ElementTree.tostring` would give:
//!
//! ```text
//! <config><array><value>1</value></array><global name="name">"value"</global></config>
//! ```
//!
//! With a non-zero indent every element goes on its own line and leaf text stays inline:
//!
//! ```text
//! <config>
//!   <array>
//!     <value>1</value>
//!   </array>
//!   <global name="name">"value"</global>
//! </config>
//! ```
//!
//! Empty elements are always written as a start/end pair.

use crate::ast::{tags, Document, Node};
use crate::formats::{Format, FormatError};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Rendering knobs for the tag serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions {
    /// Spaces per nesting level; 0 renders everything on one line
    pub indent: usize,
    /// Prefix the output with an XML declaration
    pub declaration: bool,
}

/// Serialize a document with the default compact rendering
pub fn serialize_document(doc: &Document) -> String {
    serialize_document_with(doc, TagOptions::default())
}

/// Serialize a document with explicit options
pub fn serialize_document_with(doc: &Document, options: TagOptions) -> String {
    let mut serializer = TagSerializer::new(options);
    if options.declaration {
        serializer.output.push_str(XML_DECLARATION);
        serializer.newline();
    }
    serializer.serialize_document(doc);
    serializer.output
}

struct TagSerializer {
    output: String,
    options: TagOptions,
    indent_level: usize,
}

impl TagSerializer {
    fn new(options: TagOptions) -> Self {
        Self {
            output: String::new(),
            options,
            indent_level: 0,
        }
    }

    fn pretty(&self) -> bool {
        self.options.indent > 0
    }

    fn newline(&mut self) {
        if self.pretty() {
            self.output.push('\n');
        }
    }

    fn push_indent(&mut self) {
        if self.pretty() {
            let width = self.indent_level * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }

    fn serialize_document(&mut self, doc: &Document) {
        self.open_container(tags::ROOT, None, doc.is_empty());
        for node in doc.iter() {
            self.serialize_node(node);
        }
        self.close_container(tags::ROOT, doc.is_empty());
    }

    fn serialize_node(&mut self, node: &Node) {
        let tag = node.tag();
        match node {
            Node::Global { name, .. } | Node::ConstantEval { name, .. } => {
                let text = node.text().unwrap_or_default();
                self.leaf(tag, Some(("name", name.as_str())), text);
            }
            Node::Dict { items } => {
                self.open_container(tag, None, items.is_empty());
                for item in items {
                    self.leaf(tags::ITEM, Some(("key", item.key.as_str())), &item.value);
                }
                self.close_container(tag, items.is_empty());
            }
            Node::Array { values } => {
                self.open_container(tag, None, values.is_empty());
                for value in values {
                    self.leaf(tags::VALUE, None, value);
                }
                self.close_container(tag, values.is_empty());
            }
        }
    }

    /// `<tag attr="...">text</tag>` on one line
    fn leaf(&mut self, tag: &str, attribute: Option<(&str, &str)>, text: &str) {
        self.push_indent();
        self.start_tag(tag, attribute);
        self.output.push_str(&escape_text(text));
        self.end_tag(tag);
        self.newline();
    }

    fn open_container(&mut self, tag: &str, attribute: Option<(&str, &str)>, empty: bool) {
        self.push_indent();
        self.start_tag(tag, attribute);
        if !empty {
            self.newline();
            self.indent_level += 1;
        }
    }

    fn close_container(&mut self, tag: &str, empty: bool) {
        if !empty {
            self.indent_level -= 1;
            self.push_indent();
        }
        self.end_tag(tag);
        // No trailing newline after the root
        if tag != tags::ROOT {
            self.newline();
        }
    }

    fn start_tag(&mut self, tag: &str, attribute: Option<(&str, &str)>) {
        self.output.push('<');
        self.output.push_str(tag);
        if let Some((name, value)) = attribute {
            self.output.push(' ');
            self.output.push_str(name);
            self.output.push_str("=\"");
            self.output.push_str(&escape_attribute(value));
            self.output.push('"');
        }
        self.output.push('>');
    }

    fn end_tag(&mut self, tag: &str) {
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }
}

/// Escape character data; quotes are legal in text and are kept as-is
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value (all five markup specials)
pub fn escape_attribute(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// The `xml` output format
#[derive(Debug, Clone, Copy, Default)]
pub struct TagFormat {
    options: TagOptions,
}

impl TagFormat {
    pub fn new(options: TagOptions) -> Self {
        TagFormat { options }
    }
}

impl Format for TagFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "XML tree rooted at <config>"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document_with(doc, self.options))
    }
}
