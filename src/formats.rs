//! Output formats for translated documents
//!
//! A [`Format`] turns a [`Document`] into text. `xml` is the canonical output of the
//! translator; `json` and `yaml` render the same tree through serde and are mostly useful
//! for inspecting what the parser built.

pub mod data;
pub mod registry;
pub mod tag;

pub use data::{JsonFormat, YamlFormat};
pub use registry::FormatRegistry;
pub use tag::{TagFormat, TagOptions};

use crate::ast::Document;
use thiserror::Error;

/// Errors raised while selecting or running a format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("failed to serialize as {format}: {message}")]
    SerializationError { format: String, message: String },
}

/// Trait for document output formats
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "xml", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Serialize a Document into text
    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;
}
