//! Format registry for format discovery and selection
//!
//! Formats are registered under their [`Format::name`] and looked up by that name, which is
//! what the `output.format` setting and the `--format` flag carry.

use crate::ast::Document;
use crate::formats::data::{JsonFormat, YamlFormat};
use crate::formats::tag::{TagFormat, TagOptions};
use crate::formats::{Format, FormatError};
use std::collections::HashMap;

/// Registry of output formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Remove a format by name, handing ownership to the caller
    pub fn take(&mut self, name: &str) -> Result<Box<dyn Format>, FormatError> {
        self.formats
            .remove(name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a document using the specified format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(doc)
    }

    /// Create a registry with the built-in formats, compact rendering
    pub fn with_defaults() -> Self {
        Self::with_options(TagOptions::default())
    }

    /// Create a registry with the built-in formats; a non-zero indent also makes json pretty
    pub fn with_options(options: TagOptions) -> Self {
        let mut registry = Self::new();
        registry.register(TagFormat::new(options));
        registry.register(JsonFormat::new(options.indent > 0));
        registry.register(YamlFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
