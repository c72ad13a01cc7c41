//! Translator façade
//!
//! Wires the lexer, the parser and an output format together. [`translate`] is the entry
//! point most callers need; [`Translator`] carries non-default options, usually built
//! from a loaded [`ConflangConfig`].

use crate::ast::Document;
use crate::config::ConflangConfig;
use crate::error::TranslateError;
use crate::formats::tag::TagOptions;
use crate::formats::FormatRegistry;
use crate::lexing::TokenOrder;
use crate::transforms::stages::{Parsing, Serialization, Tokenization};
use crate::transforms::standard::{STRING_TO_DOCUMENT, STRING_TO_XML};
use crate::transforms::Transform;
use tracing::info;

/// Translate conflang source into compact XML
pub fn translate(source: &str) -> Result<String, TranslateError> {
    STRING_TO_XML.run(source.to_string())
}

/// Translate conflang source into its document tree
pub fn translate_document(source: &str) -> Result<Document, TranslateError> {
    STRING_TO_DOCUMENT.run(source.to_string())
}

/// Options for one [`Translator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub order: TokenOrder,
    /// Registered format name (`xml`, `json`, `yaml`)
    pub format: String,
    pub indent: usize,
    pub declaration: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        TranslatorOptions {
            order: TokenOrder::PatternPriority,
            format: "xml".to_string(),
            indent: 0,
            declaration: false,
        }
    }
}

impl TranslatorOptions {
    fn tag_options(&self) -> TagOptions {
        TagOptions {
            indent: self.indent,
            declaration: self.declaration,
        }
    }
}

/// A configured translation pipeline
pub struct Translator {
    options: TranslatorOptions,
    pipeline: Transform<String, String>,
}

impl Translator {
    /// Build the pipeline; fails if the format name is not registered
    pub fn new(options: TranslatorOptions) -> Result<Self, TranslateError> {
        let mut registry = FormatRegistry::with_options(options.tag_options());
        let format = registry.take(&options.format)?;

        let pipeline: Transform<String, String> = Transform::from_fn(Ok)
            .then(Tokenization::new(options.order))
            .then(Parsing::new())
            .then(Serialization::new(format));

        Ok(Translator { options, pipeline })
    }

    pub fn from_config(config: &ConflangConfig) -> Result<Self, TranslateError> {
        Translator::new(TranslatorOptions {
            order: config.lexer.order,
            format: config.output.format.clone(),
            indent: config.output.indent,
            declaration: config.output.declaration,
        })
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    pub fn translate(&self, source: &str) -> Result<String, TranslateError> {
        let output = self.pipeline.run(source.to_string())?;
        info!(
            format = %self.options.format,
            order = self.options.order.name(),
            bytes_in = source.len(),
            bytes_out = output.len(),
            "translated"
        );
        Ok(output)
    }
}

impl Default for Translator {
    fn default() -> Self {
        // xml is always registered
        let options = TranslatorOptions::default();
        let pipeline: Transform<String, String> = Transform::from_fn(Ok)
            .then(Tokenization::new(options.order))
            .then(Parsing::new())
            .then(Serialization::xml(options.tag_options()));
        Translator { options, pipeline }
    }
}
