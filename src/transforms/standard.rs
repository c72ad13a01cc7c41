//! Standard transform definitions
//!
//! Pre-built pipelines with default options (pattern priority order, compact XML), behind
//! [`translate`](crate::translate) and [`translate_document`](crate::translate_document).

use crate::ast::Document;
use crate::formats::tag::TagOptions;
use crate::lexing::TokenOrder;
use crate::transforms::stages::{Parsing, Serialization, Tokenization};
use crate::transforms::Transform;
use once_cell::sync::Lazy;

pub type DocumentTransform = Transform<String, Document>;
pub type OutputTransform = Transform<String, String>;

/// String -> Document
pub static STRING_TO_DOCUMENT: Lazy<DocumentTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenization::new(TokenOrder::PatternPriority))
        .then(Parsing::new())
});

/// String -> compact XML
pub static STRING_TO_XML: Lazy<OutputTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenization::new(TokenOrder::PatternPriority))
        .then(Parsing::new())
        .then(Serialization::xml(TagOptions::default()))
});
