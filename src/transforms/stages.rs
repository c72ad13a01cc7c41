//! Translation stages
//!
//! - [`Tokenization`]: `String` -> `Vec<Token>`
//! - [`Parsing`]: `Vec<Token>` -> `Document`
//! - [`Serialization`]: `Document` -> `String`

use crate::ast::Document;
use crate::error::TranslateError;
use crate::formats::tag::{TagFormat, TagOptions};
use crate::formats::Format;
use crate::lexing::{tokenize_with_order, Token, TokenOrder};
use crate::parsing::parse;
use crate::transforms::Runnable;

/// Lexing stage
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenization {
    order: TokenOrder,
}

impl Tokenization {
    pub fn new(order: TokenOrder) -> Self {
        Tokenization { order }
    }
}

impl Runnable<String, Vec<Token>> for Tokenization {
    fn run(&self, input: String) -> Result<Vec<Token>, TranslateError> {
        Ok(tokenize_with_order(&input, self.order))
    }
}

/// Parsing stage
#[derive(Debug, Clone, Copy, Default)]
pub struct Parsing;

impl Parsing {
    pub fn new() -> Self {
        Parsing
    }
}

impl Runnable<Vec<Token>, Document> for Parsing {
    fn run(&self, input: Vec<Token>) -> Result<Document, TranslateError> {
        Ok(parse(&input)?)
    }
}

/// Serialization stage, wrapping one output format
pub struct Serialization {
    format: Box<dyn Format>,
}

impl Serialization {
    pub fn new(format: Box<dyn Format>) -> Self {
        Serialization { format }
    }

    pub fn xml(options: TagOptions) -> Self {
        Serialization::new(Box::new(TagFormat::new(options)))
    }
}

impl Runnable<Document, String> for Serialization {
    fn run(&self, input: Document) -> Result<String, TranslateError> {
        Ok(self.format.serialize(&input)?)
    }
}
