//! Parser for the conflang token stream
//!
//! Turns the lexer's flat token stream into a [`Document`]. The constant table lives
//! inside one [`Parser`] and is dropped with it, so no state survives between parses.
//!
//! Failure is all-or-nothing: a dict without a closing `}` anywhere after its `{` in
//! the stream aborts the parse with [`ParseError::UnterminatedDict`] instead of returning
//! the nodes built so far.

pub mod constants;
pub mod parser;

pub use constants::ConstantTable;
pub use parser::Parser;

use crate::ast::Document;
use crate::lexing::Token;
use thiserror::Error;

/// Fatal errors raised while building the tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream ended while a dict was still open
    #[error("unterminated dict: '{{' at line {line} (byte {offset}) has no matching '}}'")]
    UnterminatedDict { line: usize, offset: usize },
}

/// Parse a token stream into a document
pub fn parse(tokens: &[Token]) -> Result<Document, ParseError> {
    Parser::new(tokens).parse()
}
