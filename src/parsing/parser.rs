//! Cursor-based parser over a conflang token stream
//!
//! The parser walks the stream once, left to right, dispatching on the four structural
//! kinds (`Global`, `DictStart`, `Array`, `ConstantEval`). Everything else is skipped.
//! A dict consumes tokens up to its `DictEnd`; the outer loop resumes just past it.

use crate::ast::{DictItem, Document, Node};
use crate::lexing::patterns::{ARRAY_TOKEN, CONSTANT_EVAL_TOKEN, GLOBAL_TOKEN};
use crate::lexing::{Token, TokenKind};
use crate::parsing::constants::ConstantTable;
use crate::parsing::ParseError;
use tracing::debug;

/// Single-use parser: owns the cursor and the constant table for one pass
pub struct Parser<'t> {
    tokens: &'t [Token],
    index: usize,
    constants: ConstantTable,
    document: Document,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Parser {
            tokens,
            index: 0,
            constants: ConstantTable::new(),
            document: Document::new(),
        }
    }

    /// Run the pass to completion
    pub fn parse(mut self) -> Result<Document, ParseError> {
        let tokens = self.tokens;
        while let Some(token) = tokens.get(self.index) {
            match token.kind {
                TokenKind::Global => self.parse_global(token),
                TokenKind::DictStart => self.parse_dict(token)?,
                TokenKind::Array => self.parse_array(token),
                TokenKind::ConstantEval => self.parse_constant_eval(token),
                _ => {}
            }
            self.index += 1;
        }

        debug!(
            nodes = self.document.len(),
            constants = self.constants.len(),
            "parse complete"
        );
        Ok(self.document)
    }

    fn parse_global(&mut self, token: &Token) {
        let Some(caps) = GLOBAL_TOKEN.captures(&token.text) else {
            debug!(%token, "global token does not re-match, skipped");
            return;
        };
        let name = &caps["name"];
        let value = caps["value"].trim();

        if let Some(previous) = self.constants.declare(name, value) {
            debug!(name, previous = %previous, value, "global redeclared");
        }
        self.emit(Node::global(name, value), token.line);
    }

    /// Leaves the cursor on the closing `DictEnd`
    fn parse_dict(&mut self, start: &Token) -> Result<(), ParseError> {
        let tokens = self.tokens;
        let mut items = Vec::new();
        self.index += 1;

        loop {
            let token = tokens
                .get(self.index)
                .ok_or(ParseError::UnterminatedDict {
                    line: start.line,
                    offset: start.span.start,
                })?;

            match token.kind {
                TokenKind::DictEnd => break,
                TokenKind::KeyValue => {
                    if let Some(item) = split_pair(&token.text) {
                        items.push(item);
                    }
                }
                _ => {}
            }
            self.index += 1;
        }

        self.emit(Node::dict(items), start.line);
        Ok(())
    }

    fn parse_array(&mut self, token: &Token) {
        let Some(caps) = ARRAY_TOKEN.captures(&token.text) else {
            debug!(%token, "array token does not re-match, skipped");
            return;
        };
        let values = caps["items"].split(',').map(str::trim);
        self.emit(Node::array(values), token.line);
    }

    fn parse_constant_eval(&mut self, token: &Token) {
        let Some(caps) = CONSTANT_EVAL_TOKEN.captures(&token.text) else {
            debug!(%token, "constant reference does not re-match, skipped");
            return;
        };
        let name = &caps["name"];
        let value = self.constants.resolve(name).map(str::to_string);
        if value.is_none() {
            debug!(name, line = token.line, "unresolved constant reference");
        }
        self.emit(Node::constant_eval(name, value), token.line);
    }

    fn emit(&mut self, node: Node, line: usize) {
        debug!(%node, line, "node");
        self.document.push(node);
    }
}

/// Split a key-value token on its first `=`
fn split_pair(text: &str) -> Option<DictItem> {
    let (key, value) = text.split_once('=')?;
    Some(DictItem::new(key.trim(), value.trim()))
}
