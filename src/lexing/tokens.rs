//! Token definitions for the conflang format
//!
//! A token is a classified fragment of the source: a [`TokenKind`] tag plus the raw text the
//! pattern matched. Tokens also remember where they came from (byte span and line) so that
//! errors can point back into the source.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// All token kinds the lexer can produce, in pattern priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `#( ... )`
    Array,
    /// `%{ ... %}`
    MultilineComment,
    /// `*` up to the end of the line
    SinglelineComment,
    /// `global <name> = <value>;`
    Global,
    /// `?[<name>]`
    ConstantEval,
    /// `{`
    DictStart,
    /// `}`
    DictEnd,
    /// `<name> = <rest of line>`
    KeyValue,
    /// Bare integer literal
    Number,
}

impl TokenKind {
    /// Every kind, in the order the lexer runs their patterns
    pub const PRIORITY: [TokenKind; 9] = [
        TokenKind::Array,
        TokenKind::MultilineComment,
        TokenKind::SinglelineComment,
        TokenKind::Global,
        TokenKind::ConstantEval,
        TokenKind::DictStart,
        TokenKind::DictEnd,
        TokenKind::KeyValue,
        TokenKind::Number,
    ];

    /// Check if this kind is one of the two comment forms
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::MultilineComment | TokenKind::SinglelineComment
        )
    }

    /// Check if this kind opens or closes a dict
    pub fn is_dict_delimiter(&self) -> bool {
        matches!(self, TokenKind::DictStart | TokenKind::DictEnd)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Array => "ARRAY",
            TokenKind::MultilineComment => "MULTILINE_COMMENT",
            TokenKind::SinglelineComment => "SINGLELINE_COMMENT",
            TokenKind::Global => "GLOBAL",
            TokenKind::ConstantEval => "CONSTANT_EVAL",
            TokenKind::DictStart => "DICT_START",
            TokenKind::DictEnd => "DICT_END",
            TokenKind::KeyValue => "KEY_VALUE",
            TokenKind::Number => "NUMBER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified fragment of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The full text matched by the kind's pattern
    pub text: String,
    /// Byte range of `text` in the source
    pub span: Range<usize>,
    /// 1-based line of the first byte of `text`
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>, line: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            line,
        }
    }

    /// Build a token with no source position, for tokens that were not produced by the lexer
    pub fn detached(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, 0..0, 0)
    }

    /// Check if `other` lies entirely inside this token's span
    pub fn encloses(&self, other: &Token) -> bool {
        self.span.start <= other.span.start && other.span.end <= self.span.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
