//! Lexer for the conflang format
//!
//! The lexer does not walk the source with a cursor. Each construct has its own pattern
//! (see [`patterns`]) and each pattern is searched over the whole source independently.
//! The token stream is the concatenation of those passes, in pattern priority order:
//! first every array, then every multiline comment, and so on down to bare numbers.
//!
//! As a consequence the stream is not in source order across kinds. A `}` always comes
//! before any `a = 1` pair, wherever they sit in the text. The parser is written against
//! this ordering and it is reproduced as-is by [`TokenOrder::PatternPriority`], the
//! default. [`TokenOrder::Source`] is available for callers that want dict bodies
//! populated from multi-line layouts.
//!
//! Braces inside a comment (including the `{` and `}` of the `%{ %}` delimiters) never
//! produce `DictStart`/`DictEnd` tokens, in either order. Other tokens found inside a
//! comment are kept in pattern priority order and dropped in source order.
//!
//! The lexer never fails: text that matches no pattern is dropped, and overlapping matches
//! from different patterns (a `global` line is also a key-value pair) are all kept.

pub mod patterns;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use patterns::LEXER_PATTERNS;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the per-pattern passes are combined into one stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenOrder {
    /// All matches of pattern 1, then all of pattern 2, ... (source order within a pattern)
    #[default]
    PatternPriority,
    /// Matches sorted by start offset; tokens inside comments are dropped
    Source,
}

impl TokenOrder {
    pub fn name(&self) -> &'static str {
        match self {
            TokenOrder::PatternPriority => "pattern-priority",
            TokenOrder::Source => "source",
        }
    }
}

/// Tokenize with the default pattern priority ordering
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_order(source, TokenOrder::PatternPriority)
}

/// Tokenize and combine the passes according to `order`
pub fn tokenize_with_order(source: &str, order: TokenOrder) -> Vec<Token> {
    let lines = LineIndex::new(source);
    let mut tokens = Vec::new();

    for (kind, regex) in LEXER_PATTERNS.iter() {
        let before = tokens.len();
        tokens.extend(
            regex
                .find_iter(source)
                .map(|m| Token::new(*kind, m.as_str(), m.range(), lines.line_of(m.start()))),
        );
        debug!(kind = %kind, matches = tokens.len() - before, "pattern pass");
    }

    match order {
        TokenOrder::PatternPriority => {
            drop_commented(&mut tokens, TokenKind::is_dict_delimiter);
        }
        TokenOrder::Source => {
            // Stable: tokens starting at the same offset keep their priority order
            tokens.sort_by_key(|t| t.span.start);
            drop_commented(&mut tokens, |_| true);
        }
    }
    tokens
}

/// Remove tokens of the selected kinds that lie inside a comment
fn drop_commented(tokens: &mut Vec<Token>, selected: impl Fn(&TokenKind) -> bool) {
    let comments: Vec<Token> = tokens
        .iter()
        .filter(|t| t.kind.is_comment())
        .cloned()
        .collect();
    if comments.is_empty() {
        return;
    }

    let before = tokens.len();
    tokens.retain(|token| {
        token.kind.is_comment()
            || !selected(&token.kind)
            || !comments.iter().any(|comment| comment.encloses(token))
    });
    debug!(dropped = before - tokens.len(), "tokens inside comments");
}

/// Byte offset to line number lookup
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineIndex { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(i) => i + 1,
            Err(i) => i,
        }
    }
}
