//! Lexical Pattern Definitions
//!
//! Every construct of the language is described by one regex. The lexer runs them one at a
//! time over the whole source, in declaration order:
//!
//! 1. array - `#( ... )`, contents may span lines
//! 2. multiline_comment - `%{ ... %}`, may span lines
//! 3. singleline_comment - `*` to the end of the line
//! 4. global - `global <identifier> = <value>;`, value runs to the first `;`
//! 5. constant_eval - `?[<identifier>]`
//! 6. dict_start - `{`
//! 7. dict_end - `}`
//! 8. key_value - `<identifier> = <rest of line>`
//! 9. number - bare integer
//!
//! The parser re-matches structural tokens against the same regexes to pull out their
//! capture groups, so the groups below are part of the contract:
//!
//! - `array`: `(?P<items>...)`
//! - `global`: `(?P<name>...)`, `(?P<value>...)`
//! - `constant_eval`: `(?P<name>...)`

use crate::lexing::tokens::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern sources, in priority order
pub const TOKEN_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::Array, r"(?s)#\((?P<items>.*?)\)"),
    (TokenKind::MultilineComment, r"(?s)%\{.*?%\}"),
    (TokenKind::SinglelineComment, r"\*.*"),
    (
        TokenKind::Global,
        r"(?s)global\s+(?P<name>[a-zA-Z][_a-zA-Z0-9]*)\s*=\s*(?P<value>.*?);",
    ),
    (
        TokenKind::ConstantEval,
        r"\?\[(?P<name>[a-zA-Z][_a-zA-Z0-9]*)\]",
    ),
    (TokenKind::DictStart, r"\{"),
    (TokenKind::DictEnd, r"\}"),
    (
        TokenKind::KeyValue,
        r"(?P<key>[a-zA-Z][_a-zA-Z0-9]*)\s*=\s*(?P<value>.*)",
    ),
    (TokenKind::Number, r"[0-9]+"),
];

/// Compiled pattern table, used by the lexer for the full-text passes
pub static LEXER_PATTERNS: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    TOKEN_PATTERNS
        .iter()
        .map(|(kind, pattern)| (*kind, compile(pattern)))
        .collect()
});

/// Anchored variants used by the parser to re-match a token's own text
pub(crate) static ARRAY_TOKEN: Lazy<Regex> = Lazy::new(|| anchored(TokenKind::Array));
pub(crate) static GLOBAL_TOKEN: Lazy<Regex> = Lazy::new(|| anchored(TokenKind::Global));
pub(crate) static CONSTANT_EVAL_TOKEN: Lazy<Regex> =
    Lazy::new(|| anchored(TokenKind::ConstantEval));

/// Look up the pattern source for a token kind
pub fn pattern_for(kind: TokenKind) -> &'static str {
    TOKEN_PATTERNS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, pattern)| *pattern)
        .unwrap_or_default()
}

fn anchored(kind: TokenKind) -> Regex {
    compile(&format!(r"\A(?:{})", pattern_for(kind)))
}

fn compile(pattern: &str) -> Regex {
    // The table is static; a bad pattern is a programming error caught by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid token pattern {pattern:?}: {e}"))
}
