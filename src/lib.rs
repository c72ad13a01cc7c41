//! # conflang
//!
//! A translator from the conflang configuration language to XML.
//!
//! ```text
//! %{ service settings %}
//! global port = 8080;
//! #(alpha, beta)
//! ?[port]
//! ```
//!
//! becomes
//!
//! ```text
//! <config><array><value>alpha</value><value>beta</value></array><global name="port">8080</global><constant_eval name="port">8080</constant_eval></config>
//! ```
//!
//! Layout
//!
//! src/
//!   ├── lexing       Full-text pattern passes producing the token stream
//!   ├── parsing      Cursor parser and constant table
//!   ├── ast          Output tree
//!   ├── formats      xml / json / yaml serializers and their registry
//!   ├── transforms   Composable stages and the pre-built pipelines
//!   ├── translator   Entry points
//!   ├── config       Layered TOML configuration
//!   └── logging      tracing subscriber setup for binaries
//!
//! Note the order of the output above: the lexer runs one pattern at a time over the whole
//! source, so arrays are emitted before globals regardless of where they appear. See
//! [`lexing`] for the details.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod logging;
pub mod parsing;
pub mod transforms;
pub mod translator;

pub use ast::{DictItem, Document, Node};
pub use error::TranslateError;
pub use lexing::{tokenize, Token, TokenKind, TokenOrder};
pub use parsing::{parse, ParseError};
pub use translator::{translate, translate_document, Translator, TranslatorOptions};
