//! Top-level error for a translation

use crate::formats::FormatError;
use crate::parsing::ParseError;
use thiserror::Error;

/// Anything that can stop `translate` from producing output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
