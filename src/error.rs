//! Error types for URL parsing and recomposition.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while parsing or recomposing a URL record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// An empty string was handed to the parser.
    #[error("empty URL string")]
    EmptyInput,

    /// The input does not conform to the active backend's URL grammar.
    #[error("malformed URL: {0}")]
    Malformed(String),

    /// The output buffer for a recomposed URL could not be allocated.
    #[error("out of memory while recomposing URL")]
    OutOfMemory,
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::Malformed(err.to_string())
    }
}

impl From<TryReserveError> for UrlError {
    fn from(_: TryReserveError) -> Self {
        UrlError::OutOfMemory
    }
}
