//! URL parsing backends.
//!
//! Two interchangeable implementations fill a [`UrlRecord`] from a raw
//! string through the same [`UrlParser`] contract:
//! - [`FullParser`]: full RFC 3986 parsing via the `url` crate
//! - [`PatternParser`]: a constrained pattern-matching fallback
//!
//! The backend is picked once at startup from configuration via
//! [`new_parser`].

pub mod full;
pub mod pattern;

// Re-export the backend implementations
pub use full::FullParser;
pub use pattern::PatternParser;

use crate::error::UrlError;
use crate::record::UrlRecord;

/// Capability interface shared by both parsing backends.
pub trait UrlParser: Send + Sync {
    /// Parse `raw` into `record`.
    ///
    /// The record is reset first, discarding any previous contents. On
    /// failure it is left reset, never partially populated. On success
    /// `record.raw` holds an owned duplicate of the input string.
    fn parse(&self, raw: &str, record: &mut UrlRecord) -> Result<(), UrlError>;

    /// Release any process-wide parsing resource held by the backend.
    ///
    /// Safe to call any number of times, interleaved with parses; the
    /// backend remains usable afterwards.
    fn teardown(&self);
}

/// Which parsing backend to use, selected once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Full RFC 3986 parsing via the `url` crate.
    #[default]
    Full,
    /// Constrained pattern matching; no IPv6 literal support.
    Pattern,
}

/// Construct the parser for the configured backend.
pub fn new_parser(backend: Backend) -> Box<dyn UrlParser> {
    match backend {
        Backend::Full => Box::new(FullParser::new()),
        Backend::Pattern => Box::new(PatternParser::new()),
    }
}
