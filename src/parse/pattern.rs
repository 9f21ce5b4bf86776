//! Fallback parsing backend: a single compiled pattern.

use std::sync::Mutex;

use regex::Regex;

use crate::error::UrlError;
use crate::parse::UrlParser;
use crate::record::UrlRecord;

/// Constrained URL grammar:
/// `scheme://[user[:pass]@]host[:port][/path][?query][#frag]`.
///
/// User and password are limited to a conservative character class, the
/// host to letters, digits, `_`, `.` and `-`. IPv6 bracket literals do not
/// match.
const URL_PATTERN: &str = concat!(
    r"(?i)^(?P<scheme>[a-z]+)://",
    r"(?:(?P<user>[a-z0-9_.!£$%^&-]+)(?::(?P<pass>[a-z0-9_.!£$%^&-]+))?@|@)?",
    r"(?P<host>[a-z0-9_.-]+)",
    r"(?::(?P<port>[0-9]+))?",
    r"(?P<path>/[^?#]*)?",
    r"(?:\?(?P<query>[^#]*))?",
    r"(?:#(?P<frag>.*))?$",
);

/// Parser backed by one lazily compiled, case-insensitive pattern.
///
/// The compiled pattern is process-wide shared state owned by this object:
/// it is built once, on first parse, under the mutex guarding it, and
/// released again by [`UrlParser::teardown`]. A parse after teardown
/// recompiles it.
///
/// The pattern is a fixed constant, so a compilation failure indicates a
/// build defect rather than bad input data: it is logged at error level and
/// aborts the process.
#[derive(Debug, Default)]
pub struct PatternParser {
    pattern: Mutex<Option<Regex>>,
}

impl PatternParser {
    /// Create the fallback backend with the pattern not yet compiled.
    pub fn new() -> Self {
        Self {
            pattern: Mutex::new(None),
        }
    }

    /// Hand out the compiled pattern, compiling it first if this is the
    /// first parse since startup or teardown.
    fn pattern(&self) -> Regex {
        let mut guard = self.pattern.lock().expect("URL pattern lock poisoned");
        guard
            .get_or_insert_with(|| {
                Regex::new(URL_PATTERN).unwrap_or_else(|err| {
                    log::error!("failed to compile URL pattern: {}", err);
                    panic!("failed to compile URL pattern: {}", err);
                })
            })
            .clone()
    }
}

impl UrlParser for PatternParser {
    fn parse(&self, raw: &str, record: &mut UrlRecord) -> Result<(), UrlError> {
        if raw.is_empty() {
            return Err(UrlError::EmptyInput);
        }

        record.reset();

        let caps = match self.pattern().captures(raw) {
            Some(caps) => caps,
            None => {
                log::debug!("URL does not match the fallback grammar: {:?}", raw);
                return Err(UrlError::Malformed(
                    "input does not match the URL pattern".to_string(),
                ));
            }
        };

        record.scheme = caps.name("scheme").map(|m| m.as_str().to_string());
        record.user = caps.name("user").map(|m| m.as_str().to_string());
        record.pass = caps.name("pass").map(|m| m.as_str().to_string());
        record.host = caps.name("host").map(|m| m.as_str().to_string());
        record.path = caps.name("path").map(|m| m.as_str().to_string());
        record.query = caps.name("query").map(|m| m.as_str().to_string());
        record.frag = caps.name("frag").map(|m| m.as_str().to_string());
        // Empty or overflowing digit runs mean "not specified".
        record.port = caps
            .name("port")
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0);
        record.raw = Some(raw.to_string());

        Ok(())
    }

    fn teardown(&self) {
        *self.pattern.lock().expect("URL pattern lock poisoned") = None;
    }
}
