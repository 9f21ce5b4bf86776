//! The structured URL record and its lifecycle operations.

use crate::error::UrlError;

/// One parsed or to-be-composed URL.
///
/// Every text field is independently owned and optional. A freshly created
/// (or [`reset`](UrlRecord::reset)) record has every field absent and the
/// port zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRecord {
    /// Protocol identifier (e.g. "http").
    pub scheme: Option<String>,
    /// Authentication username.
    pub user: Option<String>,
    /// Authentication password.
    pub pass: Option<String>,
    /// Hostname or address literal.
    pub host: Option<String>,
    /// Port number; 0 means not specified. Out-of-range values can be
    /// carried but are treated as not specified when recomposing.
    pub port: u32,
    /// Path component, beginning with `/` when present.
    pub path: Option<String>,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
    /// Raw fragment, without the leading `#`.
    pub frag: Option<String>,
    /// The original or most recently recomposed full URL string.
    pub raw: Option<String>,
}

impl UrlRecord {
    /// Create an empty record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every owned field and return the record to its initial
    /// state.
    ///
    /// Never fails; calling it on an already-empty record is a no-op.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Duplicate every field of `src` into this record.
    ///
    /// Each text field is cloned only if present; absent fields stay
    /// absent. The previous contents of this record are dropped. Afterwards
    /// the two records share no storage.
    pub fn copy_from(&mut self, src: &UrlRecord) {
        self.scheme = src.scheme.clone();
        self.user = src.user.clone();
        self.pass = src.pass.clone();
        self.host = src.host.clone();
        self.port = src.port;
        self.path = src.path.clone();
        self.query = src.query.clone();
        self.frag = src.frag.clone();
        self.raw = src.raw.clone();
    }

    /// Rebuild the canonical raw string from the structured fields, in the
    /// fixed order `scheme://host[:port][path][?query]`.
    ///
    /// The port is rendered only when in `1..=65535`, the query only when
    /// present and non-empty, and absent fields render as empty segments.
    /// User, password and fragment are not part of the recomposed form.
    ///
    /// On success the new string is also stored into `raw` and returned;
    /// on failure every field, `raw` included, is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamurl::UrlRecord;
    ///
    /// let mut record = UrlRecord {
    ///     scheme: Some("http".to_string()),
    ///     host: Some("example.com".to_string()),
    ///     path: Some("/x".to_string()),
    ///     query: Some("".to_string()),
    ///     ..UrlRecord::new()
    /// };
    ///
    /// assert_eq!(record.recompose().unwrap(), "http://example.com/x");
    /// ```
    pub fn recompose(&mut self) -> Result<String, UrlError> {
        let scheme = self.scheme.as_deref().unwrap_or("");
        let host = self.host.as_deref().unwrap_or("");
        let path = self.path.as_deref().unwrap_or("");
        let query = self.query.as_deref().unwrap_or("");

        // Upper bound on the output: every component plus room for the
        // "://", ":65535" and "?" separators.
        let len = scheme.len() + host.len() + path.len() + query.len() + 16;
        let mut raw = String::new();
        raw.try_reserve_exact(len)?;

        raw.push_str(scheme);
        if !scheme.is_empty() {
            raw.push_str("://");
        }
        raw.push_str(host);
        if (1..=65535).contains(&self.port) {
            raw.push_str(&format!(":{}", self.port));
        }
        raw.push_str(path);
        if !query.is_empty() {
            raw.push('?');
            raw.push_str(query);
        }

        self.raw = Some(raw.clone());
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> UrlRecord {
        UrlRecord {
            scheme: Some("http".to_string()),
            user: Some("alice".to_string()),
            pass: Some("secret".to_string()),
            host: Some("example.com".to_string()),
            port: 8080,
            path: Some("/videos/stream.ts".to_string()),
            query: Some("token=abc".to_string()),
            frag: Some("t=10".to_string()),
            raw: Some("http://example.com/".to_string()),
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut record = populated();
        record.reset();
        assert_eq!(record, UrlRecord::new());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut record = UrlRecord::new();
        record.reset();
        record.reset();
        assert_eq!(record, UrlRecord::new());
    }

    #[test]
    fn test_copy_from_tolerates_absent_fields() {
        let src = UrlRecord {
            scheme: Some("http".to_string()),
            host: Some("example.com".to_string()),
            ..UrlRecord::new()
        };

        let mut dst = populated();
        dst.copy_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.user, None);
        assert_eq!(dst.port, 0);
    }

    #[test]
    fn test_recompose_renders_port_in_range() {
        for port in [1, 80, 65535] {
            let mut record = populated();
            record.port = port;
            let raw = record.recompose().unwrap();
            assert!(
                raw.contains(&format!(":{}", port)),
                "port {} missing from {}",
                port,
                raw
            );
        }
    }

    #[test]
    fn test_recompose_omits_port_out_of_range() {
        for port in [0, 65536, 100_000] {
            let mut record = populated();
            record.port = port;
            let raw = record.recompose().unwrap();
            assert_eq!(raw, "http://example.com/videos/stream.ts?token=abc");
        }
    }

    #[test]
    fn test_recompose_no_scheme_no_separator() {
        let mut record = UrlRecord {
            host: Some("example.com".to_string()),
            ..UrlRecord::new()
        };
        assert_eq!(record.recompose().unwrap(), "example.com");
    }

    #[test]
    fn test_recompose_stores_raw() {
        let mut record = populated();
        let raw = record.recompose().unwrap();
        assert_eq!(record.raw.as_deref(), Some(raw.as_str()));
    }
}
