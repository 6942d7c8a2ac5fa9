//! Lookup configuration.
//!
//! The Getty service is reachable through more than one host (the upstream
//! endpoint lacks TLS, so deployments sometimes route through a proxy), and
//! the display-oriented URI differs between deployments as well. Both are
//! therefore configuration values rather than hardcoded constants; the
//! defaults target the canonical public endpoint.

use std::time::Duration;

use reqwest::Url;

/// Base endpoint for the Getty SPARQL service.
const DEFAULT_ENDPOINT: &str = "http://vocab.getty.edu/sparql.json";

/// Prefix of the canonical subject URIs returned by the service.
const DEFAULT_CANONICAL_PREFIX: &str = "http://vocab.getty.edu";

/// Prefix substituted into `uri_for_display`.
const DEFAULT_DISPLAY_PREFIX: &str = "https://vocab.getty.edu";

/// Default time allowed for the HTTP call before the lookup rejects.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for Getty vocabulary lookups.
///
/// Values are chosen once when the client is constructed and never mutated
/// afterwards. The [`Default`] implementation targets the public
/// `vocab.getty.edu` endpoint with a 10 second timeout.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// SPARQL endpoint URL; the encoded query is appended as the
    /// `query=` parameter. Parsed as a [`Url`], so a malformed endpoint
    /// is rejected where the configuration is built, not at lookup time.
    pub endpoint: Url,

    /// Prefix of canonical subject URIs, replaced by `display_prefix`
    /// when deriving a record's `uri_for_display`.
    pub canonical_prefix: String,

    /// Replacement prefix for display-oriented URIs.
    pub display_prefix: String,

    /// Time allowed for the HTTP call before the lookup fails with
    /// [`LookupError::Timeout`](crate::LookupError::Timeout).
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_ENDPOINT is a compile-time constant; parsing it
            // cannot fail.
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            canonical_prefix: DEFAULT_CANONICAL_PREFIX.to_string(),
            display_prefix: DEFAULT_DISPLAY_PREFIX.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LookupConfig {
    /// Rewrite a canonical subject URI into its display-oriented form.
    ///
    /// Replaces a leading `canonical_prefix` with `display_prefix`; a URI
    /// that does not start with the canonical prefix passes through
    /// unchanged.
    pub fn uri_for_display(&self, uri: &str) -> String {
        match uri.strip_prefix(&self.canonical_prefix) {
            Some(rest) => format!("{}{}", self.display_prefix, rest),
            None => uri.to_string(),
        }
    }
}
