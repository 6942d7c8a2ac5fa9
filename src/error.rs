//! Error types for vocabulary lookups.

use thiserror::Error;

/// Errors that can occur during a Getty vocabulary lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The timeout fired before the HTTP call settled. The in-flight
    /// request is dropped; a late-arriving response is never observed.
    #[error("call to Getty timed out")]
    Timeout,

    /// The response arrived with a non-success status code. The body is
    /// not consulted in this case.
    #[error("call to Getty failed with HTTP status {status}")]
    Http { status: u16 },

    /// The response body could not be parsed as a SPARQL JSON result.
    #[error("unable to parse Getty response: {message}")]
    Parse { message: String },

    /// A transport-level error propagated from `reqwest` (DNS failure,
    /// connection reset, and so on).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl LookupError {
    /// Returns `true` when the error is transient and the lookup may
    /// succeed if retried by the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Request(_))
    }
}

/// Convenience alias for lookup results.
pub type LookupResult<T> = std::result::Result<T, LookupError>;
