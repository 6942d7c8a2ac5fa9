//! The Getty lookup client.
//!
//! Wraps a `reqwest::Client` and composes the three pipeline steps per
//! call: build the query URI, fetch with a timeout, map the bindings.
//! Every failure propagates unchanged to the caller; there is no retry,
//! caching, or fallback here.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Response, Url};

use crate::config::LookupConfig;
use crate::error::{LookupError, LookupResult};
use crate::query::{self, Vocabulary};
use crate::record::{self, LookupRecord, SparqlResult};

const USER_AGENT: &str = "getty-lookup/0.1.0 (https://github.com/oxur/getty-lookup)";

/// Race a future against a deadline; whichever settles first wins.
///
/// When the deadline fires first the future is dropped, so a late result
/// can never surface after the call has already failed with `Timeout`.
async fn with_deadline<F: Future>(future: F, deadline: Duration) -> LookupResult<F::Output> {
    tokio::time::timeout(deadline, future)
        .await
        .map_err(|_| LookupError::Timeout)
}

/// Perform an HTTP GET that is guaranteed to settle within `timeout`.
///
/// The remote SPARQL service can stall indefinitely on certain malformed
/// queries or network partitions; racing the request against a timer
/// bounds every call. Transport-level failures that occur before the
/// timer fires propagate as [`LookupError::Request`].
pub async fn fetch_with_timeout(
    http: &Client,
    url: Url,
    timeout: Duration,
) -> LookupResult<Response> {
    Ok(with_deadline(http.get(url).send(), timeout).await??)
}

/// Lookup client for the Getty ULAN and TGN vocabularies.
///
/// Holds a pre-configured HTTP client and a [`LookupConfig`]; both are
/// immutable after construction, so a single client can serve concurrent
/// lookups without interference.
#[derive(Debug, Clone)]
pub struct GettyClient {
    http: Client,
    config: LookupConfig,
}

impl GettyClient {
    /// Create a client against the default public endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> LookupResult<Self> {
        Self::with_config(LookupConfig::default())
    }

    /// Create a client with a custom endpoint, display rewrite, or timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: LookupConfig) -> LookupResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(LookupError::from)?;
        Ok(Self::from_parts(http, config))
    }

    /// Create a client from an externally built `reqwest::Client`.
    ///
    /// Transport options (headers, proxies, TLS settings) configured on
    /// `http` pass through uninspected.
    pub fn from_parts(http: Client, config: LookupConfig) -> Self {
        Self { http, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Search ULAN for person candidates matching `query_string`.
    ///
    /// Returns between zero and five records in server order.
    pub async fn find_person(&self, query_string: &str) -> LookupResult<Vec<LookupRecord>> {
        self.call(query_string, Vocabulary::Person).await
    }

    /// Search TGN for place candidates matching `query_string`.
    ///
    /// Returns between zero and five records in server order.
    pub async fn find_place(&self, query_string: &str) -> LookupResult<Vec<LookupRecord>> {
        self.call(query_string, Vocabulary::Place).await
    }

    /// The exact URI [`find_person`](Self::find_person) would request.
    pub fn person_lookup_uri(&self, query_string: &str) -> String {
        query::lookup_uri(query_string, Vocabulary::Person, &self.config)
    }

    /// The exact URI [`find_place`](Self::find_place) would request.
    pub fn place_lookup_uri(&self, query_string: &str) -> String {
        query::lookup_uri(query_string, Vocabulary::Place, &self.config)
    }

    async fn call(
        &self,
        query_string: &str,
        vocab: Vocabulary,
    ) -> LookupResult<Vec<LookupRecord>> {
        let url = query::lookup_url(query_string, vocab, &self.config);
        log::debug!("querying {} for {} \"{}\"", self.config.endpoint, vocab, query_string);

        let response = fetch_with_timeout(&self.http, url, self.config.timeout).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Http {
                status: status.as_u16(),
            });
        }

        let result: SparqlResult = response.json().await.map_err(|e| LookupError::Parse {
            message: e.to_string(),
        })?;

        Ok(record::map_bindings(result, query_string, vocab, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_succeeds() {
        let client = GettyClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_debug_format() {
        let client = GettyClient::new().unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("GettyClient"));
        assert!(debug.contains("LookupConfig"));
    }

    #[test]
    fn test_client_default_timeout_is_ten_seconds() {
        let client = GettyClient::new().unwrap();
        assert_eq!(client.config().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_uri_builders_match_free_functions() {
        let client = GettyClient::new().unwrap();
        assert_eq!(
            client.person_lookup_uri("jones"),
            query::person_lookup_uri("jones")
        );
        assert_eq!(
            client.place_lookup_uri("jones"),
            query::place_lookup_uri("jones")
        );
    }

    #[tokio::test]
    async fn test_deadline_rejects_never_settling_future() {
        let outcome =
            with_deadline(std::future::pending::<()>(), Duration::from_millis(10)).await;
        assert!(matches!(outcome, Err(LookupError::Timeout)));
    }

    #[tokio::test]
    async fn test_deadline_lets_ready_future_win() {
        let outcome = with_deadline(async { 42 }, Duration::from_secs(10)).await;
        assert_eq!(outcome.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_deadline_drops_slow_future() {
        // The slow side is dropped when the timer wins; its result can
        // never settle the already-failed call.
        let slow = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            42
        };
        let outcome = with_deadline(slow, Duration::from_millis(10)).await;
        assert!(matches!(outcome, Err(LookupError::Timeout)));
    }

    #[tokio::test]
    async fn test_fetch_with_timeout_transport_failure_propagates() {
        // Nothing listens on this port; the connection error must surface
        // as a Request error, not a Timeout.
        let url = Url::parse("http://127.0.0.1:1/sparql.json").unwrap();
        let client = Client::new();
        let outcome = fetch_with_timeout(&client, url, Duration::from_secs(10)).await;
        assert!(matches!(outcome, Err(LookupError::Request(_))));
    }
}
