//! # getty-lookup
//!
//! An async lookup client for the Getty Vocabulary Program's linked-data
//! SPARQL service. Given a free-text query it searches the ULAN (persons)
//! or TGN (places) controlled vocabulary and returns up to five candidate
//! records suitable for autocomplete and entity-lookup UIs.
//!
//! Each lookup is a fixed three-step pipeline: build the percent-encoded
//! SPARQL query URI, perform the HTTP GET raced against a timeout, and map
//! the SPARQL result bindings into flat [`LookupRecord`]s.
//!
//! ```no_run
//! use getty_lookup::GettyClient;
//!
//! # async fn run() -> getty_lookup::LookupResult<()> {
//! let client = GettyClient::new()?;
//! let candidates = client.find_person("jones").await?;
//! for record in &candidates {
//!     println!("{} ({})", record.name.as_deref().unwrap_or("?"), record.uri);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The URI builders in [`query`] are pure and independently callable, so
//! tests and callers can construct request URIs without touching the
//! network. That separation is the seam used to intercept the HTTP call
//! in tests.
//!
//! The client performs no caching, no retries, and no rate limiting; every
//! failure propagates to the caller as a [`LookupError`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod record;

pub use client::{fetch_with_timeout, GettyClient};
pub use config::LookupConfig;
pub use error::{LookupError, LookupResult};
pub use query::{lookup_uri, person_lookup_uri, place_lookup_uri, Vocabulary};
pub use record::{LookupRecord, SparqlResult};
