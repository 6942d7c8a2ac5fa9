//! SPARQL result mapping.
//!
//! Deserializes the Getty SPARQL JSON response and flattens each result
//! binding into a [`LookupRecord`]. A binding is a mapping from variable
//! name to a `{"value": …}` wrapper; per SPARQL `OPTIONAL` semantics the
//! `Term` and `Descr` variables may be absent from individual bindings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::LookupConfig;
use crate::query::Vocabulary;

/// Fixed tag identifying the source system on every record.
pub const REPOSITORY: &str = "getty";

/// Placeholder used when a binding carries no `Descr` value.
pub const NO_DESCRIPTION: &str = "No description available";

// ---------------------------------------------------------------------------
// SPARQL response types
// ---------------------------------------------------------------------------

/// Top-level shape of a SPARQL JSON query response.
#[derive(Debug, Deserialize)]
pub struct SparqlResult {
    pub results: SparqlBindings,
}

/// The ordered result rows of a SPARQL response.
#[derive(Debug, Deserialize)]
pub struct SparqlBindings {
    pub bindings: Vec<HashMap<String, SparqlValue>>,
}

/// A single bound value inside a result row.
#[derive(Debug, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

// ---------------------------------------------------------------------------
// Output records
// ---------------------------------------------------------------------------

/// One normalized lookup candidate.
///
/// Serializes with the camelCase wire names (`nameType`, `uriForDisplay`,
/// `originalQueryString`) that downstream autocomplete UIs expect.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRecord {
    /// The vocabulary this record was looked up in.
    pub name_type: Vocabulary,

    /// Canonical subject URI, treated as an opaque identifier. Always
    /// equal to `uri`.
    pub id: String,

    /// Canonical subject URI as returned by the service.
    pub uri: String,

    /// Display-oriented URI, derived from `uri` by the configured prefix
    /// rewrite ([`LookupConfig::uri_for_display`]).
    pub uri_for_display: String,

    /// Preferred label term; `None` when the service omits it.
    pub name: Option<String>,

    /// Always [`REPOSITORY`].
    pub repository: String,

    /// Echo of the query string that produced this record.
    pub original_query_string: String,

    /// Free-text description, or [`NO_DESCRIPTION`] when absent.
    pub description: String,
}

/// Flatten a parsed SPARQL response into lookup records.
///
/// Output order matches the server-determined binding order. A binding
/// without a `Subject` value has no identity to report and is skipped;
/// missing `Term` and `Descr` values fall back per the field rules above.
pub fn map_bindings(
    result: SparqlResult,
    original_query: &str,
    vocab: Vocabulary,
    config: &LookupConfig,
) -> Vec<LookupRecord> {
    result
        .results
        .bindings
        .into_iter()
        .filter_map(|mut binding| {
            let uri = binding.remove("Subject")?.value;
            let name = binding.remove("Term").map(|term| term.value);
            let description = binding
                .remove("Descr")
                .map_or_else(|| NO_DESCRIPTION.to_string(), |descr| descr.value);

            Some(LookupRecord {
                name_type: vocab,
                id: uri.clone(),
                uri_for_display: config.uri_for_display(&uri),
                uri,
                name,
                repository: REPOSITORY.to_string(),
                original_query_string: original_query.to_string(),
                description,
            })
        })
        .collect()
}
