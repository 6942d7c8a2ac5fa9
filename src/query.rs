//! SPARQL query URI construction.
//!
//! Builds the fully encoded request URI for a vocabulary lookup without
//! performing any network call. The builders are exposed so that tests and
//! callers can construct the exact URI a [`GettyClient`] would request and
//! intercept it.
//!
//! The query string is inserted into the SPARQL text unescaped. Callers
//! must ensure it contains no characters that break SPARQL string syntax
//! (a double quote, for instance); the upstream contract provides no
//! injection defense and neither does this builder.
//!
//! [`GettyClient`]: crate::client::GettyClient

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::config::LookupConfig;

/// Which controlled vocabulary a lookup targets.
///
/// Serializes as the Getty scheme tag (`"ulan"` / `"tgn"`), which is also
/// the value carried in a record's `nameType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vocabulary {
    /// ULAN, the Union List of Artist Names (persons).
    #[serde(rename = "ulan")]
    Person,
    /// TGN, the Thesaurus of Geographic Names (places).
    #[serde(rename = "tgn")]
    Place,
}

impl Vocabulary {
    /// The scheme tag used in the SPARQL `skos:inScheme` filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "ulan",
            Self::Place => "tgn",
        }
    }
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the fixed SPARQL SELECT for a query string and vocabulary.
///
/// The template selects more fields than the mapper consumes (`Parents`,
/// `ScopeNote`, `Type`); the remote query contract is fixed and is kept
/// whole here. The result cap is the `LIMIT 5` baked into the template,
/// never a client-side truncation.
fn sparql_query(query_string: &str, vocab: Vocabulary) -> String {
    format!(
        r#"select ?Subject ?Term ?Parents ?Descr ?ScopeNote ?Type (coalesce(?Type1,?Type2) as ?ExtraType) {{
  ?Subject luc:term "{query_string}"; a ?typ; skos:inScheme {vocab}:.
  ?typ rdfs:subClassOf gvp:Subject; rdfs:label ?Type.
  filter (?typ != gvp:Subject)
  optional {{?Subject gvp:placeTypePreferred [gvp:prefLabelGVP [xl:literalForm ?Type1]]}}
  optional {{?Subject gvp:agentTypePreferred [gvp:prefLabelGVP [xl:literalForm ?Type2]]}}
  optional {{?Subject gvp:prefLabelGVP [xl:literalForm ?Term]}}
  optional {{?Subject gvp:parentStringAbbrev ?Parents}}
  optional {{?Subject foaf:focus/gvp:biographyPreferred/schema:description ?Descr}}
  optional {{?Subject skos:scopeNote [dct:language gvp_lang:en; rdf:value ?ScopeNote]}}}}
  LIMIT 5"#
    )
}

/// Build the full request URL for a lookup.
///
/// The SPARQL text is percent-encoded and appended as the `query=`
/// parameter on the configured endpoint. The endpoint is already a parsed
/// [`Url`], so this cannot fail.
pub fn lookup_url(query_string: &str, vocab: Vocabulary, config: &LookupConfig) -> Url {
    let sparql = sparql_query(query_string, vocab);
    let mut url = config.endpoint.clone();
    url.query_pairs_mut().append_pair("query", &sparql);
    url
}

/// Build the encoded lookup URI as a string.
pub fn lookup_uri(query_string: &str, vocab: Vocabulary, config: &LookupConfig) -> String {
    lookup_url(query_string, vocab, config).into()
}

/// Build a person (ULAN) lookup URI against the default endpoint.
pub fn person_lookup_uri(query_string: &str) -> String {
    lookup_uri(query_string, Vocabulary::Person, &LookupConfig::default())
}

/// Build a place (TGN) lookup URI against the default endpoint.
pub fn place_lookup_uri(query_string: &str) -> String {
    lookup_uri(query_string, Vocabulary::Place, &LookupConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_embed_query_string() {
        for uri in [person_lookup_uri("jones"), place_lookup_uri("jones")] {
            assert!(uri.contains("jones"));
        }
    }

    #[test]
    fn test_person_uri_targets_ulan_scheme() {
        let uri = person_lookup_uri("jones");
        assert!(uri.contains("ulan"));
        assert!(!uri.contains("tgn%3A"));
    }

    #[test]
    fn test_place_uri_targets_tgn_scheme() {
        let uri = place_lookup_uri("jones");
        assert!(uri.contains("tgn"));
    }

    #[test]
    fn test_uri_starts_with_default_endpoint() {
        let uri = person_lookup_uri("jones");
        assert!(uri.starts_with("http://vocab.getty.edu/sparql.json?query="));
    }

    #[test]
    fn test_sparql_text_is_percent_encoded() {
        let uri = person_lookup_uri("mary jones");
        assert!(!uri.contains(' '));
        assert!(!uri.contains('"'));
        // the query text survives encoding in readable form
        assert!(uri.contains("mary") && uri.contains("jones"));
    }

    #[test]
    fn test_query_template_caps_results_at_five() {
        let sparql = sparql_query("jones", Vocabulary::Person);
        assert!(sparql.contains("LIMIT 5"));
        assert!(sparql.contains(r#"luc:term "jones""#));
        assert!(sparql.contains("skos:inScheme ulan:"));
    }

    #[test]
    fn test_custom_endpoint_is_honored() {
        let config = LookupConfig {
            endpoint: Url::parse("https://getty-proxy.example.org/sparql.json").unwrap(),
            ..LookupConfig::default()
        };
        let uri = lookup_uri("jones", Vocabulary::Place, &config);
        assert!(uri.starts_with("https://getty-proxy.example.org/sparql.json?query="));
    }

    #[test]
    fn test_endpoint_query_parameters_are_preserved() {
        let config = LookupConfig {
            endpoint: Url::parse("https://getty-proxy.example.org/sparql.json?key=abc").unwrap(),
            ..LookupConfig::default()
        };
        let uri = lookup_uri("jones", Vocabulary::Person, &config);
        assert!(uri.contains("key=abc"));
        assert!(uri.contains("query="));
    }

    #[test]
    fn test_vocabulary_tags() {
        assert_eq!(Vocabulary::Person.as_str(), "ulan");
        assert_eq!(Vocabulary::Place.as_str(), "tgn");
        assert_eq!(Vocabulary::Place.to_string(), "tgn");
    }

    #[test]
    fn test_vocabulary_serializes_as_scheme_tag() {
        assert_eq!(
            serde_json::to_string(&Vocabulary::Person).unwrap(),
            "\"ulan\""
        );
        assert_eq!(serde_json::to_string(&Vocabulary::Place).unwrap(), "\"tgn\"");
    }
}
