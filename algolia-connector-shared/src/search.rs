//! Search request settings and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::Record;

/// Search settings sent alongside a query: a flat JSON object merged
/// from the user-supplied configuration and runtime-computed entries
/// (facet filters, pagination, highlighting).
pub type SearchSettings = Map<String, Value>;

/// One page of search results from the index.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// The hits on this page.
    #[serde(default)]
    pub hits: Vec<Record>,
    /// Total number of pages for the query. The index reports this on
    /// every page; absent means a single page.
    #[serde(rename = "nbPages", default = "default_nb_pages")]
    pub nb_pages: u32,
    /// Facet value counts, keyed facet name -> value -> count. Only
    /// present when the request asked for facets.
    #[serde(default)]
    pub facets: Map<String, Value>,
}

fn default_nb_pages() -> u32 {
    1
}

impl SearchResponse {
    /// An empty single-page response.
    pub fn empty() -> Self {
        Self {
            hits: Vec::new(),
            nb_pages: 1,
            facets: Map::new(),
        }
    }

    /// The distinct values reported for a facet, or `None` when the
    /// facet is absent from the response.
    pub fn facet_values(&self, facet: &str) -> Option<Vec<String>> {
        self.facets
            .get(facet)
            .and_then(Value::as_object)
            .map(|counts| counts.keys().cloned().collect())
    }
}

impl Default for SearchResponse {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_defaults() {
        let response: SearchResponse = serde_json::from_str(r#"{"hits": []}"#).unwrap();
        assert_eq!(response.nb_pages, 1);
        assert!(response.hits.is_empty());
        assert!(response.facets.is_empty());
    }

    #[test]
    fn test_facet_values() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"hits": [], "nbPages": 2, "facets": {"region": {"eu": 10, "us": 4}}}"#,
        )
        .unwrap();

        assert_eq!(response.nb_pages, 2);
        let values = response.facet_values("region").unwrap();
        assert_eq!(values, vec!["eu".to_string(), "us".to_string()]);
        assert!(response.facet_values("year").is_none());
    }
}
