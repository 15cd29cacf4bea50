//! Request body builders for the Algolia REST API.

use serde_json::{json, Value};

use algolia_connector_shared::{Record, SearchSettings};

/// Build the body for a `query` or `deleteByQuery` request: the search
/// settings with the query text merged in.
pub(crate) fn build_query_body(query: &str, settings: &SearchSettings) -> Value {
    let mut body = settings.clone();
    body.insert("query".to_string(), json!(query));
    Value::Object(body)
}

/// Build the body for a `batch` request: one `updateObject` action per
/// record. `updateObject` is the create-or-replace action, which gives
/// the batch upsert semantics the writer relies on.
pub(crate) fn build_batch_body(records: &[Record]) -> Value {
    let requests: Vec<Value> = records
        .iter()
        .map(|record| {
            json!({
                "action": "updateObject",
                "body": record,
            })
        })
        .collect();

    json!({ "requests": requests })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn test_query_body_merges_settings() {
        let mut settings = Map::new();
        settings.insert("hitsPerPage".to_string(), json!(50));
        settings.insert("facetFilters".to_string(), json!(["region:eu"]));

        let body = build_query_body("widgets", &settings);

        assert_eq!(body["query"], json!("widgets"));
        assert_eq!(body["hitsPerPage"], json!(50));
        assert_eq!(body["facetFilters"], json!(["region:eu"]));
    }

    #[test]
    fn test_query_body_does_not_mutate_settings() {
        let settings = Map::new();
        let _ = build_query_body("q", &settings);
        assert!(settings.is_empty());
    }

    #[test]
    fn test_batch_body_wraps_each_record() {
        let mut record = Map::new();
        record.insert("objectID".to_string(), json!("7"));
        record.insert("name".to_string(), json!("widget"));

        let body = build_batch_body(&[record.clone(), record]);

        let requests = body["requests"].as_array().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0]["action"], json!("updateObject"));
        assert_eq!(requests[0]["body"]["objectID"], json!("7"));
    }
}
