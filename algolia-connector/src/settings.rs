//! Search-settings merge helpers.
//!
//! Runtime-computed entries (highlighting, pagination, facet filters)
//! are layered onto the user-supplied base settings before each request.

use serde_json::{json, Value};

use algolia_connector_shared::SearchSettings;

/// Settings key carrying facet filters.
pub const FACET_FILTERS_KEY: &str = "facetFilters";

/// Force an empty highlight-attribute list so the index attaches no
/// highlight metadata to hits.
pub fn disable_highlights(settings: &mut SearchSettings) {
    settings.insert("attributesToHighlight".to_string(), json!([]));
}

/// Retrieve no record attributes; used for facet-only requests.
pub fn retrieve_no_attributes(settings: &mut SearchSettings) {
    settings.insert("attributesToRetrieve".to_string(), json!([]));
}

/// Request facet counts for the given facet names.
pub fn request_facets(settings: &mut SearchSettings, facets: &[&str]) {
    settings.insert("facets".to_string(), json!(facets));
}

/// Cap the page size.
pub fn set_hits_per_page(settings: &mut SearchSettings, hits_per_page: i64) {
    settings.insert("hitsPerPage".to_string(), json!(hits_per_page));
}

/// Merge partition facet filters into the settings.
///
/// The merge is shape-dependent: when the existing `facetFilters` entry
/// is a plain string it is kept and the new filters are comma-appended
/// to it; any other shape (including an existing list) is replaced with
/// the computed filter list. The asymmetry is intentional and matches
/// the connector's historical behavior.
pub fn apply_facet_filters(settings: &mut SearchSettings, filters: &[String]) {
    let merged = match settings.get(FACET_FILTERS_KEY) {
        Some(Value::String(existing)) => {
            Value::String(format!("{},{}", existing, filters.join(",")))
        }
        _ => json!(filters),
    };
    settings.insert(FACET_FILTERS_KEY.to_string(), merged);
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolia_connector_shared::SearchSettings;

    fn filters() -> Vec<String> {
        vec!["region:eu".to_string(), "year:2024".to_string()]
    }

    #[test]
    fn test_filters_set_as_list_when_absent() {
        let mut settings = SearchSettings::new();
        apply_facet_filters(&mut settings, &filters());
        assert_eq!(
            settings.get(FACET_FILTERS_KEY),
            Some(&json!(["region:eu", "year:2024"]))
        );
    }

    #[test]
    fn test_filters_comma_appended_to_string() {
        let mut settings = SearchSettings::new();
        settings.insert(FACET_FILTERS_KEY.to_string(), json!("color:red"));
        apply_facet_filters(&mut settings, &filters());
        assert_eq!(
            settings.get(FACET_FILTERS_KEY),
            Some(&json!("color:red,region:eu,year:2024"))
        );
    }

    #[test]
    fn test_existing_list_replaced() {
        let mut settings = SearchSettings::new();
        settings.insert(FACET_FILTERS_KEY.to_string(), json!(["color:red"]));
        apply_facet_filters(&mut settings, &filters());
        assert_eq!(
            settings.get(FACET_FILTERS_KEY),
            Some(&json!(["region:eu", "year:2024"]))
        );
    }

    #[test]
    fn test_highlights_disabled() {
        let mut settings = SearchSettings::new();
        disable_highlights(&mut settings);
        assert_eq!(settings.get("attributesToHighlight"), Some(&json!([])));
    }
}
