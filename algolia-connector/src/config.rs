//! Connector configuration supplied by the host platform.

use serde::Deserialize;

use crate::errors::ConnectorError;
use algolia_connector_shared::SearchSettings;

fn default_search_settings() -> String {
    "{}".to_string()
}

/// Connector configuration, deserialized from the host's JSON config.
///
/// `search_settings` stays a raw JSON string here (that is how the host
/// hands it over); [`ConnectorConfig::base_search_settings`] parses it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
    /// Algolia application id.
    pub application_id: String,
    /// Algolia API key.
    pub api_key: String,
    /// Name of the target index.
    pub index: String,
    /// Query text applied to every search; empty matches everything.
    #[serde(default)]
    pub search_query: String,
    /// User-supplied search settings, as a JSON object string.
    #[serde(default = "default_search_settings")]
    pub search_settings: String,
    /// Number of records per write batch.
    pub batch_size: usize,
    /// Record size cap in characters; `0` disables truncation.
    pub payload_max_size: usize,
}

impl ConnectorConfig {
    /// Parse the host's JSON config.
    pub fn from_json(raw: &str) -> Result<Self, ConnectorError> {
        serde_json::from_str(raw)
            .map_err(|e| ConnectorError::config(format!("Invalid connector config: {}", e)))
    }

    /// Parse the user-supplied search settings string.
    pub fn base_search_settings(&self) -> Result<SearchSettings, ConnectorError> {
        if self.search_settings.trim().is_empty() {
            return Ok(SearchSettings::new());
        }
        serde_json::from_str(&self.search_settings).map_err(|e| {
            ConnectorError::config(format!(
                "Invalid searchSettings '{}': {}",
                self.search_settings, e
            ))
        })
    }
}
