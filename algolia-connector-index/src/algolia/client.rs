//! Algolia REST client implementation.
//!
//! This module provides the concrete implementation of [`IndexHandle`]
//! over the Algolia HTTP API. It is a thin transport wrapper: no
//! retries, no consistency handling, one HTTP call per operation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::algolia::requests::{build_batch_body, build_query_body};
use crate::errors::IndexError;
use crate::interfaces::IndexHandle;
use algolia_connector_shared::{Record, SearchResponse, SearchSettings};

const APPLICATION_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";

/// Handle to one Algolia index, backed by the REST API.
///
/// # Example
///
/// ```ignore
/// let index = AlgoliaIndex::new("APP123", "secret-key", "products")?;
/// let response = index.search("widget", &SearchSettings::new()).await?;
/// println!("{} pages", response.nb_pages);
/// ```
pub struct AlgoliaIndex {
    client: reqwest::Client,
    index_url: Url,
    index_name: String,
}

impl AlgoliaIndex {
    /// Create a handle for the given application and index.
    ///
    /// Credentials are sent as default headers on every request. The
    /// endpoint is the application's DSN host.
    pub fn new(application_id: &str, api_key: &str, index_name: &str) -> Result<Self, IndexError> {
        let base = format!("https://{}-dsn.algolia.net", application_id);
        let index_url = Url::parse(&base)
            .and_then(|url| url.join(&format!("/1/indexes/{}/", index_name)))
            .map_err(|e| IndexError::connection(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            APPLICATION_ID_HEADER,
            HeaderValue::from_str(application_id)
                .map_err(|e| IndexError::connection(format!("Invalid application id: {}", e)))?,
        );
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key)
                .map_err(|e| IndexError::connection(format!("Invalid API key: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| IndexError::connection(e.to_string()))?;

        info!(index = %index_name, "Created Algolia index handle");

        Ok(Self {
            client,
            index_url,
            index_name: index_name.to_string(),
        })
    }

    /// Build the URL for an operation endpoint under this index.
    fn endpoint(&self, operation: &str) -> Result<Url, IndexError> {
        self.index_url
            .join(operation)
            .map_err(|e| IndexError::connection(e.to_string()))
    }

    /// POST a JSON body and return the response body, mapping non-2xx
    /// statuses to [`IndexError::HttpError`].
    async fn post(&self, operation: &str, body: &Value) -> Result<Value, IndexError> {
        let url = self.endpoint(operation)?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| IndexError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(
                index = %self.index_name,
                operation = %operation,
                status = %status,
                body = %error_body,
                "Index request failed"
            );
            return Err(IndexError::http(status.as_u16(), error_body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| IndexError::parse(e.to_string()))
    }
}

#[async_trait]
impl IndexHandle for AlgoliaIndex {
    async fn search(
        &self,
        query: &str,
        settings: &SearchSettings,
    ) -> Result<SearchResponse, IndexError> {
        let body = build_query_body(query, settings);
        let raw = self
            .post("query", &body)
            .await
            .map_err(|e| match e {
                e @ IndexError::HttpError { .. } => e,
                other => IndexError::query(other.to_string()),
            })?;

        let response: SearchResponse =
            serde_json::from_value(raw).map_err(|e| IndexError::parse(e.to_string()))?;

        debug!(
            index = %self.index_name,
            hits = response.hits.len(),
            nb_pages = response.nb_pages,
            "Search page received"
        );

        Ok(response)
    }

    async fn delete_by_query(
        &self,
        query: &str,
        settings: &SearchSettings,
    ) -> Result<(), IndexError> {
        let body = build_query_body(query, settings);
        self.post("deleteByQuery", &body).await.map_err(|e| match e {
            e @ IndexError::HttpError { .. } => e,
            other => IndexError::delete(other.to_string()),
        })?;

        info!(index = %self.index_name, "Deleted records by query");
        Ok(())
    }

    async fn clear_index(&self) -> Result<(), IndexError> {
        self.post("clear", &Value::Object(Default::default()))
            .await
            .map_err(|e| match e {
                e @ IndexError::HttpError { .. } => e,
                other => IndexError::clear(other.to_string()),
            })?;

        info!(index = %self.index_name, "Cleared index");
        Ok(())
    }

    async fn save_objects(&self, records: &[Record]) -> Result<(), IndexError> {
        if records.is_empty() {
            return Ok(());
        }

        let body = build_batch_body(records);
        self.post("batch", &body).await.map_err(|e| match e {
            e @ IndexError::HttpError { .. } => e,
            other => IndexError::save(other.to_string()),
        })?;

        debug!(index = %self.index_name, count = records.len(), "Saved batch");
        Ok(())
    }
}
