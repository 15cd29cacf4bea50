//! The connector facade the host instantiates.
//!
//! One [`SearchConnector`] holds the parsed configuration and a single
//! index handle for its whole lifetime; readers and writers are built
//! from it per operation.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use tracing::info;

use crate::config::ConnectorConfig;
use crate::errors::ConnectorError;
use crate::interfaces::{DatasetReader, RowStream};
use crate::partition;
use crate::reader::SearchReader;
use crate::writer::WriteBuffer;
use algolia_connector_index::{AlgoliaIndex, IndexHandle};
use algolia_connector_shared::{DatasetPartitioning, DatasetSchema};

/// Connector over one Algolia index, driven by the host through
/// [`DatasetReader`] and [`WriteBuffer`].
pub struct SearchConnector {
    config: ConnectorConfig,
    index: Arc<dyn IndexHandle>,
}

impl SearchConnector {
    /// Create a connector over an injected index handle.
    pub fn new(config: ConnectorConfig, index: Arc<dyn IndexHandle>) -> Self {
        Self { config, index }
    }

    /// Create a connector wired to the real REST backend described by
    /// the configuration.
    pub fn connect(config: ConnectorConfig) -> Result<Self, ConnectorError> {
        let index = AlgoliaIndex::new(&config.application_id, &config.api_key, &config.index)?;
        Ok(Self::new(config, Arc::new(index)))
    }

    fn reader(&self) -> Result<SearchReader, ConnectorError> {
        Ok(SearchReader::new(
            Arc::clone(&self.index),
            self.config.search_query.clone(),
            self.config.base_search_settings()?,
        ))
    }

    /// Open a write session. Destructive: clears the target index or
    /// partition before accepting rows.
    pub async fn get_writer(
        &self,
        schema: DatasetSchema,
        partitioning: Option<&DatasetPartitioning>,
        partition_id: Option<&str>,
    ) -> Result<WriteBuffer, ConnectorError> {
        WriteBuffer::open(
            Arc::clone(&self.index),
            &self.config,
            schema,
            partitioning,
            partition_id,
        )
        .await
    }
}

#[async_trait]
impl DatasetReader for SearchConnector {
    /// The index is schemaless; the host infers the schema.
    fn read_schema(&self) -> Option<DatasetSchema> {
        None
    }

    fn generate_rows(
        &self,
        _schema: Option<&DatasetSchema>,
        partitioning: Option<&DatasetPartitioning>,
        partition_id: Option<&str>,
        records_limit: i64,
    ) -> Result<RowStream, ConnectorError> {
        let filters = match (partitioning, partition_id) {
            (Some(partitioning), Some(partition_id)) => {
                Some(partition::facet_filters(partitioning, partition_id)?)
            }
            _ => None,
        };

        info!(
            partition = %partition_id.unwrap_or("<none>"),
            limit = records_limit,
            "Generating rows"
        );

        Ok(self.reader()?.read(filters, records_limit).boxed())
    }

    async fn list_partitions(
        &self,
        partitioning: &DatasetPartitioning,
    ) -> Result<Vec<String>, ConnectorError> {
        self.reader()?.list_partitions(partitioning).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::settings::FACET_FILTERS_KEY;
    use algolia_connector_index::IndexError;
    use algolia_connector_shared::{
        Dimension, Record, SearchResponse, SearchSettings,
    };

    struct MockIndex {
        responses: Mutex<VecDeque<SearchResponse>>,
        requests: Mutex<Vec<(String, SearchSettings)>>,
    }

    impl MockIndex {
        fn with_responses(responses: Vec<SearchResponse>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl IndexHandle for MockIndex {
        async fn search(
            &self,
            query: &str,
            settings: &SearchSettings,
        ) -> Result<SearchResponse, IndexError> {
            self.requests
                .lock()
                .unwrap()
                .push((query.to_string(), settings.clone()));
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(SearchResponse::empty))
        }

        async fn delete_by_query(
            &self,
            _query: &str,
            _settings: &SearchSettings,
        ) -> Result<(), IndexError> {
            Ok(())
        }

        async fn clear_index(&self) -> Result<(), IndexError> {
            Ok(())
        }

        async fn save_objects(&self, _records: &[Record]) -> Result<(), IndexError> {
            Ok(())
        }
    }

    fn config() -> ConnectorConfig {
        ConnectorConfig::from_json(
            r#"{
                "applicationId": "app123",
                "apiKey": "secret",
                "index": "products",
                "searchQuery": "widgets",
                "batchSize": 100,
                "payloadMaxSize": 0
            }"#,
        )
        .unwrap()
    }

    fn partitioning() -> DatasetPartitioning {
        DatasetPartitioning {
            dimensions: vec![Dimension {
                name: "region".to_string(),
            }],
        }
    }

    #[test]
    fn test_read_schema_is_none() {
        let connector = SearchConnector::new(config(), MockIndex::with_responses(vec![]));
        assert!(connector.read_schema().is_none());
    }

    #[tokio::test]
    async fn test_generate_rows_scopes_to_partition() {
        let index = MockIndex::with_responses(vec![SearchResponse::empty()]);
        let connector = SearchConnector::new(config(), index.clone());

        let rows = connector
            .generate_rows(None, Some(&partitioning()), Some("eu"), -1)
            .unwrap();
        let records: Vec<Record> = rows.try_collect().await.unwrap();
        assert!(records.is_empty());

        let requests = index.requests.lock().unwrap();
        assert_eq!(requests[0].0, "widgets");
        assert_eq!(
            requests[0].1.get(FACET_FILTERS_KEY),
            Some(&json!(["region:eu"]))
        );
    }

    #[test]
    fn test_generate_rows_rejects_malformed_partition_id() {
        let connector =
            SearchConnector::new(config(), MockIndex::with_responses(vec![]));

        let result = connector.generate_rows(None, Some(&partitioning()), Some("eu|extra"), -1);
        assert!(matches!(
            result,
            Err(ConnectorError::MalformedPartitionId { .. })
        ));
    }
}
