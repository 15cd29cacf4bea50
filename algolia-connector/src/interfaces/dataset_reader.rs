//! Dataset reader trait definition.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::errors::ConnectorError;
use algolia_connector_shared::{DatasetPartitioning, DatasetSchema, Record};

/// Lazy, finite stream of records produced by a read.
pub type RowStream = BoxStream<'static, Result<Record, ConnectorError>>;

/// Read-side capability the host drives.
#[async_trait]
pub trait DatasetReader: Send + Sync {
    /// The dataset schema, or `None` when the source is schemaless and
    /// the host should infer it.
    fn read_schema(&self) -> Option<DatasetSchema>;

    /// Produce the dataset's records as a lazy stream.
    ///
    /// `partitioning` and `partition_id` together scope the read to one
    /// partition; `records_limit >= 0` caps the result size (`-1` means
    /// unlimited). The schema argument is unused by schemaless sources.
    fn generate_rows(
        &self,
        schema: Option<&DatasetSchema>,
        partitioning: Option<&DatasetPartitioning>,
        partition_id: Option<&str>,
        records_limit: i64,
    ) -> Result<RowStream, ConnectorError>;

    /// Enumerate the partition identifiers present in the source.
    async fn list_partitions(
        &self,
        partitioning: &DatasetPartitioning,
    ) -> Result<Vec<String>, ConnectorError>;
}
