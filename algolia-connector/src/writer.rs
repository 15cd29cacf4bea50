//! Write buffer: coerced, batched writes into the index.
//!
//! Opening the buffer clears its target (the whole index, or one
//! partition via delete-by-query) before any write. The buffer then
//! assumes exclusive write access until `close`; exclusivity is a
//! caller-enforced convention, nothing here locks.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use crate::config::ConnectorConfig;
use crate::errors::ConnectorError;
use crate::interfaces::DatasetWriter;
use crate::partition;
use crate::settings;
use algolia_connector_index::IndexHandle;
use algolia_connector_shared::{
    Column, ColumnType, DatasetPartitioning, DatasetSchema, Record, ID_COLUMN, OBJECT_ID_FIELD,
};

/// Marker appended to truncated values.
const TRUNCATION_MARKER: &str = "(...)";

/// Headroom subtracted from `payload_max_size` when deciding whether a
/// value needs truncation; leaves room for the rest of the record.
const TRUNCATION_HEADROOM: usize = 2000;

/// A recovered per-value problem: failed coercion or truncation.
///
/// Warnings never fail the write; the raw value is kept (or truncated)
/// and processing continues. They are logged and collected so the
/// caller can report them.
#[derive(Debug, Clone)]
pub struct CoercionWarning {
    /// Column the value belonged to.
    pub column: String,
    /// What happened.
    pub message: String,
}

/// Buffered writer into the index.
///
/// Rows are coerced per the dataset schema, accumulated, and flushed as
/// one batch upsert whenever the buffer reaches `batch_size`. Batch
/// failures propagate; there is no partial-batch retry.
pub struct WriteBuffer {
    index: Arc<dyn IndexHandle>,
    schema: DatasetSchema,
    /// Decoded (dimension, value) pairs when the write session is
    /// scoped to one partition.
    partition: Option<Vec<(String, String)>>,
    batch_size: usize,
    payload_max_size: usize,
    buffer: Vec<Record>,
    warnings: Vec<CoercionWarning>,
}

impl WriteBuffer {
    /// Open a write session, clearing the target first.
    ///
    /// Partition-scoped sessions delete by a match-all query restricted
    /// to the partition's facet filters; unpartitioned sessions clear
    /// the whole index. This is destructive.
    pub async fn open(
        index: Arc<dyn IndexHandle>,
        config: &ConnectorConfig,
        schema: DatasetSchema,
        partitioning: Option<&DatasetPartitioning>,
        partition_id: Option<&str>,
    ) -> Result<Self, ConnectorError> {
        let partition = match (partitioning, partition_id) {
            (Some(partitioning), Some(partition_id)) => {
                let filters = partition::facet_filters(partitioning, partition_id)?;

                let mut delete_settings = config.base_search_settings()?;
                delete_settings.insert(settings::FACET_FILTERS_KEY.to_string(), json!(filters));

                info!(partition = %partition_id, "Clearing partition before write session");
                index.delete_by_query("*", &delete_settings).await?;

                Some(partition::partition_values(partitioning, partition_id)?)
            }
            _ => {
                info!("Clearing index before write session");
                index.clear_index().await?;
                None
            }
        };

        Ok(Self {
            index,
            schema,
            partition,
            batch_size: config.batch_size,
            payload_max_size: config.payload_max_size,
            buffer: Vec::with_capacity(config.batch_size),
            warnings: Vec::new(),
        })
    }

    /// Coercion and truncation warnings recorded so far.
    pub fn warnings(&self) -> &[CoercionWarning] {
        &self.warnings
    }

    /// Write one row, zipped positionally against the schema columns.
    ///
    /// Reaching `batch_size` flushes synchronously before this returns.
    pub async fn write_row(&mut self, row: &[String]) -> Result<(), ConnectorError> {
        let mut record = Record::new();

        for (column, raw) in self.schema.columns.iter().zip(row) {
            let value = coerce_value(
                column,
                raw,
                self.payload_max_size,
                &mut self.warnings,
            );

            if column.name == ID_COLUMN {
                debug!("Setting objectID from id column");
                record.insert(OBJECT_ID_FIELD.to_string(), value.clone());
            }
            record.insert(column.name.clone(), value);
        }

        if let Some(dimensions) = &self.partition {
            for (name, value) in dimensions {
                debug!(dimension = %name, value = %value, "Forcing partitioning dimension");
                record.insert(name.clone(), json!(value));
            }
        }

        self.buffer.push(record);

        if self.buffer.len() >= self.batch_size {
            self.flush().await?;
        }
        Ok(())
    }

    /// Flush all buffered records as one batch upsert.
    ///
    /// No-op on an empty buffer. The buffer is cleared only after the
    /// batch call succeeds; on failure the records stay buffered and the
    /// error propagates.
    #[instrument(skip(self))]
    pub async fn flush(&mut self) -> Result<(), ConnectorError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        info!(count = self.buffer.len(), "Flushing write buffer");
        self.index.save_objects(&self.buffer).await?;
        self.buffer.clear();
        Ok(())
    }

    /// Flush remaining records and end the session. Idempotent on an
    /// empty buffer.
    pub async fn close(&mut self) -> Result<(), ConnectorError> {
        self.flush().await?;
        info!("Write session closed");
        Ok(())
    }
}

#[async_trait]
impl DatasetWriter for WriteBuffer {
    async fn write_row(&mut self, row: &[String]) -> Result<(), ConnectorError> {
        WriteBuffer::write_row(self, row).await
    }

    async fn flush(&mut self) -> Result<(), ConnectorError> {
        WriteBuffer::flush(self).await
    }

    async fn close(&mut self) -> Result<(), ConnectorError> {
        WriteBuffer::close(self).await
    }
}

/// Coerce one raw cell value per its column's declared type, recording
/// warnings for recovered problems.
///
/// Truncation runs first, on the raw string form, so an oversized value
/// is cut before any parse is attempted.
fn coerce_value(
    column: &Column,
    raw: &str,
    payload_max_size: usize,
    warnings: &mut Vec<CoercionWarning>,
) -> Value {
    let mut raw = Cow::Borrowed(raw);

    if payload_max_size > 0 && raw.chars().count() > payload_max_size.saturating_sub(TRUNCATION_HEADROOM)
    {
        warn!(column = %column.name, "Payload max size reached, truncating value");
        warnings.push(CoercionWarning {
            column: column.name.clone(),
            message: format!("value truncated to {} characters", payload_max_size),
        });

        let mut truncated: String = raw
            .chars()
            .take(payload_max_size.saturating_sub(TRUNCATION_MARKER.len()))
            .collect();
        truncated.push_str(TRUNCATION_MARKER);
        raw = Cow::Owned(truncated);
    }

    match column.column_type {
        t if t.is_integer() => match raw.parse::<i64>() {
            Ok(parsed) => json!(parsed),
            Err(e) => {
                warn!(column = %column.name, value = %raw, error = %e, "Failed to parse value as int");
                warnings.push(CoercionWarning {
                    column: column.name.clone(),
                    message: format!("failed to parse '{}' as int: {}", raw, e),
                });
                Value::String(raw.into_owned())
            }
        },
        ColumnType::Boolean => Value::Bool(raw == "true"),
        t if t.is_json() => match serde_json::from_str::<Value>(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(column = %column.name, value = %raw, error = %e, "Failed to parse value as JSON");
                warnings.push(CoercionWarning {
                    column: column.name.clone(),
                    message: format!("failed to parse '{}' as JSON: {}", raw, e),
                });
                Value::String(raw.into_owned())
            }
        },
        _ => Value::String(raw.into_owned()),
    }
}
