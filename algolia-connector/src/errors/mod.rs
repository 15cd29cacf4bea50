//! Error types for the connector.
//!
//! Index operation failures pass through untouched; the host decides
//! job-level success or failure. Coercion and truncation problems are
//! never errors — the writer records them as warnings and keeps going.

use thiserror::Error;

use algolia_connector_index::IndexError;

/// Errors that can occur during connector operations.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// A partition identifier did not decompose into one chunk per
    /// partitioning dimension.
    #[error("Malformed partition id '{partition_id}': {found} chunks for {expected} dimensions")]
    MalformedPartitionId {
        partition_id: String,
        expected: usize,
        found: usize,
    },

    /// A partitioning dimension was absent from the facet response.
    #[error("Facet '{0}' missing from search response")]
    MissingFacet(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Index operation failure, propagated from the index boundary.
    #[error("Index error: {0}")]
    IndexError(#[from] IndexError),
}

impl ConnectorError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
