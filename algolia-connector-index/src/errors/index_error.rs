//! Index error types.
//!
//! This module defines the error types that can occur during index
//! operations. The connector performs no retries for these; failures
//! propagate to the host, which decides job-level success or failure.

use thiserror::Error;

/// Errors that can occur during index operations.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Failed to set up or reach the index service.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Search query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Delete-by-query operation failed.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Index clear operation failed.
    #[error("Clear error: {0}")]
    ClearError(String),

    /// Batch upsert operation failed.
    #[error("Save error: {0}")]
    SaveError(String),

    /// The index returned a non-success HTTP status.
    #[error("Index request failed with status {status}: {body}")]
    HttpError { status: u16, body: String },

    /// Failed to parse a response from the index.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the index.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl IndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a clear error.
    pub fn clear(msg: impl Into<String>) -> Self {
        Self::ClearError(msg.into())
    }

    /// Create a save error.
    pub fn save(msg: impl Into<String>) -> Self {
        Self::SaveError(msg.into())
    }

    /// Create an HTTP status error.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
