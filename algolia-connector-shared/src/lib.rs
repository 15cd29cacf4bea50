//! # Algolia Connector Shared
//!
//! Shared types and data structures for the Algolia dataset connector.
//!
//! This crate defines the data model exchanged between the host platform,
//! the connector logic, and the index boundary: schemaless records, the
//! host-supplied dataset schema and partitioning descriptors, and the
//! search request/response types of the index service.

pub mod partitioning;
pub mod record;
pub mod schema;
pub mod search;

pub use partitioning::{DatasetPartitioning, Dimension, PARTITION_SEPARATOR};
pub use record::{Record, HIGHLIGHT_RESULT_FIELD, ID_COLUMN, OBJECT_ID_FIELD};
pub use schema::{Column, ColumnType, DatasetSchema};
pub use search::{SearchResponse, SearchSettings};
