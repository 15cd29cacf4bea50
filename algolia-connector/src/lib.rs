//! # Algolia Connector
//!
//! Connector logic for reading a dataset out of, and writing a dataset
//! into, an Algolia search index on behalf of a host data platform.
//!
//! ## Architecture
//!
//! The connector is three thin pieces over an abstract index handle:
//!
//! 1. **Partition mapping**: composite partition identifiers to facet
//!    filters, and partition enumeration from facet values
//! 2. **Reader**: paginated search producing a lazy stream of records
//! 3. **Writer**: type-coercing write buffer flushing in fixed batches
//!
//! The host drives the connector through the [`DatasetReader`] and
//! [`DatasetWriter`] capability traits; all index I/O goes through the
//! injected [`IndexHandle`](algolia_connector_index::IndexHandle).

pub mod config;
pub mod connector;
pub mod errors;
pub mod interfaces;
pub mod partition;
pub mod reader;
pub mod settings;
pub mod writer;

pub use config::ConnectorConfig;
pub use connector::SearchConnector;
pub use errors::ConnectorError;
pub use interfaces::{DatasetReader, DatasetWriter};
pub use reader::SearchReader;
pub use writer::{CoercionWarning, WriteBuffer};
