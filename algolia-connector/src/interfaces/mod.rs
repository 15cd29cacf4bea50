//! Capability traits driven by the host platform.
//!
//! The host's connector lifecycle is external; these traits are the
//! boundary it calls through. [`DatasetReader`] covers the read side
//! (schema, rows, partition enumeration) and [`DatasetWriter`] the
//! write side (row buffering, flush, close).

mod dataset_reader;
mod dataset_writer;

pub use dataset_reader::{DatasetReader, RowStream};
pub use dataset_writer::DatasetWriter;
