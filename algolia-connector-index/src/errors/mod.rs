//! Error types for the index boundary.

mod index_error;

pub use index_error::IndexError;
