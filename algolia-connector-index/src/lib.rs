//! # Algolia Connector Index
//!
//! The index boundary of the connector. It defines the abstract
//! [`IndexHandle`] trait covering the four index operations the
//! connector needs (search, delete-by-query, clear, batch upsert) and a
//! concrete REST implementation over the Algolia HTTP API.
//!
//! The trait exists so the connector logic can be exercised against mock
//! indexes in tests and so the backend stays swappable.

pub mod algolia;
pub mod errors;
pub mod interfaces;

pub use algolia::AlgoliaIndex;
pub use errors::IndexError;
pub use interfaces::IndexHandle;
