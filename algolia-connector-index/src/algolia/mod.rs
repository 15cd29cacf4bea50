//! Algolia REST backend.
//!
//! Concrete [`crate::IndexHandle`] implementation over the Algolia
//! HTTP API.

mod client;
mod requests;

pub use client::AlgoliaIndex;
