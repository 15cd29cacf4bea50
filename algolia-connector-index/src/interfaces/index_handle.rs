//! Index handle trait definition.
//!
//! This module defines the abstract interface for the index operations
//! the connector performs, allowing for different backends (the REST
//! implementation, mocks in tests).

use async_trait::async_trait;

use crate::errors::IndexError;
use algolia_connector_shared::{Record, SearchResponse, SearchSettings};

/// Abstract handle to one index of the search service.
///
/// One handle corresponds to one named index; the connector holds a
/// single handle for its whole lifetime and passes it by reference into
/// each component. Transport, timeouts and retries are the
/// implementation's concern, not the connector's.
///
/// All implementations must be `Send + Sync` to allow use across async
/// tasks. All methods return `Result<T, IndexError>`.
#[async_trait]
pub trait IndexHandle: Send + Sync {
    /// Execute one search request and return one page of results.
    ///
    /// `settings` carries everything beyond the query text: facet
    /// filters, `page`, `hitsPerPage`, requested facets, highlighting.
    async fn search(
        &self,
        query: &str,
        settings: &SearchSettings,
    ) -> Result<SearchResponse, IndexError>;

    /// Delete every record matching the query under the given settings.
    ///
    /// Used with a match-all query plus facet filters to clear one
    /// partition of the index.
    async fn delete_by_query(
        &self,
        query: &str,
        settings: &SearchSettings,
    ) -> Result<(), IndexError>;

    /// Delete every record in the index.
    async fn clear_index(&self) -> Result<(), IndexError>;

    /// Batch upsert: create or replace each record in one bulk call.
    ///
    /// Records carry their own `objectID`; the index assigns one when
    /// it is absent.
    async fn save_objects(&self, records: &[Record]) -> Result<(), IndexError>;
}
