//! Search reader: paginated reads from the index.
//!
//! Reads are lazy: each page is fetched only when the stream is polled
//! past the previous one. The total page count comes from the index's
//! own `nbPages` report, re-read on every page.

use std::sync::Arc;

use futures::stream::{self, Stream, TryStreamExt};
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::errors::ConnectorError;
use crate::partition::enumerate_partitions;
use crate::settings;
use algolia_connector_index::IndexHandle;
use algolia_connector_shared::{
    DatasetPartitioning, Record, SearchSettings, HIGHLIGHT_RESULT_FIELD,
};

/// Reads records out of the index with the configured query and base
/// settings, page by page.
pub struct SearchReader {
    index: Arc<dyn IndexHandle>,
    query: String,
    base_settings: SearchSettings,
}

/// Pagination cursor owned by one read stream.
struct ReadState {
    index: Arc<dyn IndexHandle>,
    query: String,
    settings: SearchSettings,
    page: u32,
    nb_pages: u32,
}

impl SearchReader {
    /// Create a reader over the given index handle.
    pub fn new(
        index: Arc<dyn IndexHandle>,
        query: impl Into<String>,
        base_settings: SearchSettings,
    ) -> Self {
        Self {
            index,
            query: query.into(),
            base_settings,
        }
    }

    /// Read all matching records as a lazy stream.
    ///
    /// `partition_filters` scopes the read to one partition;
    /// `records_limit >= 0` caps the page size (`-1` means unlimited).
    /// The stream is finite and restartable only by calling `read`
    /// again; there is no resumable cursor across calls.
    pub fn read(
        &self,
        partition_filters: Option<Vec<String>>,
        records_limit: i64,
    ) -> impl Stream<Item = Result<Record, ConnectorError>> + Send + 'static {
        let mut search_settings = self.base_settings.clone();
        settings::disable_highlights(&mut search_settings);

        if records_limit >= 0 {
            settings::set_hits_per_page(&mut search_settings, records_limit);
        }

        if let Some(filters) = partition_filters {
            debug!(filters = %filters.join(","), "Searching with partition facets");
            settings::apply_facet_filters(&mut search_settings, &filters);
        }

        let state = ReadState {
            index: Arc::clone(&self.index),
            query: self.query.clone(),
            settings: search_settings,
            page: 0,
            nb_pages: 1,
        };

        stream::try_unfold(state, |mut state| async move {
            if state.page >= state.nb_pages {
                return Ok::<_, ConnectorError>(None);
            }

            if state.page > 0 {
                state.settings.insert("page".to_string(), json!(state.page));
            }

            let response = state
                .index
                .search(&state.query, &state.settings)
                .await
                .map_err(ConnectorError::from)?;

            debug!(
                page = state.page,
                nb_pages = response.nb_pages,
                hits = response.hits.len(),
                "Read search page"
            );

            state.nb_pages = response.nb_pages;
            state.page += 1;

            let hits: Vec<Result<Record, ConnectorError>> = response
                .hits
                .into_iter()
                .map(|mut hit| {
                    hit.remove(HIGHLIGHT_RESULT_FIELD);
                    Ok(hit)
                })
                .collect();

            Ok(Some((stream::iter(hits), state)))
        })
        .try_flatten()
    }

    /// List the facet values present in the index for each partitioning
    /// dimension, in descriptor order.
    ///
    /// Issues a single facet-count request retrieving no records. A
    /// dimension absent from the response fails with
    /// [`ConnectorError::MissingFacet`].
    #[instrument(skip(self, partitioning))]
    pub async fn list_partition_values(
        &self,
        partitioning: &DatasetPartitioning,
    ) -> Result<Vec<(String, Vec<String>)>, ConnectorError> {
        let mut search_settings = self.base_settings.clone();
        settings::retrieve_no_attributes(&mut search_settings);
        settings::disable_highlights(&mut search_settings);

        let facet_names: Vec<&str> = partitioning.dimension_names().collect();
        settings::request_facets(&mut search_settings, &facet_names);

        let response = self.index.search(&self.query, &search_settings).await?;

        partitioning
            .dimensions
            .iter()
            .map(|dim| {
                response
                    .facet_values(&dim.name)
                    .map(|values| (dim.name.clone(), values))
                    .ok_or_else(|| ConnectorError::MissingFacet(dim.name.clone()))
            })
            .collect()
    }

    /// Enumerate all partition identifiers present in the index: the
    /// Cartesian product of the discovered facet values, `|`-joined.
    pub async fn list_partitions(
        &self,
        partitioning: &DatasetPartitioning,
    ) -> Result<Vec<String>, ConnectorError> {
        let values = self.list_partition_values(partitioning).await?;
        let sets: Vec<Vec<String>> = values.into_iter().map(|(_, set)| set).collect();

        let partitions = enumerate_partitions(&sets);
        info!(count = partitions.len(), "Enumerated partitions");
        Ok(partitions)
    }
}
