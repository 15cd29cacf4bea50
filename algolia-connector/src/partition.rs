//! Partition identifier mapping.
//!
//! A partition identifier is a `|`-joined composite of one value per
//! partitioning dimension, in descriptor order. This module converts
//! identifiers into facet filters (and decoded dimension values), and
//! enumerates identifiers from per-dimension facet value sets.

use crate::errors::ConnectorError;
use algolia_connector_shared::{DatasetPartitioning, PARTITION_SEPARATOR};

/// Decode a partition identifier into `(dimension, value)` pairs, in
/// descriptor order.
///
/// Fails with [`ConnectorError::MalformedPartitionId`] when the chunk
/// count does not match the dimension count.
pub fn partition_values(
    partitioning: &DatasetPartitioning,
    partition_id: &str,
) -> Result<Vec<(String, String)>, ConnectorError> {
    let chunks: Vec<&str> = partition_id.split(PARTITION_SEPARATOR).collect();
    if chunks.len() != partitioning.dimensions.len() {
        return Err(ConnectorError::MalformedPartitionId {
            partition_id: partition_id.to_string(),
            expected: partitioning.dimensions.len(),
            found: chunks.len(),
        });
    }

    Ok(partitioning
        .dimensions
        .iter()
        .zip(chunks)
        .map(|(dim, chunk)| (dim.name.clone(), chunk.to_string()))
        .collect())
}

/// Convert a partition identifier into `"dimension:value"` facet
/// filters, one per dimension, in descriptor order.
pub fn facet_filters(
    partitioning: &DatasetPartitioning,
    partition_id: &str,
) -> Result<Vec<String>, ConnectorError> {
    Ok(partition_values(partitioning, partition_id)?
        .into_iter()
        .map(|(name, value)| format!("{}:{}", name, value))
        .collect())
}

/// Enumerate all partition identifiers from per-dimension value sets.
///
/// `value_sets` must be in descriptor order; the output is the Cartesian
/// product in the iteration order of the inputs, each combination
/// `|`-joined.
pub fn enumerate_partitions(value_sets: &[Vec<String>]) -> Vec<String> {
    let separator = PARTITION_SEPARATOR.to_string();

    let mut combinations: Vec<Vec<&str>> = vec![Vec::new()];
    for values in value_sets {
        let mut next = Vec::with_capacity(combinations.len() * values.len());
        for combination in &combinations {
            for value in values {
                let mut extended = combination.clone();
                extended.push(value.as_str());
                next.push(extended);
            }
        }
        combinations = next;
    }

    combinations
        .into_iter()
        .map(|combination| combination.join(separator.as_str()))
        .collect()
}
