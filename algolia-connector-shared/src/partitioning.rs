//! Dataset partitioning descriptors supplied by the host platform.

use serde::{Deserialize, Serialize};

/// Separator between dimension values in a composite partition identifier.
pub const PARTITION_SEPARATOR: char = '|';

/// Ordered partitioning dimensions for a dataset.
///
/// Dimension order is fixed and matches the order of the `|`-separated
/// chunks in partition identifiers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetPartitioning {
    pub dimensions: Vec<Dimension>,
}

/// A single partitioning dimension.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dimension {
    pub name: String,
}

impl DatasetPartitioning {
    /// Dimension names in descriptor order.
    pub fn dimension_names(&self) -> impl Iterator<Item = &str> {
        self.dimensions.iter().map(|d| d.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_order_preserved() {
        let partitioning: DatasetPartitioning = serde_json::from_str(
            r#"{"dimensions": [{"name": "region"}, {"name": "year"}]}"#,
        )
        .unwrap();

        let names: Vec<&str> = partitioning.dimension_names().collect();
        assert_eq!(names, vec!["region", "year"]);
    }
}
