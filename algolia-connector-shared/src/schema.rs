//! Dataset schema types supplied by the host platform.

use serde::{Deserialize, Serialize};

/// Ordered column list for a dataset, as supplied by the host.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetSchema {
    /// Columns in positional order; rows are zipped against this order.
    pub columns: Vec<Column>,
}

/// A single dataset column.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Column {
    /// Field name the value is written under.
    pub name: String,
    /// Declared type, driving write-time coercion.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// Declared column types recognized by the connector.
///
/// Only the types that drive coercion are distinguished; everything else
/// maps to [`ColumnType::Other`] and passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Tinyint,
    Smallint,
    Int,
    Bigint,
    Boolean,
    Array,
    Object,
    Map,
    /// Any other declared type (string, double, date, ...): passthrough.
    #[serde(other)]
    Other,
}

impl ColumnType {
    /// Whether this type belongs to the integer family.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ColumnType::Tinyint | ColumnType::Smallint | ColumnType::Int | ColumnType::Bigint
        )
    }

    /// Whether values of this type are parsed as JSON on write.
    pub fn is_json(&self) -> bool {
        matches!(self, ColumnType::Array | ColumnType::Object | ColumnType::Map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_from_host_json() {
        let schema: DatasetSchema = serde_json::from_str(
            r#"{"columns": [
                {"name": "id", "type": "bigint"},
                {"name": "active", "type": "boolean"},
                {"name": "tags", "type": "array"},
                {"name": "label", "type": "string"},
                {"name": "price", "type": "double"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(schema.columns.len(), 5);
        assert_eq!(schema.columns[0].column_type, ColumnType::Bigint);
        assert!(schema.columns[0].column_type.is_integer());
        assert_eq!(schema.columns[1].column_type, ColumnType::Boolean);
        assert!(schema.columns[2].column_type.is_json());
        assert_eq!(schema.columns[3].column_type, ColumnType::Other);
        assert_eq!(schema.columns[4].column_type, ColumnType::Other);
    }
}
