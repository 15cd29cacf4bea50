//! Record type and reserved field names.
//!
//! The index is schemaless: a record is a flat JSON object keyed by
//! field name.

use serde_json::{Map, Value};

/// A single schemaless record, as stored in (or read from) the index.
pub type Record = Map<String, Value>;

/// The index's reserved unique-record-identifier field.
pub const OBJECT_ID_FIELD: &str = "objectID";

/// Column name that, when present in the dataset schema, also populates
/// [`OBJECT_ID_FIELD`] on write.
pub const ID_COLUMN: &str = "id";

/// Highlight metadata attached to hits by the index; stripped from every
/// record the connector yields.
pub const HIGHLIGHT_RESULT_FIELD: &str = "_highlightResult";
