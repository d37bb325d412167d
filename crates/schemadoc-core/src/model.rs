use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Flag value for nullable and primary-key columns.
pub const YES: &str = "Y";
/// Flag value for the opposite.
pub const NO: &str = "N";

/// Root document model handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataModel {
    /// Document title.
    pub title: String,
    /// Organization shown in the document header.
    pub organization: String,
    /// Organization link.
    pub organization_url: String,
    /// Document version string.
    pub version: String,
    /// Free-form description.
    pub description: String,
    /// Name of the documented database.
    pub database_name: String,
    /// Tables retained after filtering, in query-layer order.
    pub tables: Vec<TableModel>,
}

/// A documented table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableModel {
    pub table_name: String,
    pub remarks: String,
    /// Index names defined on the table, in vendor order.
    pub index_names: Vec<String>,
    /// Columns covered by those indexes, in vendor order.
    pub index_column_names: Vec<String>,
    pub columns: Vec<ColumnModel>,
}

/// Normalized column metadata.
///
/// `nullable` and `primary_key` hold [`YES`] or [`NO`]; `ordinal_position`
/// is unique within a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnModel {
    /// Position of the column within its table, starting at 1.
    pub ordinal_position: i32,
    pub column_name: String,
    /// Full column type (e.g. `varchar(32)`).
    pub column_type: String,
    /// Bare type name (e.g. `varchar`).
    pub type_name: String,
    pub column_length: String,
    pub column_size: String,
    /// `"0"` when the source reported none.
    pub decimal_digits: String,
    pub nullable: String,
    pub primary_key: String,
    /// Default value expression, when the column has one.
    pub column_def: Option<String>,
    pub remarks: Option<String>,
}
