use std::collections::BTreeMap;

/// One flat result row from an introspection query, keyed by source column
/// name.
///
/// A missing key and an explicit SQL NULL both read back as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    values: BTreeMap<String, Option<String>>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column to a non-null value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), Some(value.into()));
    }

    /// Set a column to SQL NULL.
    pub fn set_null(&mut self, column: impl Into<String>) {
        self.values.insert(column.into(), None);
    }

    /// Value for a source column, if present and non-null.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).and_then(|value| value.as_deref())
    }
}

/// Database identity returned by the query layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    pub name: String,
}

/// Table metadata as reported by the vendor, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub table_name: String,
    pub remarks: String,
    /// Index names defined on the table, in vendor order.
    pub index_names: Vec<String>,
    /// Columns covered by those indexes, in vendor order.
    pub index_column_names: Vec<String>,
}

/// Column metadata as reported by the vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawColumn {
    pub table_name: String,
    /// Position of the column within its table, starting at 1.
    pub ordinal_position: i32,
    pub column_name: String,
    /// Full column type (e.g. `varchar(32)`).
    pub column_type: String,
    /// Bare type name (e.g. `varchar`).
    pub type_name: String,
    pub column_length: String,
    pub column_size: String,
    pub decimal_digits: Option<String>,
    /// Vendor nullable code; `"0"` means not nullable.
    pub nullable: String,
    /// Default value expression, when the column has one.
    pub column_def: Option<String>,
    pub remarks: Option<String>,
}

/// One primary-key member column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPrimaryKey {
    pub table_name: String,
    pub column_name: String,
}

/// One index entry covering a single column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawIndexInfo {
    pub table_name: String,
    pub column_name: String,
    pub index_name: String,
    /// Vendor code; `"0"` means the index is unique.
    pub non_unique: String,
}
