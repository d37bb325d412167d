use std::collections::{HashMap, HashSet};

use crate::rows::{RawColumn, RawPrimaryKey};

/// Per-table index of raw columns and primary keys for one pipeline run.
///
/// Built in a single pass over each input; relative order within a table is
/// the order the query layer returned. The index is owned by one assembler
/// invocation and discarded with it.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    columns: HashMap<String, Vec<RawColumn>>,
    primary_keys: HashMap<String, Vec<RawPrimaryKey>>,
}

impl MetadataIndex {
    pub fn build(columns: Vec<RawColumn>, primary_keys: Vec<RawPrimaryKey>) -> Self {
        let mut index = Self::default();
        for column in columns {
            index
                .columns
                .entry(column.table_name.clone())
                .or_default()
                .push(column);
        }
        for key in primary_keys {
            index
                .primary_keys
                .entry(key.table_name.clone())
                .or_default()
                .push(key);
        }
        index
    }

    /// Columns of a table in source order; empty for an unknown table.
    pub fn columns_of(&self, table: &str) -> &[RawColumn] {
        self.columns.get(table).map(Vec::as_slice).unwrap_or_default()
    }

    /// Primary-key entries of a table in source order; empty for an unknown
    /// table.
    pub fn primary_keys_of(&self, table: &str) -> &[RawPrimaryKey] {
        self.primary_keys
            .get(table)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Primary-key column-name set of a table.
    pub fn primary_key_names(&self, table: &str) -> HashSet<&str> {
        self.primary_keys_of(table)
            .iter()
            .map(|key| key.column_name.as_str())
            .collect()
    }
}
