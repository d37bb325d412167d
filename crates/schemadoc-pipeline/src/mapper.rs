//! Raw metadata to document model mapping.

use std::collections::HashSet;

use schemadoc_core::{ColumnModel, TableModel, NO, YES};

use crate::group::MetadataIndex;
use crate::rows::{RawColumn, RawTable};

/// Vendor nullable code meaning "not nullable".
const NOT_NULLABLE: &str = "0";
/// Decimal digits reported when the source omits them.
const DEFAULT_DECIMAL_DIGITS: &str = "0";

/// Normalize one raw column against its table's primary-key column set.
pub fn map_column(raw: &RawColumn, primary_keys: &HashSet<&str>) -> ColumnModel {
    ColumnModel {
        ordinal_position: raw.ordinal_position,
        column_name: raw.column_name.clone(),
        column_type: raw.column_type.clone(),
        type_name: raw.type_name.clone(),
        column_length: raw.column_length.clone(),
        column_size: raw.column_size.clone(),
        decimal_digits: match raw.decimal_digits.as_deref() {
            Some(digits) if !digits.is_empty() => digits.to_string(),
            _ => DEFAULT_DECIMAL_DIGITS.to_string(),
        },
        nullable: if raw.nullable == NOT_NULLABLE { NO } else { YES }.to_string(),
        primary_key: if primary_keys.contains(raw.column_name.as_str()) {
            YES
        } else {
            NO
        }
        .to_string(),
        column_def: raw.column_def.clone(),
        remarks: raw.remarks.clone(),
    }
}

/// Build the table model for one raw table from the grouped metadata.
pub fn map_table(raw: &RawTable, index: &MetadataIndex) -> TableModel {
    let primary_keys = index.primary_key_names(&raw.table_name);
    TableModel {
        table_name: raw.table_name.clone(),
        remarks: raw.remarks.clone(),
        index_names: raw.index_names.clone(),
        index_column_names: raw.index_column_names.clone(),
        columns: index
            .columns_of(&raw.table_name)
            .iter()
            .map(|column| map_column(column, &primary_keys))
            .collect(),
    }
}
