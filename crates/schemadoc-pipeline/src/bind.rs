//! Declarative binding of flat introspection rows onto typed records.

use schemadoc_core::{Error, Result};

use crate::rows::RawRow;

/// Maps one target field onto a source result column.
///
/// Binding tables are static slices of these, declared once per vendor per
/// record type; the binder itself never changes when a vendor is added.
pub struct FieldBinding<T> {
    /// Target field name, used in binding error diagnostics.
    pub field: &'static str,
    /// Source result column the value is read from.
    pub column: &'static str,
    /// Writes the raw value into the record.
    pub apply: fn(&mut T, Option<&str>) -> std::result::Result<(), String>,
}

/// Bind a raw row onto a fresh record using the given binding table.
///
/// A source column absent from the row binds its field to an empty or
/// default value; only a present value that cannot be coerced into the
/// field's type is an error.
pub fn bind_row<T: Default>(row: &RawRow, bindings: &[FieldBinding<T>]) -> Result<T> {
    let mut record = T::default();
    for binding in bindings {
        (binding.apply)(&mut record, row.get(binding.column)).map_err(|reason| Error::Binding {
            field: binding.field,
            column: binding.column,
            reason,
        })?;
    }
    Ok(record)
}

/// Raw value as text, empty when absent.
pub fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Raw value as optional text; absent stays absent.
pub fn optional(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Raw value as an integer, zero when absent.
pub fn integer(value: Option<&str>) -> std::result::Result<i32, String> {
    match value {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("expected an integer, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Record {
        name: String,
        position: i32,
        comment: Option<String>,
    }

    static BINDINGS: &[FieldBinding<Record>] = &[
        FieldBinding {
            field: "name",
            column: "NAME",
            apply: |record, value| {
                record.name = text(value);
                Ok(())
            },
        },
        FieldBinding {
            field: "position",
            column: "POSITION",
            apply: |record, value| {
                record.position = integer(value)?;
                Ok(())
            },
        },
        FieldBinding {
            field: "comment",
            column: "COMMENT",
            apply: |record, value| {
                record.comment = optional(value);
                Ok(())
            },
        },
    ];

    #[test]
    fn binds_all_fields_from_a_full_row() {
        let mut row = RawRow::new();
        row.set("NAME", "id");
        row.set("POSITION", "3");
        row.set("COMMENT", "identifier");

        let record: Record = bind_row(&row, BINDINGS).expect("bind row");
        assert_eq!(
            record,
            Record {
                name: "id".to_string(),
                position: 3,
                comment: Some("identifier".to_string()),
            }
        );
    }

    #[test]
    fn absent_columns_bind_to_defaults() {
        let record: Record = bind_row(&RawRow::new(), BINDINGS).expect("bind empty row");
        assert_eq!(record, Record::default());
    }

    #[test]
    fn null_values_bind_like_absent_columns() {
        let mut row = RawRow::new();
        row.set_null("NAME");
        row.set_null("POSITION");
        row.set_null("COMMENT");

        let record: Record = bind_row(&row, BINDINGS).expect("bind null row");
        assert_eq!(record, Record::default());
    }

    #[test]
    fn uncoercible_value_names_the_field_and_column() {
        let mut row = RawRow::new();
        row.set("POSITION", "first");

        let err = bind_row::<Record>(&row, BINDINGS).expect_err("non-numeric position");
        match err {
            Error::Binding { field, column, .. } => {
                assert_eq!(field, "position");
                assert_eq!(column, "POSITION");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn binding_is_deterministic() {
        let mut row = RawRow::new();
        row.set("NAME", "id");
        row.set("POSITION", "1");

        let first: Record = bind_row(&row, BINDINGS).expect("bind row");
        let second: Record = bind_row(&row, BINDINGS).expect("bind row again");
        assert_eq!(first, second);
    }
}
