use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::model::{DataModel, NO, YES};

/// Validate internal consistency of a document model.
///
/// This checks:
/// - duplicate table names
/// - duplicate column names or ordinal positions within a table
/// - nullable/primary-key flags outside `Y`/`N`
pub fn validate_model(model: &DataModel) -> Result<()> {
    let mut tables = BTreeSet::new();

    for table in &model.tables {
        if !tables.insert(table.table_name.as_str()) {
            return Err(Error::InvalidModel(format!(
                "duplicate table name: {}",
                table.table_name
            )));
        }

        let mut columns = BTreeSet::new();
        let mut ordinals = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.column_name.as_str()) {
                return Err(Error::InvalidModel(format!(
                    "duplicate column name: {}.{}",
                    table.table_name, column.column_name
                )));
            }
            if !ordinals.insert(column.ordinal_position) {
                return Err(Error::InvalidModel(format!(
                    "duplicate ordinal position {} in table {}",
                    column.ordinal_position, table.table_name
                )));
            }

            for (flag, value) in [
                ("nullable", column.nullable.as_str()),
                ("primary_key", column.primary_key.as_str()),
            ] {
                if value != YES && value != NO {
                    return Err(Error::InvalidModel(format!(
                        "{}.{}: {flag} must be `{YES}` or `{NO}`, got `{value}`",
                        table.table_name, column.column_name
                    )));
                }
            }
        }
    }

    Ok(())
}
