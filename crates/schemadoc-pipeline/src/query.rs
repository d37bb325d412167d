use schemadoc_core::Result;

use crate::rows::{Database, RawColumn, RawIndexInfo, RawPrimaryKey, RawTable};

/// Capability implemented by vendor introspection layers.
///
/// Implementations run whatever catalog queries their vendor needs and
/// deliver materialized raw records; the pipeline itself never touches a
/// database. Failures map to `Error::Query` and propagate unchanged, with
/// no retries.
pub trait DatabaseQuery {
    /// Engine identifier (e.g. `mysql`).
    fn engine(&self) -> &'static str;

    /// The database being documented.
    fn database(&self) -> Result<Database>;

    /// All index entries of the database.
    fn index_infos(&self) -> Result<Vec<RawIndexInfo>>;

    /// All tables, given the index entries already fetched.
    fn tables(&self, index_infos: &[RawIndexInfo]) -> Result<Vec<RawTable>>;

    /// All table columns of the database.
    fn table_columns(&self) -> Result<Vec<RawColumn>>;

    /// All primary-key member columns of the database.
    fn primary_keys(&self) -> Result<Vec<RawPrimaryKey>>;
}
