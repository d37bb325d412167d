//! Normalization pipeline for schemadoc.
//!
//! Raw introspection rows from a vendor query layer are bound into typed
//! records, grouped by owning table, normalized into the document model,
//! and filtered according to the process configuration.

pub mod assemble;
pub mod bind;
pub mod filter;
pub mod group;
pub mod mapper;
pub mod query;
pub mod rows;
pub mod vendor;

pub use assemble::{build_data_model, build_data_model_with};
pub use bind::{bind_row, FieldBinding};
pub use filter::filter_tables;
pub use group::MetadataIndex;
pub use query::DatabaseQuery;
pub use rows::{Database, RawColumn, RawIndexInfo, RawPrimaryKey, RawRow, RawTable};

pub use schemadoc_core::DataModel;
