//! Core contracts for schemadoc.
//!
//! This crate defines the canonical document model produced by the
//! normalization pipeline, the configuration that drives table filtering,
//! and the error type shared across schemadoc crates.

pub mod config;
pub mod error;
pub mod model;
pub mod validation;

pub use config::{DocumentConfig, ProcessConfig};
pub use error::{Error, Result};
pub use model::{ColumnModel, DataModel, TableModel, NO, YES};
pub use validation::validate_model;
