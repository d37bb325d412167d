use thiserror::Error;

/// Core error type shared across schemadoc crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw value could not be coerced into a typed record field.
    #[error("cannot bind source column `{column}` to `{field}`: {reason}")]
    Binding {
        field: &'static str,
        column: &'static str,
        reason: String,
    },
    /// Failure surfaced by the introspection query layer, propagated unchanged.
    #[error("query layer error: {0}")]
    Query(String),
    /// The document model violates internal invariants.
    #[error("invalid model: {0}")]
    InvalidModel(String),
}

/// Convenience alias for results returned by schemadoc crates.
pub type Result<T> = std::result::Result<T, Error>;
