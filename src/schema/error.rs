//! Error types for schema decoding.

use thiserror::Error;

/// Errors that can occur while decoding a schema from an external source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Nesting mode not recognized for a nested block type.
    #[error("Unknown nesting mode `{mode}` for block type `{type_name}`")]
    UnknownNestingMode { type_name: String, mode: String },
}

impl SchemaError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}
