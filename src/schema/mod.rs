//! Schema model: what attributes and nested blocks a block body may contain.
//!
//! Schemas are supplied from outside (a static registry, a provider, ...)
//! and are never modified by binding.

mod error;
#[cfg(feature = "json")]
mod json;
mod types;

pub use error::SchemaError;
#[cfg(feature = "json")]
pub use json::from_json;
pub use types::{NestingMode, SchemaAttribute, SchemaBlock, SchemaNestedBlock};
