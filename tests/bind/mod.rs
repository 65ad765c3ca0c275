//! Binding tests over trees read from source text:
//! - Known/unknown partitioning of attributes and nested blocks
//! - Recursive binding of repeated nested blocks
//! - Position queries for completion and navigation
//! - Diagnostics for unknown elements

pub mod tests_positions;
