//! Schema-driven binding of syntax blocks.
//!
//! Binding walks a [`Block`](crate::syntax::Block) alongside a
//! [`SchemaBlock`](crate::schema::SchemaBlock) and splits what it finds into
//! elements the schema knows about and elements it does not:
//!
//! ```text
//! parse_block ──┬── parse_attributes   (known / unknown attributes)
//!               └── parse_block_types  (known / unknown nested blocks)
//!                        └── parse_block (recurse with the nested schema)
//! ```
//!
//! Binding never fails and never validates values or cardinality; absent
//! blocks and absent schemas are represented structurally.

mod attributes;
mod block;
mod nested;
mod query;

pub use attributes::parse_attributes;
pub use block::{BlockType, KnownAttribute, ParsedBlock, parse_block};
pub use nested::parse_block_types;

#[cfg(test)]
mod tests;
