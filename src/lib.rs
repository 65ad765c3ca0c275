//! # hcl-lang-base
//!
//! Schema-driven binding and range reconciliation for HCL syntax trees.
//!
//! A parser produces an untyped tree of blocks, labels and attributes. This
//! crate binds that tree to a block schema, separating what the schema
//! recognises from what it does not, while keeping exact source ranges for
//! every element so tooling can offer diagnostics, completion and navigation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! diagnostics → Unknown-element and reconciliation diagnostics
//!   ↓
//! bind        → Block / attribute / nested block binders, position queries
//!   ↓
//! reconcile   → Generic block → native block with brace ranges
//!   ↓
//! schema      → Block, attribute and nested block schemas
//!   ↓
//! syntax      → Block, Body, Attribute, Label, GenericBlock
//!   ↓
//! base        → Primitives (Pos, Range, NameMap)
//! ```
//!
//! ## Usage
//!
//! ```
//! use hcl_lang::base::{Pos, Range};
//! use hcl_lang::bind::parse_block;
//! use hcl_lang::schema::{SchemaAttribute, SchemaBlock};
//! use hcl_lang::syntax::{Attribute, Block, Body, Expression};
//!
//! let source = "provider { region = 1 }";
//! let span = |start, end| Range::from_offsets("main.tf", source, start, end);
//!
//! let body = Body::new(span(9, 23)).with_attribute(Attribute {
//!     name: "region".into(),
//!     expr: Expression::new("1", span(20, 21)),
//!     src_range: span(11, 21),
//!     name_range: span(11, 17),
//!     equals_range: span(18, 19),
//! });
//! let block = Block::new("provider", span(0, 8), body);
//! let schema = SchemaBlock::new().with_attribute(SchemaAttribute::required("region"));
//!
//! let parsed = parse_block(Some(&block), block.labels(), Some(&schema));
//! assert!(parsed.known_attributes().contains_key("region"));
//! assert!(parsed.pos_in_body(Pos::at_offset(source, 12)));
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → schema → reconcile → bind → diagnostics)
// ============================================================================

/// Foundation types: Pos, Range, NameMap
pub mod base;

/// Syntax tree model: native and generic blocks
pub mod syntax;

/// Schema model, with optional JSON decoding
pub mod schema;

/// Range reconciliation for generic blocks
pub mod reconcile;

/// Schema-driven binding
pub mod bind;

/// Diagnostics for unknown elements and reconciliation failures
pub mod diagnostics;

// Re-export commonly needed items
pub use base::{NameMap, Pos, Range};
pub use bind::{ParsedBlock, parse_block};
pub use reconcile::{ReconcileError, as_syntax_block};
pub use schema::{SchemaAttribute, SchemaBlock, SchemaNestedBlock};
pub use syntax::{Block, GenericBlock, GenericBody};
