//! Foundation types for the binding toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Pos`] - A single source position (line, column, byte offset)
//! - [`Range`] - A half-open source range within a named file
//! - [`NameMap`] - Name-keyed, insertion-ordered map used by the tree and schema models
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{Pos, Range};

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

/// Map keyed by attribute or block type name.
///
/// Iteration follows insertion order, which for trees built by a parser is
/// source order.
pub type NameMap<V> = IndexMap<SmolStr, V, FxBuildHasher>;

// Re-export text-size types for convenience
pub use text_size;
