//! Syntax tree model consumed by the binder.
//!
//! - [`Block`], [`Body`], [`Attribute`] - native syntax tree with every range populated
//! - [`GenericBlock`], [`GenericBody`] - language-agnostic view of a block
//! - [`Label`] - positioned block label
//!
//! Trees are produced by an external parser and are read-only here.

mod body;
mod generic;
mod label;

pub use body::{Attribute, Block, Body, Expression};
pub use generic::{BodyKind, GenericBlock, GenericBody};
pub use label::Label;
