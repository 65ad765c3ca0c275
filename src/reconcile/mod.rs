//! Range reconciliation: generic block → native syntax block.
//!
//! A [`GenericBlock`] carries no brace ranges. When its body is native
//! syntax they can be recovered from the body range alone, because a
//! native body always starts with `{` and ends with `}`, each one byte:
//!
//! ```text
//! body:        [start ............................ end)
//! open brace:  [start, start+1)
//! close brace:                              [end-1, end)
//! ```
//!
//! Any other body kind fails with [`ReconcileError::FormatMismatch`].

mod error;

pub use error::ReconcileError;

use tracing::debug;

use crate::syntax::{Block, GenericBlock, GenericBody};

/// Reconcile an optional generic block.
///
/// An absent block reconciles to an absent block.
pub fn as_syntax_block(block: Option<GenericBlock>) -> Result<Option<Block>, ReconcileError> {
    block.map(Block::try_from).transpose()
}

impl TryFrom<GenericBlock> for Block {
    type Error = ReconcileError;

    fn try_from(block: GenericBlock) -> Result<Self, Self::Error> {
        let body = match block.body {
            GenericBody::Native(body) => body,
            other => {
                return Err(ReconcileError::format_mismatch(
                    other.kind(),
                    block.type_name,
                    block.type_range,
                ));
            }
        };

        let (open_brace_range, close_brace_range) = body.brace_ranges();
        debug!(
            block = %block.type_name,
            open = %open_brace_range,
            close = %close_brace_range,
            "reconciled brace ranges"
        );

        Ok(Block {
            type_name: block.type_name,
            labels: block.labels,
            body,
            type_range: block.type_range,
            label_ranges: block.label_ranges,
            open_brace_range,
            close_brace_range,
        })
    }
}
