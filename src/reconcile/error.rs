//! Error types for block reconciliation.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::Range;
use crate::syntax::BodyKind;

/// Errors that can occur while reconciling a generic block.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// The block body is not native syntax, so its brace ranges cannot be derived.
    #[error("invalid configuration format: {kind} body in block `{type_name}`")]
    FormatMismatch {
        kind: BodyKind,
        type_name: SmolStr,
        type_range: Range,
    },
}

impl ReconcileError {
    /// Create a format mismatch error.
    pub fn format_mismatch(
        kind: BodyKind,
        type_name: impl Into<SmolStr>,
        type_range: Range,
    ) -> Self {
        Self::FormatMismatch {
            kind,
            type_name: type_name.into(),
            type_range,
        }
    }

    /// Range the error should be reported at
    pub fn range(&self) -> &Range {
        match self {
            Self::FormatMismatch { type_range, .. } => type_range,
        }
    }
}
