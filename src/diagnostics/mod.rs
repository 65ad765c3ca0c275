//! Diagnostics — reporting what binding and reconciliation found.
//!
//! Turns unknown attributes and blocks of a [`ParsedBlock`] and
//! [`ReconcileError`]s into position-accurate diagnostics. Rendering them
//! is left to the caller.

mod options;

pub use options::DiagnosticOptions;

use std::sync::Arc;

use tracing::debug;

use crate::base::Range;
use crate::bind::ParsedBlock;
use crate::reconcile::ReconcileError;
use crate::syntax::{Attribute, Block};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    /// Diagnostic code (e.g., "H0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn new(range: Range, severity: Severity, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity,
            code: None,
            message: message.into(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(range: Range, message: impl Into<Arc<str>>) -> Self {
        Self::new(range, Severity::Error, message)
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Error at the block's type name for a block that could not be reconciled
    pub fn from_reconcile_error(err: &ReconcileError) -> Self {
        Self::error(err.range().clone(), err.to_string()).with_code(codes::FORMAT_MISMATCH)
    }
}

impl From<&ReconcileError> for Diagnostic {
    fn from(err: &ReconcileError) -> Self {
        Self::from_reconcile_error(err)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes.
///
/// - **H0001-H0099**: Schema binding
/// - **H0101-H0199**: Reconciliation
pub mod codes {
    /// Attribute not declared by the block schema.
    pub const UNKNOWN_ATTRIBUTE: &str = "H0001";
    /// Nested block type not declared by the block schema.
    pub const UNKNOWN_BLOCK: &str = "H0002";
    /// Block body is not native syntax.
    pub const FORMAT_MISMATCH: &str = "H0101";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics from bound blocks.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    options: DiagnosticOptions,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new(options: DiagnosticOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Report an attribute the schema does not declare, at its name.
    pub fn unknown_attribute(&mut self, parent: &str, attr: &Attribute) {
        self.add(
            Diagnostic::new(
                attr.name_range.clone(),
                self.options.unknown_attribute_severity,
                format!("unexpected attribute '{}' in block '{}'", attr.name, parent),
            )
            .with_code(codes::UNKNOWN_ATTRIBUTE),
        );
    }

    /// Report a nested block the schema does not declare, at its type name.
    pub fn unknown_block(&mut self, parent: &str, block: &Block) {
        self.add(
            Diagnostic::new(
                block.type_range.clone(),
                self.options.unknown_block_severity,
                format!("unexpected block '{}' in block '{}'", block.type_name, parent),
            )
            .with_code(codes::UNKNOWN_BLOCK),
        );
    }

    pub fn format_mismatch(&mut self, err: &ReconcileError) {
        self.add(Diagnostic::from_reconcile_error(err));
    }

    /// Report unknown elements of `block`, descending into known nested
    /// blocks when the options ask for it.
    ///
    /// A block bound without a schema is skipped entirely: with nothing to
    /// compare against, every element would be reported.
    pub fn collect_block(&mut self, block: &ParsedBlock<'_>) {
        let (Some(raw), Some(_)) = (block.raw_block(), block.schema()) else {
            return;
        };

        for attr in block.unknown_attributes().values() {
            self.unknown_attribute(&raw.type_name, attr);
        }
        for nested in block.unknown_blocks() {
            self.unknown_block(&raw.type_name, nested);
        }

        if self.options.recursive {
            for block_type in block.known_blocks().values() {
                for nested in &block_type.blocks {
                    self.collect_block(nested);
                }
            }
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the collector, returning diagnostics ordered by position.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by(|a, b| {
            (&a.range.filename, a.range.start).cmp(&(&b.range.filename, b.range.start))
        });
        self.diagnostics
    }
}

/// Collect unknown-element diagnostics for a bound block tree.
pub fn collect_diagnostics(
    block: &ParsedBlock<'_>,
    options: &DiagnosticOptions,
) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new(options.clone());
    collector.collect_block(block);
    let diagnostics = collector.finish();
    debug!(count = diagnostics.len(), "collected binding diagnostics");
    diagnostics
}
