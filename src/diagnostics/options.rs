//! Diagnostic collection options

use super::Severity;

/// Options controlling which diagnostics are collected and how severe they are
#[derive(Debug, Clone)]
pub struct DiagnosticOptions {
    /// Severity for attributes the schema does not declare
    pub unknown_attribute_severity: Severity,
    /// Severity for nested blocks the schema does not declare
    pub unknown_block_severity: Severity,
    /// Descend into known nested blocks
    pub recursive: bool,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            unknown_attribute_severity: Severity::Error,
            unknown_block_severity: Severity::Error,
            recursive: true,
        }
    }
}
