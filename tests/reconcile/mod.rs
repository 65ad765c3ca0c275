//! Reconciliation tests: generic blocks to native blocks, then binding

pub mod tests_reconcile_then_bind;
