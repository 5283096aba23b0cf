//! Billing and reconciliation
//!
//! - [`cost`] - boundary parsing of currency-formatted aggregator costs
//! - [`pricing`] - tier multiplier resolution and charge arithmetic
//! - [`reconciler`] - exactly-once notification reconciliation

pub mod cost;
pub mod pricing;
pub mod reconciler;

pub use pricing::DEFAULT_USSD_MULTIPLIER;
pub use reconciler::{BillingReconciler, CompletionNotice, ReconcileOutcome};
