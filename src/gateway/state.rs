use std::sync::Arc;

use crate::billing::BillingReconciler;
use crate::db::Database;
use crate::menu::StaticMenuRegistry;
use rust_decimal::Decimal;

/// Shared gateway application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool wrapper
    pub db: Arc<Database>,
    /// Static legacy handler table (read-only after startup)
    pub registry: Arc<StaticMenuRegistry>,
    /// Billing reconciler for completion notifications
    pub reconciler: BillingReconciler,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        registry: Arc<StaticMenuRegistry>,
        default_multiplier: Decimal,
    ) -> Self {
        let reconciler = BillingReconciler::new(db.pool().clone(), default_multiplier);
        Self {
            db,
            registry,
            reconciler,
        }
    }
}
