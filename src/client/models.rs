//! Data models for client accounts and pricing tiers

use rust_decimal::Decimal;
use serde::Serialize;

/// Platform client (tenant)
///
/// Owned by the account-management subsystem; the core only reads the
/// short code / tier reference and mutates `token_balance`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    /// Assigned USSD short code (e.g. "*384*19379#"), unique when set
    pub ussd_code: Option<String>,
    /// Token balance; may go negative after USSD reconciliation
    pub token_balance: i64,
    pub pricing_tier_id: Option<i64>,
    /// SMS sender id, unused by the USSD path
    pub sender_id: Option<String>,
}

/// Named pricing tier assignable to a client
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PricingTier {
    pub id: i64,
    pub tier_name: String,
}

/// Billable service kinds priced per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Sms,
    Ussd,
}

impl ServiceKind {
    /// Service name as stored in the `service_prices` table
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Sms => "SMS",
            ServiceKind::Ussd => "USSD",
        }
    }
}

/// Per-tier price row. At most one row per (tier, service).
///
/// For SMS the price is a flat token cost per message; for USSD it is a
/// multiplier applied to the aggregator's raw session cost.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ServicePrice {
    pub id: i64,
    pub pricing_tier_id: i64,
    pub service_name: String,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_as_str() {
        assert_eq!(ServiceKind::Sms.as_str(), "SMS");
        assert_eq!(ServiceKind::Ussd.as_str(), "USSD");
    }
}
