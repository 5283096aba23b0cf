//! Pricing resolution
//!
//! The client charge for a USSD session is the aggregator's raw cost times a
//! multiplier: the client tier's USSD price row when one exists, otherwise a
//! fixed platform default.

use crate::client::ServiceKind;
use crate::error::UssdError;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::Postgres;

/// Platform default markup applied when the client has no tier (or the tier
/// has no USSD price row)
pub static DEFAULT_USSD_MULTIPLIER: Lazy<Decimal> = Lazy::new(|| Decimal::from(3));

/// Resolve the USSD cost multiplier for a client inside an open transaction.
///
/// Runs on the reconciliation transaction so the tier read and the resulting
/// debit see one consistent snapshot.
pub async fn ussd_multiplier_in_tx(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    pricing_tier_id: Option<i64>,
    default_multiplier: Decimal,
) -> Result<Decimal, UssdError> {
    let Some(tier_id) = pricing_tier_id else {
        return Ok(default_multiplier);
    };

    let price: Option<Decimal> = sqlx::query_scalar(
        r#"SELECT price FROM service_prices
           WHERE pricing_tier_id = $1 AND service_name = $2"#,
    )
    .bind(tier_id)
    .bind(ServiceKind::Ussd.as_str())
    .fetch_optional(&mut **tx)
    .await?;

    Ok(price.unwrap_or(default_multiplier))
}

/// Compute the client-facing charge and the token deduction.
///
/// `tokens = ceil(raw_cost * multiplier)`; the fractional remainder always
/// rounds against the client.
pub fn compute_charge(
    raw_cost: Decimal,
    multiplier: Decimal,
) -> Result<(Decimal, i64), UssdError> {
    let client_price = raw_cost
        .checked_mul(multiplier)
        .ok_or_else(|| UssdError::System("client price overflow".to_string()))?;

    let tokens = client_price
        .ceil()
        .to_i64()
        .ok_or_else(|| UssdError::System("token deduction overflow".to_string()))?;

    Ok((client_price, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_multiplier_pricing() {
        // Tier multiplier 4 on "NGN 10.00": price 40, deduct 40
        let (price, tokens) =
            compute_charge(Decimal::new(1000, 2), Decimal::from(4)).unwrap();
        assert_eq!(price, Decimal::from(40));
        assert_eq!(tokens, 40);
    }

    #[test]
    fn test_default_multiplier_pricing() {
        // Default 3x on "NGN 7.00": price 21, deduct 21
        let (price, tokens) =
            compute_charge(Decimal::new(700, 2), *DEFAULT_USSD_MULTIPLIER).unwrap();
        assert_eq!(price, Decimal::from(21));
        assert_eq!(tokens, 21);
    }

    #[test]
    fn test_fractional_charge_rounds_up() {
        // 3x on NGN 7.01 = 21.03 -> 22 tokens
        let (price, tokens) =
            compute_charge(Decimal::new(701, 2), Decimal::from(3)).unwrap();
        assert_eq!(price, Decimal::new(2103, 2));
        assert_eq!(tokens, 22);
    }

    #[test]
    fn test_zero_cost_deducts_nothing() {
        let (price, tokens) = compute_charge(Decimal::ZERO, Decimal::from(3)).unwrap();
        assert_eq!(price, Decimal::ZERO);
        assert_eq!(tokens, 0);
    }
}
