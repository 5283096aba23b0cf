//! Aggregator cost parsing
//!
//! The completion notification carries the raw session cost as a
//! currency-formatted string (e.g. "NGN 21.00"). It is parsed once here at
//! the boundary; the billing logic only ever sees a `Decimal`.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a currency-formatted cost string into a monetary value.
///
/// Strips everything except digits and the decimal point, then parses the
/// remainder. Returns None for missing, empty or non-numeric input - such a
/// notification is "not billable", never an error.
pub fn parse_cost(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}
