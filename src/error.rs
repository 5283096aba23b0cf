//! Core error types
//!
//! Error codes follow the gateway convention: failures caused by untrusted
//! external input (unknown short code, stale notification, bad cost format)
//! are recoverable and must never crash the callback path.

use thiserror::Error;

/// USSD engine error types
#[derive(Error, Debug, Clone)]
pub enum UssdError {
    // === Callback-path errors (recovered as "END <generic>" text) ===
    #[error("No client owns short code: {0}")]
    UnknownShortCode(String),

    #[error("Client {0} has no active menu")]
    NoActiveMenu(i64),

    #[error("Input does not match any option at the current menu level")]
    InvalidSelection,

    // === Notification-path errors (silent no-ops, logged only) ===
    #[error("Session {0} is unknown or already finalized")]
    DuplicateOrLateNotification(String),

    #[error("Notification cost is missing or not numeric")]
    MalformedCost,

    // === Management-surface errors ===
    #[error("Menu not found: {0}")]
    MenuNotFound(i64),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    #[error("Invalid response type: {0}")]
    InvalidResponseType(String),

    // === Synchronous-spend errors (SMS/airtime pattern; never USSD reconciliation) ===
    #[error("Insufficient token balance: need {needed}, have {available}")]
    InsufficientBalance { needed: i64, available: i64 },

    // === System Errors ===
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal system error: {0}")]
    System(String),
}

impl UssdError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            UssdError::UnknownShortCode(_) => "UNKNOWN_SHORT_CODE",
            UssdError::NoActiveMenu(_) => "NO_ACTIVE_MENU",
            UssdError::InvalidSelection => "INVALID_SELECTION",
            UssdError::DuplicateOrLateNotification(_) => "DUPLICATE_OR_LATE_NOTIFICATION",
            UssdError::MalformedCost => "MALFORMED_COST",
            UssdError::MenuNotFound(_) => "MENU_NOT_FOUND",
            UssdError::MenuItemNotFound(_) => "MENU_ITEM_NOT_FOUND",
            UssdError::InvalidResponseType(_) => "INVALID_RESPONSE_TYPE",
            UssdError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            UssdError::Database(_) => "DATABASE_ERROR",
            UssdError::System(_) => "SYSTEM_ERROR",
        }
    }

    /// Get HTTP status code suggestion (management surface only)
    pub fn http_status(&self) -> u16 {
        match self {
            UssdError::InvalidSelection | UssdError::InvalidResponseType(_) => 400,
            UssdError::UnknownShortCode(_)
            | UssdError::NoActiveMenu(_)
            | UssdError::MenuNotFound(_)
            | UssdError::MenuItemNotFound(_) => 404,
            UssdError::DuplicateOrLateNotification(_) | UssdError::MalformedCost => 409,
            UssdError::InsufficientBalance { .. } => 402,
            UssdError::Database(_) | UssdError::System(_) => 500,
        }
    }
}

impl From<sqlx::Error> for UssdError {
    fn from(e: sqlx::Error) -> Self {
        UssdError::Database(e.to_string())
    }
}

impl From<anyhow::Error> for UssdError {
    fn from(e: anyhow::Error) -> Self {
        UssdError::System(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            UssdError::UnknownShortCode("*347*102#".into()).code(),
            "UNKNOWN_SHORT_CODE"
        );
        assert_eq!(UssdError::InvalidSelection.code(), "INVALID_SELECTION");
        assert_eq!(UssdError::MalformedCost.code(), "MALFORMED_COST");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(UssdError::MenuNotFound(7).http_status(), 404);
        assert_eq!(
            UssdError::InsufficientBalance {
                needed: 10,
                available: 3
            }
            .http_status(),
            402
        );
        assert_eq!(UssdError::Database("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_display() {
        let err = UssdError::UnknownShortCode("*384*19379#".into());
        assert_eq!(err.to_string(), "No client owns short code: *384*19379#");
    }
}
