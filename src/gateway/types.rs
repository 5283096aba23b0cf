//! API response types and error codes for the management surface
//!
//! The USSD callback endpoints do NOT use these wrappers; they answer the
//! aggregator with raw `CON `/`END ` plain text.

use crate::error::UssdError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_BALANCE: i32 = 1002;

    // Resource errors (4xxx)
    pub const MENU_NOT_FOUND: i32 = 4001;
    pub const MENU_ITEM_NOT_FOUND: i32 = 4002;
    pub const CLIENT_NOT_FOUND: i32 = 4003;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Management-surface error carrying an HTTP status and an error code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Wrap data in the success envelope
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn not_found(code: i32, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code, self.msg);
        (self.status, Json(body)).into_response()
    }
}

impl From<UssdError> for ApiError {
    fn from(e: UssdError) -> Self {
        let status =
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = match &e {
            UssdError::MenuNotFound(_) => error_codes::MENU_NOT_FOUND,
            UssdError::MenuItemNotFound(_) => error_codes::MENU_ITEM_NOT_FOUND,
            UssdError::UnknownShortCode(_) => error_codes::CLIENT_NOT_FOUND,
            UssdError::InsufficientBalance { .. } => error_codes::INSUFFICIENT_BALANCE,
            UssdError::InvalidSelection | UssdError::InvalidResponseType(_) => {
                error_codes::INVALID_PARAMETER
            }
            _ => error_codes::INTERNAL_ERROR,
        };
        Self::new(status, code, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(7);
        assert_eq!(resp.code, 0);
        assert_eq!(resp.msg, "ok");
        assert_eq!(resp.data, Some(7));
    }

    #[test]
    fn test_error_mapping_from_ussd_error() {
        let err: ApiError = UssdError::MenuNotFound(9).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, error_codes::MENU_NOT_FOUND);

        let err: ApiError = UssdError::Database("down".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, error_codes::INTERNAL_ERROR);
    }
}
