//! Gateway request/response types
//!
//! - [`StrictDecimal`]: format-validated decimal at the serde layer
//! - [`ApiResponse<T>`]: unified response envelope
//! - Request DTOs for the account and transfer endpoints

use axum::Json;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core_types::AccountId;
use crate::store::StoreError;
use crate::transfer::TransferError;

// ============================================================================
// StrictDecimal: Format-Validated Decimal at Serde Layer
// ============================================================================

/// Strict format Decimal - validates format during deserialization.
///
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects negative numbers
/// - Rejects empty strings
///
/// Business validation (positivity of transfer amounts) happens later in
/// `TransferRequest::new`.
#[derive(Debug, Clone, Copy)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Support both JSON number and JSON string
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            String(String),
            Number(Decimal),
        }

        let value = DecimalOrString::deserialize(deserializer)?;

        let d = match value {
            DecimalOrString::String(s) => {
                if s.is_empty() {
                    return Err(D::Error::custom("Amount cannot be empty"));
                }
                if s.starts_with('.') {
                    return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
                }
                if s.ends_with('.') {
                    return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
                }
                Decimal::from_str(&s)
                    .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?
            }
            DecimalOrString::Number(d) => d,
        };

        if d.is_sign_negative() {
            return Err(D::Error::custom("Amount cannot be negative"));
        }

        Ok(StrictDecimal(d))
    }
}

impl Serialize for StrictDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Custom deserializer for non-empty strings
fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("string cannot be empty"));
    }
    Ok(s)
}

/// POST /api/v1/accounts request body.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub account_id: AccountId,
    /// Opening balance; may be negative for accounts created in debt.
    #[serde(default)]
    pub balance: Decimal,
}

/// POST /api/v1/transfers request body.
#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub source_id: AccountId,
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub destination_id: AccountId,
    /// Format validated by StrictDecimal; positivity by `TransferRequest::new`.
    pub amount: StrictDecimal,
}

/// Account view returned by the account endpoints.
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub account_id: AccountId,
    pub balance: Decimal,
}

impl From<crate::account::Account> for AccountView {
    fn from(account: crate::account::Account) -> Self {
        Self {
            account_id: account.account_id,
            balance: account.balance,
        }
    }
}

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: "OK" for success, a stable error code otherwise
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: "OK".to_string(),
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: impl Into<String>, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code: code.into(),
            msg: msg.into(),
            data: None,
        }
    }
}

/// Handler result: enveloped payload or enveloped error.
pub type ApiResult<T> =
    Result<(StatusCode, Json<ApiResponse<T>>), (StatusCode, Json<ApiResponse<()>>)>;

/// 200 success helper
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 success helper
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

/// Error carrying the HTTP status plus the envelope code/message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "ACCOUNT_NOT_FOUND", msg)
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err((self.status, Json(ApiResponse::<T>::error(self.code, self.msg))))
    }
}

impl From<&TransferError> for ApiError {
    fn from(err: &TransferError) -> Self {
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, err.code(), err.to_string())
    }
}

impl From<&StoreError> for ApiError {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::DuplicateAccountId(_) => {
                Self::new(StatusCode::BAD_REQUEST, "DUPLICATE_ACCOUNT_ID", err.to_string())
            }
        }
    }
}
