//! Transfer Error Types

use rust_decimal::Decimal;
use thiserror::Error;

use crate::core_types::AccountId;

/// Transfer failure taxonomy.
///
/// Every rejection a caller can observe is a variant here, so callers handle
/// each case explicitly instead of catching a blanket failure. All variants
/// are local and recoverable; none is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    /// Either leg's account is missing.
    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    #[error("transfer to self not permitted")]
    TransferToSelf,

    /// The source balance minus the requested amount would be negative.
    /// Carries the pre-transfer balance for caller-facing messages.
    #[error("not enough funds on account {account_id}, balance={balance}")]
    InsufficientFunds {
        account_id: AccountId,
        balance: Decimal,
    },

    /// The store reported that the atomic batch update did not apply,
    /// e.g. a concurrent transfer invalidated the funds check between
    /// validation and apply.
    #[error("balance adjustment was not applied")]
    AdjustmentFailed,

    /// Produced by `TransferRequest::new` for a non-positive amount;
    /// never produced by the orchestrator.
    #[error("transfer amount must be greater than zero")]
    InvalidAmount,
}

impl TransferError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::TransferToSelf => "TRANSFER_TO_SELF",
            TransferError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            TransferError::AdjustmentFailed => "ADJUSTMENT_FAILED",
            TransferError::InvalidAmount => "INVALID_AMOUNT",
        }
    }

    /// HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::AccountNotFound(_) => 404,
            TransferError::TransferToSelf | TransferError::InvalidAmount => 400,
            TransferError::InsufficientFunds { .. } => 422,
            TransferError::AdjustmentFailed => 409,
        }
    }
}
