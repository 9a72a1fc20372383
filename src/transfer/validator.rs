//! Transfer validation
//!
//! Pure decision function: given whatever the store returned for both legs
//! and the request, either accept or return the first applicable rejection.
//! The check order is fixed and observable through error messages, so it
//! must not be rearranged.

use rust_decimal::Decimal;

use super::error::TransferError;
use super::types::TransferRequest;
use crate::account::Account;

/// Validate a transfer against the resolved accounts.
///
/// Checks, first failure wins:
/// 1. source account exists
/// 2. destination account exists
/// 3. source and destination differ
/// 4. source balance covers the amount
///
/// No side effects; deterministic. On acceptance the validated pair is
/// returned so callers never unwrap the options a second time.
pub fn validate<'a>(
    source: Option<&'a Account>,
    destination: Option<&'a Account>,
    request: &TransferRequest,
) -> Result<(&'a Account, &'a Account), TransferError> {
    let source = source
        .ok_or_else(|| TransferError::AccountNotFound(request.source_id().clone()))?;
    let destination = destination
        .ok_or_else(|| TransferError::AccountNotFound(request.destination_id().clone()))?;

    if request.source_id() == request.destination_id() {
        return Err(TransferError::TransferToSelf);
    }

    if source.balance - request.amount() < Decimal::ZERO {
        return Err(TransferError::InsufficientFunds {
            account_id: source.account_id.clone(),
            balance: source.balance,
        });
    }

    Ok((source, destination))
}
