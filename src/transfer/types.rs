//! Transfer request and receipt types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::TransferError;
use crate::core_types::AccountId;

/// A request to move an amount from one account to another.
///
/// # Invariants (ENFORCED by private fields):
/// - The amount is strictly positive; the constructor is the only way to
///   build a request, so a `TransferRequest` that exists always carries a
///   valid amount
///
/// Requests are ephemeral - built per call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRequest {
    source_id: AccountId,
    destination_id: AccountId,
    amount: Decimal,
}

impl TransferRequest {
    /// Build a request; rejects non-positive amounts.
    pub fn new(
        source_id: impl Into<AccountId>,
        destination_id: impl Into<AccountId>,
        amount: Decimal,
    ) -> Result<Self, TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }
        Ok(Self {
            source_id: source_id.into(),
            destination_id: destination_id.into(),
            amount,
        })
    }

    pub fn source_id(&self) -> &AccountId {
        &self.source_id
    }

    pub fn destination_id(&self) -> &AccountId {
        &self.destination_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Success value returned by the orchestrator once both legs applied and
/// both parties were notified.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub source_id: AccountId,
    pub destination_id: AccountId,
    pub amount: Decimal,
    pub completed_at: DateTime<Utc>,
}
