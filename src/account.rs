//! Account domain types
//!
//! [`Account`] is the unit of balance ownership. [`AccountUpdate`] is the
//! unit of the store's batch adjustment: one signed delta against one
//! account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core_types::AccountId;

/// An account holding a monetary balance.
///
/// The identifier is immutable after creation. The balance is mutated only
/// through the store's batch adjustment; it may be negative only if the
/// account was created that way - transfers never push it below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub balance: Decimal,
}

impl Account {
    /// Create an account with a zero balance.
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self::with_balance(account_id, Decimal::ZERO)
    }

    /// Create an account with an opening balance.
    pub fn with_balance(account_id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
        }
    }
}

/// A signed balance delta against one account.
///
/// Transfers build these in equal-magnitude, opposite-sign pairs, so a
/// batch's net effect on total system balance is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub account_id: AccountId,
    pub delta: Decimal,
}

impl AccountUpdate {
    pub fn new(account_id: impl Into<AccountId>, delta: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            delta,
        }
    }
}
