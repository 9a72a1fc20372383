//! Account Store
//!
//! The store is the single shared mutable resource in the system. It owns
//! the id -> account mapping and exposes three operations: create, single
//! lookup, and an all-or-nothing batch balance adjustment.
//!
//! # Thread Safety
//!
//! [`MemoryAccountStore`] guards the whole map with one `RwLock`.
//! `apply_batch` takes the write lock and re-validates every debit under
//! that lock, so two concurrent transfers sharing a source account cannot
//! jointly overdraw it even though each was validated against a balance
//! read taken before the lock. Reads go through the read lock, so no
//! observer can ever see one leg of a batch applied without the other.

use std::collections::hash_map::Entry;
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::account::{Account, AccountUpdate};
use crate::core_types::AccountId;

/// Store-level failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("account id {0} already exists")]
    DuplicateAccountId(AccountId),
}

/// Contract consumed by the transfer orchestrator.
///
/// Implementations must be safe for concurrent callers; the orchestrator
/// itself holds no locks.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Register a new account. Fails if the identifier already exists.
    async fn create(&self, account: Account) -> Result<(), StoreError>;

    /// Single lookup; `None` on miss.
    async fn get(&self, account_id: &AccountId) -> Option<Account>;

    /// Apply a sequence of balance deltas as one atomic unit.
    ///
    /// Returns whether all updates were applied. When `true`, the whole
    /// batch becomes visible at once; when `false`, no balance changed.
    /// A batch is refused if any referenced account is missing or if any
    /// debit would drive a balance below zero.
    async fn apply_batch(&self, updates: &[AccountUpdate]) -> bool;
}

/// In-memory store backed by a single `RwLock`-guarded map.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<FxHashMap<AccountId, Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().expect("account map lock poisoned");
        match accounts.entry(account.account_id.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateAccountId(account.account_id)),
            Entry::Vacant(slot) => {
                tracing::info!(account_id = %account.account_id, balance = %account.balance, "account created");
                slot.insert(account);
                Ok(())
            }
        }
    }

    async fn get(&self, account_id: &AccountId) -> Option<Account> {
        let accounts = self.accounts.read().expect("account map lock poisoned");
        accounts.get(account_id).cloned()
    }

    async fn apply_batch(&self, updates: &[AccountUpdate]) -> bool {
        let mut accounts = self.accounts.write().expect("account map lock poisoned");

        // Stage every new balance first; commit only if every leg is valid.
        // The funds check is repeated here because the caller's validation
        // ran against a balance read taken before this lock.
        let mut staged: FxHashMap<&AccountId, Decimal> = FxHashMap::default();
        for update in updates {
            let current = match staged.get(&update.account_id) {
                Some(balance) => *balance,
                None => match accounts.get(&update.account_id) {
                    Some(account) => account.balance,
                    None => {
                        tracing::warn!(
                            account_id = %update.account_id,
                            "batch adjustment references unknown account"
                        );
                        return false;
                    }
                },
            };

            let next = current + update.delta;
            if update.delta < Decimal::ZERO && next < Decimal::ZERO {
                tracing::warn!(
                    account_id = %update.account_id,
                    balance = %current,
                    delta = %update.delta,
                    "batch adjustment would overdraw account"
                );
                return false;
            }
            staged.insert(&update.account_id, next);
        }

        for (account_id, balance) in staged {
            if let Some(account) = accounts.get_mut(account_id) {
                account.balance = balance;
            }
        }
        true
    }
}
