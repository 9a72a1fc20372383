//! Transfer Orchestrator
//!
//! Coordinates lookup -> validation -> atomic balance adjustment ->
//! notification, and defines the failure/success contract callers observe.
//!
//! The service is stateless and re-entrant: any number of callers may invoke
//! it concurrently against the shared store, which is the only shared
//! mutable resource. Because the store re-validates funds under its own
//! lock, a transfer that passed validation can still come back as
//! [`TransferError::AdjustmentFailed`] when a concurrent transfer won the
//! race; that outcome is surfaced to the caller rather than retried here.

use std::sync::Arc;

use chrono::Utc;

use super::error::TransferError;
use super::types::{TransferReceipt, TransferRequest};
use super::validator;
use crate::account::AccountUpdate;
use crate::notifier::Notifier;
use crate::store::AccountStore;

/// Orchestrates transfers over an account store and a notifier.
pub struct TransferService {
    store: Arc<dyn AccountStore>,
    notifier: Arc<dyn Notifier>,
}

impl TransferService {
    pub fn new(store: Arc<dyn AccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Atomically move the requested amount between the two accounts.
    ///
    /// On rejection nothing is mutated and nobody is notified. On success
    /// both legs apply as one unit and each party receives exactly one
    /// notification.
    ///
    /// # Errors
    /// - [`TransferError::AccountNotFound`] when either leg is missing
    /// - [`TransferError::TransferToSelf`] for identical legs
    /// - [`TransferError::InsufficientFunds`] when the source cannot cover
    ///   the amount
    /// - [`TransferError::AdjustmentFailed`] when the store refused the
    ///   batch, e.g. after losing a race to a concurrent transfer
    pub async fn make_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, TransferError> {
        let source = self.store.get(request.source_id()).await;
        let destination = self.store.get(request.destination_id()).await;

        let (source, destination) =
            validator::validate(source.as_ref(), destination.as_ref(), request)?;

        let amount = request.amount();
        let applied = self
            .store
            .apply_batch(&[
                AccountUpdate::new(source.account_id.clone(), -amount),
                AccountUpdate::new(destination.account_id.clone(), amount),
            ])
            .await;

        if !applied {
            tracing::warn!(
                source_id = %source.account_id,
                destination_id = %destination.account_id,
                %amount,
                "batch adjustment rejected by store"
            );
            return Err(TransferError::AdjustmentFailed);
        }

        self.notifier
            .notify(
                source,
                &format!(
                    "The transfer to the account with ID {} is now complete for the amount of {}.",
                    destination.account_id, amount
                ),
            )
            .await;
        self.notifier
            .notify(
                destination,
                &format!(
                    "The account with ID {} has transferred {} into your account.",
                    source.account_id, amount
                ),
            )
            .await;

        tracing::info!(
            source_id = %source.account_id,
            destination_id = %destination.account_id,
            %amount,
            "transfer completed"
        );

        Ok(TransferReceipt {
            source_id: source.account_id.clone(),
            destination_id: destination.account_id.clone(),
            amount,
            completed_at: Utc::now(),
        })
    }
}
