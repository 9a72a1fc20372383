//! Transfer notifications
//!
//! Delivery is fire-and-forget from the transfer's perspective: the core
//! never branches on a notification outcome, and nothing is sent unless the
//! balance adjustment already succeeded.

use async_trait::async_trait;

use crate::account::Account;

/// Contract for informing an account owner about a transfer.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` to the owner of `account`.
    async fn notify(&self, account: &Account, message: &str);
}

/// Log-backed notifier.
///
/// A real deployment would hand the message to an email or push provider
/// here; the contract observed by the transfer core is identical either way.
#[derive(Debug, Default)]
pub struct EmailNotifier;

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, account: &Account, message: &str) {
        tracing::info!(
            account_id = %account.account_id,
            message,
            "sending notification to account owner"
        );
    }
}


#[cfg(test)]
pub use mock::MockNotifier;
