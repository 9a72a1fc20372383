//! End-to-end transfer flow tests over the public API
//!
//! These run against the real in-memory store; the notifier is a local
//! recording implementation so delivery can be verified.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use fundwire::{
    Account, AccountId, AccountStore, MemoryAccountStore, Notifier, TransferError,
    TransferRequest, TransferService,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[derive(Default)]
struct RecordingNotifier {
    deliveries: Mutex<Vec<(AccountId, String)>>,
}

impl RecordingNotifier {
    fn deliveries(&self) -> Vec<(AccountId, String)> {
        self.deliveries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, account: &Account, message: &str) {
        self.deliveries
            .lock()
            .unwrap()
            .push((account.account_id.clone(), message.to_string()));
    }
}

struct Harness {
    service: Arc<TransferService>,
    store: Arc<MemoryAccountStore>,
    notifier: Arc<RecordingNotifier>,
}

impl Harness {
    fn new() -> Self {
        let store = Arc::new(MemoryAccountStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = Arc::new(TransferService::new(store.clone(), notifier.clone()));
        Self {
            service,
            store,
            notifier,
        }
    }

    async fn seed(&self, id: &str, balance: &str) {
        self.store
            .create(Account::with_balance(id, dec(balance)))
            .await
            .unwrap();
    }

    async fn balance(&self, id: &str) -> Decimal {
        self.store.get(&id.to_string()).await.unwrap().balance
    }
}

#[tokio::test]
async fn transfer_moves_funds_and_notifies_each_party_once() {
    let h = Harness::new();
    h.seed("alice", "1300.74").await;
    h.seed("bob", "500.00").await;

    let request = TransferRequest::new("alice", "bob", dec("200.74")).unwrap();
    h.service.make_transfer(&request).await.unwrap();

    assert_eq!(h.balance("alice").await, dec("1100.00"));
    assert_eq!(h.balance("bob").await, dec("700.74"));

    let deliveries = h.notifier.deliveries();
    let to_alice: Vec<_> = deliveries.iter().filter(|(id, _)| id == "alice").collect();
    let to_bob: Vec<_> = deliveries.iter().filter(|(id, _)| id == "bob").collect();
    assert_eq!(to_alice.len(), 1);
    assert_eq!(to_bob.len(), 1);
    assert!(to_alice[0].1.contains("200.74"));
    assert!(to_bob[0].1.contains("200.74"));
}

#[tokio::test]
async fn rejected_transfer_leaves_no_trace() {
    let h = Harness::new();
    h.seed("alice", "100").await;
    h.seed("bob", "50").await;

    let request = TransferRequest::new("alice", "bob", dec("100.01")).unwrap();
    let err = h.service.make_transfer(&request).await.unwrap_err();

    assert_eq!(
        err,
        TransferError::InsufficientFunds {
            account_id: "alice".to_string(),
            balance: dec("100"),
        }
    );
    assert_eq!(h.balance("alice").await, dec("100"));
    assert_eq!(h.balance("bob").await, dec("50"));
    assert!(h.notifier.deliveries().is_empty());
}

#[tokio::test]
async fn destination_missing_reported_only_when_source_exists() {
    let h = Harness::new();
    h.seed("alice", "10").await;

    // Source missing wins the ordering
    let request = TransferRequest::new("ghost", "also-ghost", dec("1")).unwrap();
    let err = h.service.make_transfer(&request).await.unwrap_err();
    assert_eq!(err, TransferError::AccountNotFound("ghost".to_string()));

    // With an existing source, the destination is the one reported
    let request = TransferRequest::new("alice", "ghost", dec("1")).unwrap();
    let err = h.service.make_transfer(&request).await.unwrap_err();
    assert_eq!(err, TransferError::AccountNotFound("ghost".to_string()));
}

#[tokio::test]
async fn concurrent_transfers_cannot_jointly_overdraw_source() {
    let h = Harness::new();
    h.seed("src", "100").await;
    for i in 0..10 {
        h.seed(&format!("dst-{i}"), "0").await;
    }

    let mut tasks = Vec::new();
    for i in 0..10 {
        let service = h.service.clone();
        tasks.push(tokio::spawn(async move {
            let request =
                TransferRequest::new("src", format!("dst-{i}"), dec("60")).unwrap();
            service.make_transfer(&request).await
        }));
    }

    let mut successes = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => successes += 1,
            Err(TransferError::InsufficientFunds { .. })
            | Err(TransferError::AdjustmentFailed) => {}
            Err(other) => panic!("unexpected rejection: {other}"),
        }
    }

    // 100 covers exactly one 60-unit transfer
    assert_eq!(successes, 1);
    assert_eq!(h.balance("src").await, dec("40"));

    let mut total = h.balance("src").await;
    for i in 0..10 {
        total += h.balance(&format!("dst-{i}")).await;
    }
    assert_eq!(total, dec("100"));
}

#[tokio::test]
async fn total_balance_conserved_under_concurrent_load() {
    let h = Harness::new();
    h.seed("a", "1000").await;
    h.seed("b", "1000").await;
    h.seed("c", "1000").await;

    let pairs = [("a", "b"), ("b", "c"), ("c", "a"), ("a", "c"), ("b", "a")];

    let mut tasks = Vec::new();
    for round in 0..6 {
        for (from, to) in pairs {
            let service = h.service.clone();
            let amount = dec("17.35") * Decimal::from(round + 1);
            tasks.push(tokio::spawn(async move {
                let request = TransferRequest::new(from, to, amount).unwrap();
                // Rejections are fine; only conservation matters here
                let _ = service.make_transfer(&request).await;
            }));
        }
    }
    for task in tasks {
        task.await.unwrap();
    }

    let total = h.balance("a").await + h.balance("b").await + h.balance("c").await;
    assert_eq!(total, dec("3000"));
}
