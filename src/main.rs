//! fundwire - account transfer service
//!
//! Entry point: load config, install logging, assemble the store, notifier
//! and transfer service, then serve the HTTP gateway.
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────────┐    ┌──────────┐
//! │  Config  │───▶│  Gateway  │───▶│ TransferSvc  │───▶│ Notifier │
//! │  (YAML)  │    │  (axum)   │    │ (validate +  │    │  (log)   │
//! └──────────┘    └───────────┘    │  apply_batch)│    └──────────┘
//!                                  └──────┬───────┘
//!                                         ▼
//!                                  MemoryAccountStore
//! ```

use std::sync::Arc;

use fundwire::config::AppConfig;
use fundwire::gateway::{self, state::AppState};
use fundwire::logging::init_logging;
use fundwire::notifier::EmailNotifier;
use fundwire::store::{AccountStore, MemoryAccountStore};
use fundwire::transfer::TransferService;

fn get_env() -> String {
    std::env::args().nth(1).unwrap_or_else(|| "dev".to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(&get_env());
    let _guard = init_logging(&config);

    let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
    let notifier = Arc::new(EmailNotifier);
    let transfers = Arc::new(TransferService::new(store.clone(), notifier));
    let state = Arc::new(AppState::new(store, transfers));

    gateway::serve(&config.gateway, state).await
}
