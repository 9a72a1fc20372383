//! HTTP Gateway
//!
//! Thin adapter over the transfer core: translates JSON requests into domain
//! values and domain errors into response envelopes. The routes:
//!
//! - `POST /api/v1/accounts` - create an account
//! - `GET  /api/v1/accounts/{account_id}` - look up an account
//! - `POST /api/v1/transfers` - move funds between two accounts

pub mod handlers;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the gateway router over the shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/accounts", post(handlers::create_account))
        .route("/api/v1/accounts/{account_id}", get(handlers::get_account))
        .route("/api/v1/transfers", post(handlers::create_transfer))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "gateway listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
