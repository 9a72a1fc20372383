//! HTTP handlers
//!
//! Each handler translates a JSON request into domain values, delegates to
//! the store or the transfer service, and maps the outcome into the response
//! envelope. No business logic lives here.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use super::state::AppState;
use super::types::{
    AccountView, ApiError, ApiResult, CreateAccountRequest, CreateTransferRequest, created, ok,
};
use crate::account::Account;
use crate::core_types::AccountId;
use crate::transfer::{TransferReceipt, TransferRequest};

/// POST /api/v1/accounts
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<AccountView> {
    let account = Account::with_balance(req.account_id, req.balance);

    match state.store.create(account.clone()).await {
        Ok(()) => created(account.into()),
        Err(e) => {
            tracing::warn!("account creation rejected: {}", e);
            ApiError::from(&e).into_err()
        }
    }
}

/// GET /api/v1/accounts/{account_id}
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<AccountId>,
) -> ApiResult<AccountView> {
    match state.store.get(&account_id).await {
        Some(account) => ok(account.into()),
        None => ApiError::not_found(format!("account {} not found", account_id)).into_err(),
    }
}

/// POST /api/v1/transfers
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTransferRequest>,
) -> ApiResult<TransferReceipt> {
    let request =
        match TransferRequest::new(req.source_id, req.destination_id, req.amount.inner()) {
            Ok(request) => request,
            Err(e) => return ApiError::from(&e).into_err(),
        };

    match state.transfers.make_transfer(&request).await {
        Ok(receipt) => ok(receipt),
        Err(e) => {
            tracing::warn!(code = e.code(), "transfer rejected: {}", e);
            ApiError::from(&e).into_err()
        }
    }
}
