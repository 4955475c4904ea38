//! Account overview endpoints
//!
//! Endpoints:
//! - api_account_summary: Balance, trends and activity (JSON)
//! - htmx_view_transactions: Open the sample transaction (POST /account/view-transactions)
//! - htmx_pay_bills: Open the sample bill payment (POST /account/pay-bills)

use axum::Json;
use bankease_core::{AccountSnapshot, Action};

use crate::{dispatch_and_render, ApiError, AppState};

pub async fn api_account_summary(state: axum::extract::State<AppState>) -> Json<AccountSnapshot> {
    Json(state.account_snapshot())
}

pub async fn htmx_view_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::ViewTransactions).await
}

pub async fn htmx_pay_bills(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::PayBills).await
}
