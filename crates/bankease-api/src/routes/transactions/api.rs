//! Transaction detail HTMX endpoints
//!
//! Endpoints:
//! - htmx_cancel_transaction: Cancel the selected transaction (POST /transactions/cancel)
//! - htmx_back: Return to the overview (POST /transactions/back)
//! - htmx_transaction_contact_support: Open support (POST /transactions/contact-support)
//! - htmx_view_history: Open the history (POST /transactions/view-history)

use bankease_core::{Action, DispatchOutcome};

use super::page::cancel_message;
use crate::{dispatch_and_render, render_screen, ApiError, AppState};

/// Cancel and re-render the detail screen with the outcome as a notice
pub async fn htmx_cancel_transaction(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    let (outcome, snapshot) = state.apply(Action::CancelTransaction).await?;
    let notice = match outcome {
        DispatchOutcome::Cancel { cancel } => Some(cancel_message(&cancel)),
        DispatchOutcome::Ignored { reason } => Some(reason),
        DispatchOutcome::Applied => None,
    };
    Ok(axum::response::Html(render_screen(&state, &headers, &snapshot, notice.as_deref())))
}

pub async fn htmx_back(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::Back).await
}

pub async fn htmx_transaction_contact_support(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::ContactSupport).await
}

pub async fn htmx_view_history(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::ViewHistory).await
}
