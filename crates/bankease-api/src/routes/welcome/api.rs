//! Welcome HTMX endpoints
//!
//! Endpoints:
//! - htmx_start: "Get Started" (POST /welcome/start)

use crate::{dispatch_and_render, ApiError, AppState};
use bankease_core::Action;

pub async fn htmx_start(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::Start).await
}
