//! Support endpoints
//!
//! Endpoints:
//! - api_faq: FAQ search (JSON)
//! - htmx_faq_results: FAQ search results (HTML fragment)
//! - htmx_contact_support: Contact support from the FAQ screen (POST /support/contact)

use std::collections::HashMap;

use axum::extract::Query;
use axum::Json;
use bankease_core::fixtures::FAQ_ENTRIES;
use bankease_core::{faq, Action, FaqSearch};

use super::page::render_faq_results;
use crate::{dispatch_and_render, ApiError, AppState};

fn query_text(params: &HashMap<String, String>) -> &str {
    params.get("q").map(|s| s.as_str()).unwrap_or("")
}

/// Search the FAQ catalog (JSON API)
pub async fn api_faq(params: Query<HashMap<String, String>>) -> Json<FaqSearch<'static>> {
    Json(faq::search(&FAQ_ENTRIES, query_text(&params)))
}

/// HTMX: results list for the search box
pub async fn htmx_faq_results(
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let query = query_text(&params);
    log::debug!("FAQ search: {:?}", query);
    axum::response::Html(render_faq_results(&faq::search(&FAQ_ENTRIES, query)))
}

pub async fn htmx_contact_support(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::ContactSupport).await
}
