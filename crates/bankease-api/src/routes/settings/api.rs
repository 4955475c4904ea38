//! Settings endpoints
//!
//! Endpoints:
//! - api_settings: Loaded configuration and current preferences (JSON)
//! - htmx_save_preferences: Apply the preferences form (POST /settings/preferences)
//! - htmx_logout: End the session (POST /settings/logout)

use axum::extract::Form;
use axum::Json;
use bankease_core::{Action, Language};
use serde::Deserialize;

use crate::{dispatch_and_render, render_screen, ApiError, AppState};

/// Preferences form. Unchecked boxes are absent from the body.
#[derive(Debug, Deserialize)]
pub struct PreferencesForm {
    pub language: Language,
    #[serde(default)]
    pub transaction_alerts: Option<String>,
    #[serde(default)]
    pub dark_mode: Option<String>,
}

impl PreferencesForm {
    /// One action per preference
    pub fn into_actions(self) -> Vec<Action> {
        vec![
            Action::SetLanguage { language: self.language },
            Action::SetTransactionAlerts {
                enabled: self.transaction_alerts.is_some(),
            },
            Action::SetDarkMode {
                enabled: self.dark_mode.is_some(),
            },
        ]
    }
}

pub async fn api_settings(state: axum::extract::State<AppState>) -> Json<serde_json::Value> {
    let snapshot = state.snapshot().await;
    Json(serde_json::json!({
        "config": state.config,
        "preferences": snapshot.preferences,
    }))
}

/// Apply every preference under one lock
pub async fn htmx_save_preferences(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<PreferencesForm>,
) -> Result<axum::response::Html<String>, ApiError> {
    let snapshot = {
        let mut session = state.session.write().await;
        for action in form.into_actions() {
            session.dispatch(action)?;
        }
        session.snapshot()
    };
    log::info!("Preferences updated: {:?}", snapshot.preferences);
    Ok(axum::response::Html(render_screen(
        &state,
        &headers,
        &snapshot,
        Some("Preferences saved."),
    )))
}

pub async fn htmx_logout(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::Logout).await
}
