//! Onboarding endpoints
//!
//! Endpoints:
//! - api_onboarding_features: Selectable features (JSON)
//! - htmx_complete_onboarding: Submit the checked features (POST /onboarding/complete)
//! - htmx_skip_onboarding: Continue without a selection (POST /onboarding/skip)

use std::collections::{BTreeSet, HashMap};

use axum::extract::Form;
use axum::Json;
use bankease_core::fixtures::{onboarding_feature, ONBOARDING_FEATURES};
use bankease_core::{Action, OnboardingFeature};

use crate::{dispatch_and_render, ApiError, AppState};

/// Features offered during onboarding (JSON API)
pub async fn api_onboarding_features() -> Json<&'static [OnboardingFeature]> {
    Json(&ONBOARDING_FEATURES[..])
}

/// Checked boxes arrive as `<feature id>=on`; unknown keys are dropped
pub async fn htmx_complete_onboarding(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> Result<axum::response::Html<String>, ApiError> {
    let selections: BTreeSet<String> = params
        .into_iter()
        .filter(|(key, value)| value != "off" && onboarding_feature(key).is_some())
        .map(|(key, _)| key)
        .collect();
    log::debug!("Onboarding selections: {:?}", selections);
    dispatch_and_render(&state, &headers, Action::CompleteOnboarding { selections }).await
}

pub async fn htmx_skip_onboarding(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    dispatch_and_render(&state, &headers, Action::SkipOnboarding).await
}
