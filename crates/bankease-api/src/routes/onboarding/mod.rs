//! Onboarding routes - Feature selection

pub mod api;
pub mod page;

pub use api::{api_onboarding_features, htmx_complete_onboarding, htmx_skip_onboarding};
pub use page::render_onboarding;
