//! Route modules for the API server
//!
//! One module per screen. Each module follows the same structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX action handlers
//! - page.rs: Screen rendering

pub mod account;
pub mod onboarding;
pub mod settings;
pub mod support;
pub mod transactions;
pub mod welcome;
