//! Settings routes - Preferences and logout

pub mod api;
pub mod page;

pub use api::{api_settings, htmx_logout, htmx_save_preferences, PreferencesForm};
pub use page::render_settings;
