//! Transaction detail routes
//!
//! Structure:
//! - api.rs: HTMX action handlers for the detail screen
//! - page.rs: Detail rendering

pub mod api;
pub mod page;

pub use api::{
    htmx_back, htmx_cancel_transaction, htmx_transaction_contact_support, htmx_view_history,
};
pub use page::{cancel_message, render_transaction};
