//! Support routes - FAQ search

pub mod api;
pub mod page;

pub use api::{api_faq, htmx_contact_support, htmx_faq_results};
pub use page::{render_faq_results, render_support};
