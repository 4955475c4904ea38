//! Welcome routes - Landing card

pub mod api;
pub mod page;

pub use api::htmx_start;
pub use page::render_welcome;
