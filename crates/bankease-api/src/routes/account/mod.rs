//! Account overview routes - Balance, trends and recent activity

pub mod api;
pub mod page;

pub use api::{api_account_summary, htmx_pay_bills, htmx_view_transactions};
pub use page::render_account;
