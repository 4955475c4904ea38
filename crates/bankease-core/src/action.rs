//! User actions and the delegates they notify
//!
//! The presentation layer turns every control into an [`Action`] and hands
//! it to [`crate::Session::dispatch`]. Requests that leave the core
//! (contacting support, viewing history, logging out, cancelling) are also
//! reported to an [`ActionDelegate`] supplied when the session is built.

use std::collections::BTreeSet;

use bankease_config::Language;
use serde::{Deserialize, Serialize};

use crate::models::TransactionRecord;
use crate::types::Screen;

/// Everything the user can do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// "Get Started" on the welcome card
    Start,
    CompleteOnboarding {
        #[serde(default)]
        selections: BTreeSet<String>,
    },
    SkipOnboarding,
    /// Overview "View Transactions" button
    ViewTransactions,
    /// Overview "Pay Bills" button
    PayBills,
    /// Open an arbitrary record
    OpenTransaction { transaction: Box<TransactionRecord> },
    CancelTransaction,
    NavigateTo { screen: Screen },
    Back,
    Logout,
    ContactSupport,
    ViewHistory,
    SetLanguage { language: Language },
    SetTransactionAlerts { enabled: bool },
    SetDarkMode { enabled: bool },
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::CompleteOnboarding { .. } => "complete_onboarding",
            Action::SkipOnboarding => "skip_onboarding",
            Action::ViewTransactions => "view_transactions",
            Action::PayBills => "pay_bills",
            Action::OpenTransaction { .. } => "open_transaction",
            Action::CancelTransaction => "cancel_transaction",
            Action::NavigateTo { .. } => "navigate_to",
            Action::Back => "back",
            Action::Logout => "logout",
            Action::ContactSupport => "contact_support",
            Action::ViewHistory => "view_history",
            Action::SetLanguage { .. } => "set_language",
            Action::SetTransactionAlerts { .. } => "set_transaction_alerts",
            Action::SetDarkMode { .. } => "set_dark_mode",
        }
    }
}

/// Boundary callbacks the core invokes but does not implement.
/// Return values are never consumed.
pub trait ActionDelegate: Send + Sync {
    fn contact_support(&self) {}

    fn view_history(&self) {}

    fn logged_out(&self) {}

    fn cancel_requested(&self, _transaction_id: Option<&str>) {}
}

/// Delegate that only records the requests in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDelegate;

impl ActionDelegate for LoggingDelegate {
    fn contact_support(&self) {
        log::info!("Contact support requested");
    }

    fn view_history(&self) {
        log::info!("View history requested");
    }

    fn logged_out(&self) {
        log::info!("User logged out");
    }

    fn cancel_requested(&self, transaction_id: Option<&str>) {
        log::info!("Cancel transaction requested for: {}", transaction_id.unwrap_or("<none>"));
    }
}
