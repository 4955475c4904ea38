//! Screen navigation state machine
//!
//! ```text
//! Welcome --start--> Onboarding
//! Onboarding --complete_onboarding/skip_onboarding--> AccountOverview
//! any --open_transaction--> TransactionDetails
//! TransactionDetails --back/view_history--> AccountOverview
//! TransactionDetails|SupportFaq --contact_support--> SupportFaq
//! AccountOverview|Settings|SupportFaq --navigate_to--> {AccountOverview,Settings,SupportFaq}
//! any --logout--> Welcome
//! ```
//!
//! A rejected transition returns a [`RouterError`] and leaves every field
//! untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;
use crate::models::TransactionRecord;
use crate::types::{Screen, TransactionStatus};

/// Result of `cancel_selected_transaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CancelOutcome {
    /// Status moved to `Failed`
    Cancelled { id: String },
    /// Selection exists but is already settled
    NotCancellable { id: String, status: TransactionStatus },
    NoSelection,
}

/// Current screen plus the data the screen needs
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenRouter {
    current: Screen,
    selected_transaction: Option<TransactionRecord>,
    onboarding_selections: BTreeSet<String>,
    clear_onboarding_on_logout: bool,
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRouter {
    /// Router on the welcome screen with nothing selected
    pub fn new() -> Self {
        Self {
            current: Screen::Welcome,
            selected_transaction: None,
            onboarding_selections: BTreeSet::new(),
            clear_onboarding_on_logout: true,
        }
    }

    /// Choose whether `logout` forgets the onboarding selections
    pub fn with_onboarding_cleared_on_logout(mut self, clear: bool) -> Self {
        self.clear_onboarding_on_logout = clear;
        self
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn selected_transaction(&self) -> Option<&TransactionRecord> {
        self.selected_transaction.as_ref()
    }

    pub fn onboarding_selections(&self) -> &BTreeSet<String> {
        &self.onboarding_selections
    }

    /// The detail screen is never current without a selection
    pub fn is_consistent(&self) -> bool {
        self.current != Screen::TransactionDetails || self.selected_transaction.is_some()
    }

    fn require(&self, screen: Screen, action: &'static str) -> Result<(), RouterError> {
        if self.current == screen {
            Ok(())
        } else {
            Err(RouterError::InvalidTransition {
                action,
                from: self.current,
            })
        }
    }

    fn transition(&mut self, to: Screen) {
        log::debug!("Screen transition: {} -> {}", self.current, to);
        self.current = to;
    }

    /// Welcome -> Onboarding
    pub fn start(&mut self) -> Result<(), RouterError> {
        self.require(Screen::Welcome, "start")?;
        self.transition(Screen::Onboarding);
        Ok(())
    }

    /// Record the chosen features and move on to the account overview
    pub fn complete_onboarding<I, S>(&mut self, selections: I) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require(Screen::Onboarding, "complete onboarding")?;
        self.onboarding_selections = selections.into_iter().map(Into::into).collect();
        self.transition(Screen::AccountOverview);
        Ok(())
    }

    /// Onboarding -> AccountOverview with no selections
    pub fn skip_onboarding(&mut self) -> Result<(), RouterError> {
        self.require(Screen::Onboarding, "skip onboarding")?;
        self.onboarding_selections.clear();
        self.transition(Screen::AccountOverview);
        Ok(())
    }

    /// Select `record` and show it. Replaces any previous selection.
    pub fn open_transaction(&mut self, record: TransactionRecord) {
        log::debug!("Opening transaction {}", record.id);
        self.selected_transaction = Some(record);
        self.transition(Screen::TransactionDetails);
    }

    /// Mark an in-flight selection as failed. Never changes the screen.
    pub fn cancel_selected_transaction(&mut self) -> CancelOutcome {
        match self.selected_transaction.as_mut() {
            None => CancelOutcome::NoSelection,
            Some(tx) if tx.status.is_cancellable() => {
                tx.status = TransactionStatus::Failed;
                log::debug!("Transaction {} cancelled", tx.id);
                CancelOutcome::Cancelled { id: tx.id.clone() }
            }
            Some(tx) => CancelOutcome::NotCancellable {
                id: tx.id.clone(),
                status: tx.status,
            },
        }
    }

    /// Jump through the navigation bar
    pub fn navigate_to(&mut self, target: Screen) -> Result<(), RouterError> {
        if target == Screen::TransactionDetails {
            return Err(RouterError::DetailRequiresTransaction);
        }
        if !self.current.has_main_navigation() {
            return Err(RouterError::NavigationUnavailable { from: self.current });
        }
        if !target.has_main_navigation() {
            return Err(RouterError::InvalidTarget { target });
        }
        self.transition(target);
        Ok(())
    }

    /// Return to the welcome screen from anywhere, dropping the selection
    pub fn logout(&mut self) {
        self.selected_transaction = None;
        if self.clear_onboarding_on_logout {
            self.onboarding_selections.clear();
        }
        self.transition(Screen::Welcome);
    }

    /// TransactionDetails -> AccountOverview. The selection is kept.
    pub fn back(&mut self) -> Result<(), RouterError> {
        self.require(Screen::TransactionDetails, "go back")?;
        self.transition(Screen::AccountOverview);
        Ok(())
    }

    /// Leave the detail screen for the history (account overview)
    pub fn view_history(&mut self) -> Result<(), RouterError> {
        self.require(Screen::TransactionDetails, "view history")?;
        self.transition(Screen::AccountOverview);
        Ok(())
    }

    /// Show the support screen from the screens that offer a support button
    pub fn contact_support(&mut self) -> Result<(), RouterError> {
        match self.current {
            Screen::TransactionDetails | Screen::SupportFaq => {
                self.transition(Screen::SupportFaq);
                Ok(())
            }
            from => Err(RouterError::InvalidTransition {
                action: "contact support",
                from,
            }),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{pay_bills_record, view_transactions_record};

    fn at_overview() -> ScreenRouter {
        let mut router = ScreenRouter::new();
        router.start().unwrap();
        router.skip_onboarding().unwrap();
        router
    }

    #[test]
    fn test_initial_state() {
        let router = ScreenRouter::new();
        assert_eq!(router.current(), Screen::Welcome);
        assert!(router.selected_transaction().is_none());
        assert!(router.onboarding_selections().is_empty());
        assert!(router.is_consistent());
    }

    #[test]
    fn test_start_only_from_welcome() {
        let mut router = ScreenRouter::new();
        assert!(router.start().is_ok());
        assert_eq!(router.current(), Screen::Onboarding);

        let before = router.clone();
        assert_eq!(
            router.start(),
            Err(RouterError::InvalidTransition {
                action: "start",
                from: Screen::Onboarding
            })
        );
        assert_eq!(router, before);
    }

    #[test]
    fn test_complete_onboarding_records_selections() {
        let mut router = ScreenRouter::new();
        router.start().unwrap();
        router.complete_onboarding(["budgeting_aids", "savings_goals"]).unwrap();
        assert_eq!(router.current(), Screen::AccountOverview);
        assert_eq!(router.onboarding_selections().len(), 2);
        assert!(router.onboarding_selections().contains("budgeting_aids"));
    }

    #[test]
    fn test_complete_onboarding_accepts_empty_selection() {
        let mut router = ScreenRouter::new();
        router.start().unwrap();
        router.complete_onboarding(Vec::<String>::new()).unwrap();
        assert_eq!(router.current(), Screen::AccountOverview);
        assert!(router.onboarding_selections().is_empty());
    }

    #[test]
    fn test_onboarding_actions_rejected_elsewhere() {
        let mut router = ScreenRouter::new();
        assert!(router.skip_onboarding().is_err());
        assert!(router.complete_onboarding(["x"]).is_err());
        assert_eq!(router.current(), Screen::Welcome);
        assert!(router.onboarding_selections().is_empty());
    }

    #[test]
    fn test_skip_onboarding_leaves_selections_empty() {
        let router = at_overview();
        assert_eq!(router.current(), Screen::AccountOverview);
        assert!(router.onboarding_selections().is_empty());
    }

    #[test]
    fn test_back_is_invalid_outside_details() {
        let mut router = at_overview();
        let before = router.clone();
        assert!(router.back().is_err());
        assert_eq!(router.current(), Screen::AccountOverview);
        assert_eq!(router, before);
    }

    #[test]
    fn test_open_transaction_from_fresh_router() {
        let mut router = ScreenRouter::new();
        let tx = view_transactions_record();
        router.open_transaction(tx.clone());
        assert_eq!(router.current(), Screen::TransactionDetails);
        assert_eq!(router.selected_transaction(), Some(&tx));
        assert!(router.is_consistent());
    }

    #[test]
    fn test_open_transaction_replaces_selection() {
        let mut router = at_overview();
        router.open_transaction(view_transactions_record());
        router.back().unwrap();
        router.open_transaction(pay_bills_record());
        assert_eq!(router.selected_transaction().unwrap().id, "txn_billpay_002");
    }

    #[test]
    fn test_cancel_completed_is_noop() {
        let mut router = at_overview();
        router.open_transaction(view_transactions_record());
        let outcome = router.cancel_selected_transaction();
        assert_eq!(
            outcome,
            CancelOutcome::NotCancellable {
                id: "txn_generic_001".to_string(),
                status: TransactionStatus::Completed
            }
        );
        assert_eq!(router.selected_transaction().unwrap().status, TransactionStatus::Completed);
        assert_eq!(router.current(), Screen::TransactionDetails);
    }

    #[test]
    fn test_cancel_processing_sets_failed() {
        let mut router = at_overview();
        router.open_transaction(pay_bills_record());
        let outcome = router.cancel_selected_transaction();
        assert_eq!(outcome, CancelOutcome::Cancelled { id: "txn_billpay_002".to_string() });
        assert_eq!(router.selected_transaction().unwrap().status, TransactionStatus::Failed);
        assert_eq!(router.current(), Screen::TransactionDetails);

        // already failed
        assert!(matches!(
            router.cancel_selected_transaction(),
            CancelOutcome::NotCancellable { .. }
        ));
    }

    #[test]
    fn test_cancel_pending_sets_failed() {
        let mut router = ScreenRouter::new();
        let mut tx = view_transactions_record();
        tx.status = TransactionStatus::Pending;
        router.open_transaction(tx);
        assert!(matches!(router.cancel_selected_transaction(), CancelOutcome::Cancelled { .. }));
        assert_eq!(router.selected_transaction().unwrap().status, TransactionStatus::Failed);
    }

    #[test]
    fn test_cancel_without_selection() {
        let mut router = ScreenRouter::new();
        assert_eq!(router.cancel_selected_transaction(), CancelOutcome::NoSelection);
        assert_eq!(router.current(), Screen::Welcome);
    }

    #[test]
    fn test_navigate_between_main_screens() {
        let mut router = at_overview();
        router.navigate_to(Screen::Settings).unwrap();
        assert_eq!(router.current(), Screen::Settings);
        router.navigate_to(Screen::SupportFaq).unwrap();
        assert_eq!(router.current(), Screen::SupportFaq);
        router.navigate_to(Screen::SupportFaq).unwrap();
        router.navigate_to(Screen::AccountOverview).unwrap();
        assert_eq!(router.current(), Screen::AccountOverview);
    }

    #[test]
    fn test_navigate_to_details_rejected() {
        let mut router = at_overview();
        router.open_transaction(view_transactions_record());
        router.back().unwrap();
        let before = router.clone();
        assert_eq!(
            router.navigate_to(Screen::TransactionDetails),
            Err(RouterError::DetailRequiresTransaction)
        );
        assert_eq!(router, before);
    }

    #[test]
    fn test_navigate_rejects_other_targets_and_origins() {
        let mut router = at_overview();
        assert_eq!(
            router.navigate_to(Screen::Welcome),
            Err(RouterError::InvalidTarget { target: Screen::Welcome })
        );
        assert!(router.navigate_to(Screen::Onboarding).is_err());

        let mut fresh = ScreenRouter::new();
        assert_eq!(
            fresh.navigate_to(Screen::Settings),
            Err(RouterError::NavigationUnavailable { from: Screen::Welcome })
        );

        let mut details = at_overview();
        details.open_transaction(view_transactions_record());
        assert!(details.navigate_to(Screen::Settings).is_err());
        assert_eq!(details.current(), Screen::TransactionDetails);
    }

    #[test]
    fn test_onboarding_then_details_then_back_keeps_selection() {
        let mut router = ScreenRouter::new();
        router.start().unwrap();
        router.complete_onboarding(["budgeting_aids"]).unwrap();
        let tx_a = view_transactions_record();
        router.open_transaction(tx_a.clone());
        router.back().unwrap();
        assert_eq!(router.current(), Screen::AccountOverview);
        assert_eq!(router.selected_transaction(), Some(&tx_a));
    }

    #[test]
    fn test_logout_from_details() {
        let mut router = at_overview();
        router.open_transaction(pay_bills_record());
        router.logout();
        assert_eq!(router.current(), Screen::Welcome);
        assert!(router.selected_transaction().is_none());
    }

    #[test]
    fn test_logout_onboarding_policy() {
        let mut router = ScreenRouter::new();
        router.start().unwrap();
        router.complete_onboarding(["savings_goals"]).unwrap();
        router.logout();
        assert!(router.onboarding_selections().is_empty());

        let mut retaining = ScreenRouter::new().with_onboarding_cleared_on_logout(false);
        retaining.start().unwrap();
        retaining.complete_onboarding(["savings_goals"]).unwrap();
        retaining.logout();
        assert!(retaining.onboarding_selections().contains("savings_goals"));
    }

    #[test]
    fn test_logout_from_every_screen() {
        for screen in Screen::ALL {
            let mut router = ScreenRouter::new();
            match screen {
                Screen::Welcome => {}
                Screen::Onboarding => router.start().unwrap(),
                Screen::TransactionDetails => router.open_transaction(view_transactions_record()),
                other => {
                    router.start().unwrap();
                    router.skip_onboarding().unwrap();
                    router.navigate_to(other).unwrap();
                }
            }
            assert_eq!(router.current(), screen);
            router.logout();
            assert_eq!(router.current(), Screen::Welcome);
        }
    }

    #[test]
    fn test_view_history_and_contact_support() {
        let mut router = at_overview();
        router.open_transaction(view_transactions_record());
        router.view_history().unwrap();
        assert_eq!(router.current(), Screen::AccountOverview);
        assert!(router.view_history().is_err());
        assert!(router.contact_support().is_err());

        router.open_transaction(view_transactions_record());
        router.contact_support().unwrap();
        assert_eq!(router.current(), Screen::SupportFaq);
        router.contact_support().unwrap();
        assert_eq!(router.current(), Screen::SupportFaq);
        assert!(router.selected_transaction().is_some());
    }
}
