//! Session controller
//!
//! A [`Session`] is the single owner of the router and preferences. The
//! presentation layer sends it [`Action`]s and reads [`SessionSnapshot`]s; it
//! never touches the router directly.

use std::sync::Arc;

use bankease_config::Config;
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionDelegate, LoggingDelegate};
use crate::error::{CoreError, RouterError};
use crate::fixtures;
use crate::models::TransactionRecord;
use crate::preferences::Preferences;
use crate::router::{CancelOutcome, ScreenRouter};
use crate::types::Screen;

/// How rejected navigation is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPolicy {
    /// Return the error to the caller
    Strict,
    /// Log a warning and ignore the action
    Lenient,
}

/// What happened to a dispatched action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Applied,
    /// Rejected under the lenient policy; state unchanged
    Ignored { reason: String },
    Cancel { cancel: CancelOutcome },
}

/// Read-only view of the session for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub selected_transaction: Option<TransactionRecord>,
    pub onboarding_selections: Vec<String>,
    pub preferences: Preferences,
    /// Whether the navigation bar is shown
    pub main_navigation: bool,
    pub policy: NavigationPolicy,
}

pub struct Session {
    router: ScreenRouter,
    preferences: Preferences,
    policy: NavigationPolicy,
    /// Currency the sample transactions are shown in
    currency: String,
    delegate: Arc<dyn ActionDelegate>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("router", &self.router)
            .field("preferences", &self.preferences)
            .field("policy", &self.policy)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Session {
    /// Fresh session on the welcome screen, configured from `config`
    pub fn new(config: &Config) -> Self {
        let policy = if config.session.is_strict() {
            NavigationPolicy::Strict
        } else {
            NavigationPolicy::Lenient
        };
        Self {
            router: ScreenRouter::new()
                .with_onboarding_cleared_on_logout(config.session.clear_onboarding_on_logout),
            preferences: Preferences::from(&config.preferences),
            policy,
            currency: config.currency.default_currency.clone(),
            delegate: Arc::new(LoggingDelegate),
        }
    }

    /// Replace the delegate notified of boundary actions
    pub fn with_delegate(mut self, delegate: Arc<dyn ActionDelegate>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn with_policy(mut self, policy: NavigationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn router(&self) -> &ScreenRouter {
        &self.router
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    pub fn current(&self) -> Screen {
        self.router.current()
    }

    /// Apply one user action
    pub fn dispatch(&mut self, action: Action) -> Result<DispatchOutcome, CoreError> {
        let name = action.name();
        log::debug!("Dispatching {} on {}", name, self.router.current());

        let result = match action {
            Action::Start => self.router.start(),
            Action::CompleteOnboarding { selections } => {
                self.router.complete_onboarding(selections)
            }
            Action::SkipOnboarding => self.router.skip_onboarding(),
            Action::ViewTransactions => {
                let record = fixtures::view_transactions_record().with_currency(&self.currency);
                self.router.open_transaction(record);
                Ok(())
            }
            Action::PayBills => {
                let record = fixtures::pay_bills_record().with_currency(&self.currency);
                self.router.open_transaction(record);
                Ok(())
            }
            Action::OpenTransaction { transaction } => {
                self.router.open_transaction(*transaction);
                Ok(())
            }
            Action::CancelTransaction => {
                let id = self.router.selected_transaction().map(|tx| tx.id.clone());
                self.delegate.cancel_requested(id.as_deref());
                let cancel = self.router.cancel_selected_transaction();
                return Ok(DispatchOutcome::Cancel { cancel });
            }
            Action::NavigateTo { screen } => self.router.navigate_to(screen),
            Action::Back => self.router.back(),
            Action::Logout => {
                self.router.logout();
                self.delegate.logged_out();
                Ok(())
            }
            Action::ContactSupport => {
                self.router.contact_support().map(|()| self.delegate.contact_support())
            }
            Action::ViewHistory => {
                self.router.view_history().map(|()| self.delegate.view_history())
            }
            Action::SetLanguage { language } => {
                self.preferences.language = language;
                Ok(())
            }
            Action::SetTransactionAlerts { enabled } => {
                self.preferences.transaction_alerts = enabled;
                Ok(())
            }
            Action::SetDarkMode { enabled } => {
                self.preferences.dark_mode = enabled;
                Ok(())
            }
        };

        self.resolve(name, result)
    }

    fn resolve(
        &self,
        name: &str,
        result: Result<(), RouterError>,
    ) -> Result<DispatchOutcome, CoreError> {
        match result {
            Ok(()) => Ok(DispatchOutcome::Applied),
            Err(err) => match self.policy {
                NavigationPolicy::Strict => {
                    log::debug!("Rejected {}: {}", name, err);
                    Err(CoreError::Navigation(err))
                }
                NavigationPolicy::Lenient => {
                    log::warn!("Ignoring {}: {}", name, err);
                    Ok(DispatchOutcome::Ignored { reason: err.to_string() })
                }
            },
        }
    }

    /// Current state for the presentation layer
    pub fn snapshot(&self) -> SessionSnapshot {
        let screen = self.router.current();
        SessionSnapshot {
            screen,
            selected_transaction: self.router.selected_transaction().cloned(),
            onboarding_selections: self.router.onboarding_selections().iter().cloned().collect(),
            preferences: self.preferences.clone(),
            main_navigation: screen.has_main_navigation(),
            policy: self.policy,
        }
    }
}

// ==================== Tests ====================
