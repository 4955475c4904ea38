//! Basic enumerations shared across the core

use serde::{Deserialize, Serialize};

/// One named view of the application's navigation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    /// Landing card with the "Get Started" action
    Welcome,
    /// Feature selection
    Onboarding,
    /// Balance, trends and recent activity
    AccountOverview,
    /// A single selected transaction
    TransactionDetails,
    /// Preferences and logout
    Settings,
    /// Searchable FAQ
    SupportFaq,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Welcome
    }
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Welcome,
        Screen::Onboarding,
        Screen::AccountOverview,
        Screen::TransactionDetails,
        Screen::Settings,
        Screen::SupportFaq,
    ];

    /// Screens reachable through the persistent navigation bar
    pub const NAVIGABLE: [Screen; 3] =
        [Screen::AccountOverview, Screen::Settings, Screen::SupportFaq];

    /// Whether the navigation bar is shown (and `navigate_to` is allowed) on this screen
    pub fn has_main_navigation(&self) -> bool {
        Self::NAVIGABLE.contains(self)
    }

    /// URL-friendly name
    pub fn slug(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Onboarding => "onboarding",
            Screen::AccountOverview => "account",
            Screen::TransactionDetails => "transaction",
            Screen::Settings => "settings",
            Screen::SupportFaq => "support",
        }
    }
}

impl std::str::FromStr for Screen {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "welcome" => Ok(Screen::Welcome),
            "onboarding" => Ok(Screen::Onboarding),
            "account_overview" | "account" => Ok(Screen::AccountOverview),
            "transaction_details" | "transaction" => Ok(Screen::TransactionDetails),
            "settings" => Ok(Screen::Settings),
            "support_faq" | "support" => Ok(Screen::SupportFaq),
            _ => Err(format!("Invalid screen: {}", s)),
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Welcome => write!(f, "WELCOME"),
            Screen::Onboarding => write!(f, "ONBOARDING"),
            Screen::AccountOverview => write!(f, "ACCOUNT_OVERVIEW"),
            Screen::TransactionDetails => write!(f, "TRANSACTION_DETAILS"),
            Screen::Settings => write!(f, "SETTINGS"),
            Screen::SupportFaq => write!(f, "SUPPORT_FAQ"),
        }
    }
}

/// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Processing,
    Completed,
    Failed,
    Pending,
}

impl TransactionStatus {
    /// Only in-flight transactions can be cancelled
    pub fn is_cancellable(&self) -> bool {
        matches!(self, TransactionStatus::Processing | TransactionStatus::Pending)
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "processing" => Ok(TransactionStatus::Processing),
            "completed" => Ok(TransactionStatus::Completed),
            "failed" => Ok(TransactionStatus::Failed),
            "pending" => Ok(TransactionStatus::Pending),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Processing => write!(f, "processing"),
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Failed => write!(f, "failed"),
            TransactionStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Payment,
    Transfer,
    Deposit,
    Withdrawal,
}

impl std::str::FromStr for TransactionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "payment" => Ok(TransactionKind::Payment),
            "transfer" => Ok(TransactionKind::Transfer),
            "deposit" => Ok(TransactionKind::Deposit),
            "withdrawal" => Ok(TransactionKind::Withdrawal),
            _ => Err(format!("Invalid transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Payment => write!(f, "payment"),
            TransactionKind::Transfer => write!(f, "transfer"),
            TransactionKind::Deposit => write!(f, "deposit"),
            TransactionKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// Direction of a recent-activity row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Debit,
    Credit,
}
