//! Screen routing, FAQ search and session control for the BankEase prototype

pub mod action;
pub mod error;
pub mod faq;
pub mod fixtures;
pub mod models;
pub mod preferences;
pub mod router;
pub mod session;
pub mod types;

pub use action::{Action, ActionDelegate, LoggingDelegate};
pub use error::{CoreError, ErrorCode, ErrorDetails, ErrorSeverity, RouterError};
pub use faq::{filter, search, FaqSearch, SearchOutcome};
pub use models::{
    AccountSnapshot, ActivityEntry, FaqEntry, OnboardingFeature, TransactionParty,
    TransactionRecord, TrendPoint,
};
pub use preferences::Preferences;
pub use router::{CancelOutcome, ScreenRouter};
pub use session::{DispatchOutcome, NavigationPolicy, Session, SessionSnapshot};
pub use types::{ActivityKind, Screen, TransactionKind, TransactionStatus};

pub use bankease_config::Language;
