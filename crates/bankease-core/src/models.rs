//! Core data models

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{ActivityKind, TransactionKind, TransactionStatus};

/// One side of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionParty {
    /// Display name
    pub name: String,
    /// Account type label, e.g. "Checking Account (...1234)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl TransactionParty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: None,
            avatar_url: None,
        }
    }

    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }
}

/// A single payment/transfer event shown on the detail screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique transaction identifier
    pub id: String,
    /// Signed amount; negative means a debit
    pub amount: Decimal,
    /// ISO currency code
    pub currency: String,
    pub timestamp: NaiveDateTime,
    pub description: String,
    pub status: TransactionStatus,
    pub kind: TransactionKind,
    /// Originating party
    pub from: TransactionParty,
    /// Receiving party, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<TransactionParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransactionRecord {
    /// Check if this record is a debit
    pub fn is_debit(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Check if the record can still be cancelled
    pub fn is_cancellable(&self) -> bool {
        self.status.is_cancellable()
    }

    /// Same record, denominated in `currency`
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// A question/answer pair with keyword tags for support search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    /// Keyword tags
    pub tags: &'static [&'static str],
}

impl FaqEntry {
    /// Case-insensitive substring match over question, answer and tags.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
            || self.answer.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// A feature the user can pick during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingFeature {
    pub id: &'static str,
    pub label: &'static str,
}

/// One month on the spending trends chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub spending: Decimal,
    pub income: Decimal,
}

/// One row of the recent activity list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub description: String,
    /// Signed amount; negative means a debit
    pub amount: Decimal,
    pub date: NaiveDate,
    pub kind: ActivityKind,
}

/// Everything the account overview screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub total_balance: Decimal,
    pub currency: String,
    pub trends: Vec<TrendPoint>,
    pub recent_activity: Vec<ActivityEntry>,
}

impl AccountSnapshot {
    /// Same snapshot, denominated in `currency`
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}
