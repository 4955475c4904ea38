//! Fixture data shown by the prototype
//!
//! Nothing here is derived from a store: every record is a literal.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{
    AccountSnapshot, ActivityEntry, FaqEntry, OnboardingFeature, TransactionParty,
    TransactionRecord, TrendPoint,
};
use crate::types::{ActivityKind, TransactionKind, TransactionStatus};

/// Support FAQ catalog, in display order
pub static FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        id: "faq1",
        question: "How do I reset my password?",
        answer: "To reset your password, go to the login screen and click 'Forgot Password'. \
            Follow the instructions sent to your registered email. If you still face issues, \
            contact support.",
        tags: &["password", "reset", "forgot", "login", "account"],
    },
    FaqEntry {
        id: "faq2",
        question: "How can I contact support?",
        answer: "You can contact our support team via the chat link provided below, email us at \
            support@bankease.com, or call us at 1-800-123-4567 during business hours.",
        tags: &["contact", "support", "help", "customer service", "phone", "email"],
    },
    FaqEntry {
        id: "faq3",
        question: "What is the minimum account balance?",
        answer: "The minimum account balance for standard savings accounts is $100. For checking \
            accounts, there is no minimum balance requirement. Premium accounts may have \
            different terms.",
        tags: &["minimum balance", "account", "savings", "checking", "fee"],
    },
    FaqEntry {
        id: "faq4",
        question: "How do I report a fraudulent transaction?",
        answer: "If you suspect a fraudulent transaction, please contact us immediately through \
            the app's secure messaging, or call our fraud department at 1-800-FRAUD-00. It's \
            important to act quickly.",
        tags: &["fraud", "transaction", "report", "unauthorized", "security"],
    },
    FaqEntry {
        id: "faq5",
        question: "Are my deposits insured?",
        answer: "Yes, BankEase is a member of the FDIC. Your eligible deposits are insured up to \
            $250,000 per depositor, for each account ownership category.",
        tags: &["fdic", "insured", "deposits", "security", "protection"],
    },
];

/// Features offered on the onboarding screen
pub static ONBOARDING_FEATURES: [OnboardingFeature; 12] = [
    OnboardingFeature { id: "account_opening", label: "Account Opening" },
    OnboardingFeature { id: "spending_tracker", label: "Spending Tracker" },
    OnboardingFeature { id: "investment_tools", label: "Investment Tools" },
    OnboardingFeature { id: "easy_payments", label: "Easy Payments" },
    OnboardingFeature { id: "savings_goals", label: "Savings Goals" },
    OnboardingFeature { id: "budgeting_aids", label: "Budgeting Aids" },
    OnboardingFeature { id: "transaction_history", label: "Transaction History" },
    OnboardingFeature { id: "security_alerts", label: "Security Alerts" },
    OnboardingFeature { id: "rewards_program", label: "Rewards Program" },
    OnboardingFeature { id: "loan_application", label: "Loan Application" },
    OnboardingFeature { id: "financial_planning", label: "Financial Planning" },
    OnboardingFeature { id: "personal_finance_edu", label: "Personal Finance Education" },
];

/// Look up an onboarding feature by id
pub fn onboarding_feature(id: &str) -> Option<&'static OnboardingFeature> {
    ONBOARDING_FEATURES.iter().find(|f| f.id == id)
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn primary_checking() -> TransactionParty {
    TransactionParty::new("My Primary Checking").with_account_type("Checking Account (...1234)")
}

/// Record opened by the "View Transactions" action
pub fn view_transactions_record() -> TransactionRecord {
    TransactionRecord {
        id: "txn_generic_001".to_string(),
        amount: Decimal::new(12550, 2),
        currency: "USD".to_string(),
        timestamp: at(2023, 10, 28, 10, 30),
        description: "Software Subscription Renewal".to_string(),
        status: TransactionStatus::Completed,
        kind: TransactionKind::Payment,
        from: primary_checking(),
        to: Some(TransactionParty::new("SaaS Company Inc.").with_account_type("Merchant")),
        reference_number: Some("INV2023-10-789".to_string()),
        notes: Some("Annual subscription for design software.".to_string()),
    }
}

/// Record opened by the "Pay Bills" action
pub fn pay_bills_record() -> TransactionRecord {
    TransactionRecord {
        id: "txn_billpay_002".to_string(),
        amount: Decimal::new(7899, 2),
        currency: "USD".to_string(),
        timestamp: at(2023, 11, 1, 14, 0),
        description: "Electricity Bill Payment".to_string(),
        status: TransactionStatus::Processing,
        kind: TransactionKind::Payment,
        from: primary_checking(),
        to: Some(
            TransactionParty::new("City Electric Utilities").with_account_type("Utility Provider"),
        ),
        reference_number: Some("BILLPAY-ELEC-112023".to_string()),
        notes: Some("Scheduled payment for October electricity usage.".to_string()),
    }
}

const TRENDS: [(&str, i64, i64); 12] = [
    ("Jan", 1200, 1500),
    ("Feb", 1900, 1300),
    ("Mar", 1300, 2200),
    ("Apr", 2780, 2000),
    ("May", 1890, 2181),
    ("Jun", 2390, 2500),
    ("Jul", 1490, 1900),
    ("Aug", 2800, 3200),
    ("Sep", 1700, 2100),
    ("Oct", 3100, 2800),
    ("Nov", 2000, 2400),
    ("Dec", 2500, 3000),
];

/// Balance, trends and recent activity for the overview screen
pub fn account_snapshot() -> AccountSnapshot {
    let activity =
        |id: &str, description: &str, cents: i64, day: u32, kind: ActivityKind| ActivityEntry {
            id: id.to_string(),
            description: description.to_string(),
            amount: Decimal::new(cents, 2),
            date: at(2023, 10, day, 0, 0).date(),
            kind,
        };

    AccountSnapshot {
        total_balance: Decimal::new(1234567, 2),
        currency: "USD".to_string(),
        trends: TRENDS
            .iter()
            .map(|(month, spending, income)| TrendPoint {
                month: month.to_string(),
                spending: Decimal::from(*spending),
                income: Decimal::from(*income),
            })
            .collect(),
        recent_activity: vec![
            activity("1", "Grocery Store", -4500, 28, ActivityKind::Debit),
            activity("2", "Salary Deposit", 250000, 27, ActivityKind::Credit),
            activity("3", "Online Subscription", -1599, 26, ActivityKind::Debit),
            activity("4", "Restaurant Bill", -7250, 25, ActivityKind::Debit),
        ],
    }
}
