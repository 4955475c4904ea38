//! Error types for bankease-core
//!
//! Navigation misuse is the only failure the core can report. A transaction
//! whose status becomes `Failed` is ordinary data, not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Screen;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Action not valid from the current screen
    InvalidTransition,
    /// Direct jump into the detail screen
    DetailRequiresTransaction,
    /// Navigation bar used where it is not shown
    NavigationUnavailable,
    /// Navigation bar target outside its screen set
    InvalidTarget,
    /// Malformed input value
    InvalidValue,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidTransition => write!(f, "INVALID_TRANSITION"),
            ErrorCode::DetailRequiresTransaction => write!(f, "DETAIL_REQUIRES_TRANSACTION"),
            ErrorCode::NavigationUnavailable => write!(f, "NAVIGATION_UNAVAILABLE"),
            ErrorCode::InvalidTarget => write!(f, "INVALID_TARGET"),
            ErrorCode::InvalidValue => write!(f, "INVALID_VALUE"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Caller error, state unchanged
    Warning,
    /// Operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    pub severity: ErrorSeverity,
    /// Screen the session was on when the error happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<Screen>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    pub fn new(code: ErrorCode, message: String, severity: ErrorSeverity) -> Self {
        Self {
            code,
            message,
            severity,
            screen: None,
            suggestions: vec![],
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(screen) = self.screen {
            write!(f, "\nScreen: {}", screen)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// A rejected screen transition. The router state is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Cannot {action} from {from}")]
    InvalidTransition { action: &'static str, from: Screen },

    #[error("TRANSACTION_DETAILS is only reachable by opening a transaction")]
    DetailRequiresTransaction,

    #[error("Navigation is not available from {from}")]
    NavigationUnavailable { from: Screen },

    #[error("Cannot navigate directly to {target}")]
    InvalidTarget { target: Screen },
}

/// Main error type for bankease-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Navigation(#[from] RouterError),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Navigation(RouterError::InvalidTransition { .. }) => {
                ErrorCode::InvalidTransition
            }
            CoreError::Navigation(RouterError::DetailRequiresTransaction) => {
                ErrorCode::DetailRequiresTransaction
            }
            CoreError::Navigation(RouterError::NavigationUnavailable { .. }) => {
                ErrorCode::NavigationUnavailable
            }
            CoreError::Navigation(RouterError::InvalidTarget { .. }) => ErrorCode::InvalidTarget,
            CoreError::InvalidValue { .. } => ErrorCode::InvalidValue,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Navigation(_) => ErrorSeverity::Warning,
            CoreError::InvalidValue { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let details = ErrorDetails::new(self.code(), self.to_string(), self.severity());

        match self {
            CoreError::Navigation(RouterError::DetailRequiresTransaction) => details
                .with_suggestion(
                    "Use the view_transactions, pay_bills or open_transaction action instead."
                        .to_string(),
                ),
            CoreError::Navigation(RouterError::InvalidTransition { from, .. })
            | CoreError::Navigation(RouterError::NavigationUnavailable { from }) => {
                details.with_screen(*from)
            }
            CoreError::Navigation(RouterError::InvalidTarget { .. }) => details.with_suggestion(
                "Navigation targets are ACCOUNT_OVERVIEW, SETTINGS and SUPPORT_FAQ.".to_string(),
            ),
            CoreError::InvalidValue { .. } => details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err: CoreError = RouterError::DetailRequiresTransaction.into();
        assert_eq!(err.code(), ErrorCode::DetailRequiresTransaction);
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(!err.to_details().suggestions.is_empty());

        let err = CoreError::InvalidValue {
            field: "language".to_string(),
            reason: "unknown".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidValue);
        assert_eq!(err.to_string(), "Invalid value for language: unknown");
    }

    #[test]
    fn test_details_carry_screen() {
        let err: CoreError = RouterError::InvalidTransition {
            action: "go back",
            from: Screen::Settings,
        }
        .into();
        let details = err.to_details();
        assert_eq!(details.screen, Some(Screen::Settings));
        assert_eq!(details.message, "Cannot go back from SETTINGS");
        assert!(details.to_string().starts_with("[INVALID_TRANSITION]"));
    }

    #[test]
    fn test_details_serialize() {
        let err: CoreError = RouterError::InvalidTarget { target: Screen::Welcome }.into();
        let json = serde_json::to_value(err.to_details()).unwrap();
        assert_eq!(json["code"], "INVALID_TARGET");
        assert_eq!(json["severity"], "warning");
        assert!(json.get("screen").is_none());
    }
}
