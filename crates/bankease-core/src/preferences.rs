//! User preferences edited on the settings screen

use bankease_config::{Language, PreferencesConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub transaction_alerts: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from(&PreferencesConfig::default())
    }
}

impl From<&PreferencesConfig> for Preferences {
    fn from(config: &PreferencesConfig) -> Self {
        Self {
            language: config.language,
            transaction_alerts: config.transaction_alerts,
            dark_mode: config.dark_mode,
        }
    }
}
