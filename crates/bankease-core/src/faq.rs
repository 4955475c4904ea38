//! FAQ search

use serde::Serialize;

use crate::models::FaqEntry;

/// Entries whose question, answer or a tag contains `query`, ignoring case.
///
/// A query that is empty after trimming returns every entry. Input order is
/// preserved.
pub fn filter<'a>(entries: &'a [FaqEntry], query: &str) -> Vec<&'a FaqEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }
    entries.iter().filter(|entry| entry.matches(&needle)).collect()
}

/// What the results list should say above the entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// No query, every entry shown
    ShowingAll,
    Matches { count: usize },
    NoResults,
}

/// Filtered entries plus the outcome used for messaging
#[derive(Debug, Clone, Serialize)]
pub struct FaqSearch<'a> {
    /// Trimmed query text
    pub query: String,
    pub outcome: SearchOutcome,
    pub entries: Vec<&'a FaqEntry>,
}

/// Run [`filter`] and classify the result
pub fn search<'a>(entries: &'a [FaqEntry], query: &str) -> FaqSearch<'a> {
    let trimmed = query.trim();
    let matched = filter(entries, trimmed);
    let outcome = if trimmed.is_empty() {
        SearchOutcome::ShowingAll
    } else if matched.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Matches { count: matched.len() }
    };
    FaqSearch {
        query: trimmed.to_string(),
        outcome,
        entries: matched,
    }
}
