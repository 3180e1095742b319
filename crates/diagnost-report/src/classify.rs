use std::collections::BTreeSet;

use diagnost_core::models::condition::CONDITION_TABLE;
use diagnost_core::models::history::HistoryClassification;
use diagnost_core::models::patient::is_history_absent;

/// Classify a medical-history text against the condition table.
///
/// Matching is a case-insensitive substring test of every keyword against
/// the whole text. Empty text and the `"Not provided"` sentinel are
/// `NoHistoryProvided`; text that matches nothing is `NoMatches`.
pub fn classify(history: &str) -> HistoryClassification {
    if is_history_absent(history) {
        return HistoryClassification::NoHistoryProvided;
    }

    let haystack = history.to_lowercase();
    let matched: BTreeSet<_> = CONDITION_TABLE
        .iter()
        .filter(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|rule| rule.category)
        .collect();

    if matched.is_empty() {
        HistoryClassification::NoMatches
    } else {
        HistoryClassification::Matches(matched)
    }
}
