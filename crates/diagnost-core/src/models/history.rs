use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::ConditionCategory;

/// Outcome of scanning a medical-history text for known conditions.
///
/// "No history supplied" and "history supplied but nothing matched" are
/// kept apart because downstream text differs between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryClassification {
    NoHistoryProvided,
    NoMatches,
    /// Non-empty; iterates in condition-table order.
    Matches(BTreeSet<ConditionCategory>),
}

impl HistoryClassification {
    /// Matched categories in table order; empty for the two no-match cases.
    pub fn categories(&self) -> Vec<ConditionCategory> {
        match self {
            Self::Matches(set) => set.iter().copied().collect(),
            Self::NoHistoryProvided | Self::NoMatches => Vec::new(),
        }
    }
}

/// History-derived text for each report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryAnalysis {
    pub summary: String,
    pub risk_factors: String,
    pub complications: String,
    pub recommended_tests: String,
    pub precautions: String,
    pub monitoring: String,
}
