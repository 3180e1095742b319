use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::history::HistoryAnalysis;
use super::patient::PatientInfo;
use super::symptoms::SymptomSet;

/// The assembled preliminary analysis returned to the caller.
///
/// `history_analysis` and `recommendations` are present only when the
/// summarization model contributed to the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub analysis: String,
    pub symptoms_analyzed: SymptomSet,
    pub patient_info_used: PatientInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub history_analysis: Option<HistoryAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub recommendations: Option<Recommendations>,
}

impl Report {
    pub fn is_model_augmented(&self) -> bool {
        self.history_analysis.is_some()
    }
}

/// Lifestyle advice triad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendations {
    pub diet: String,
    pub exercise: String,
    pub stress: String,
}
