use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::patient::PatientInfo;
use super::report::Report;
use super::symptoms::SymptomSet;

/// Body of an analysis request. Missing keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub symptoms: SymptomSet,
    #[serde(default)]
    pub patient_info: PatientInfo,
}

impl AnalyzeRequest {
    /// Parse a JSON request body. An empty body is an empty request.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| CoreError::InvalidRequest(e.to_string()))
    }
}

/// Envelope returned by the analysis operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub diagnosis: Option<Report>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn ok(report: Report) -> Self {
        Self {
            success: true,
            diagnosis: Some(report),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            diagnosis: None,
            error: Some(message.into()),
        }
    }
}
