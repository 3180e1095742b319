use axum::body::Bytes;
use axum::{Extension, Json};
use axum::extract::State;

use diagnost_core::models::request::{AnalysisResponse, AnalyzeRequest};
use diagnost_inference::client::Summarizer;

use crate::error::ApiError;
use crate::middleware::trace::ReportPath;
use crate::state::AppState;

/// Analyze reported symptoms and return a preliminary report.
///
/// Model unavailability is not an error here; it yields the rule-based
/// report. Only a report that cannot be produced at all is a failure.
/// Successful responses carry the [`ReportPath`] that produced them.
pub async fn analyze<S: Summarizer + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<(Extension<ReportPath>, Json<AnalysisResponse>), ApiError> {
    let request = AnalyzeRequest::from_slice(&body)?;

    let response = state
        .assembler
        .analyze_request(state.summarizer.as_ref(), &request)
        .await;

    match response.diagnosis.as_ref().map(ReportPath::of) {
        Some(report_path) if response.success => Ok((Extension(report_path), Json(response))),
        _ => Err(ApiError::Internal(
            response
                .error
                .unwrap_or_else(|| "analysis failed".to_string()),
        )),
    }
}
