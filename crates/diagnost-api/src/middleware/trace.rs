use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

use diagnost_core::models::report::Report;

/// Which path produced a served report. The analyze handler attaches it to
/// the response extensions so the trace layer can tag the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPath {
    ModelAugmented,
    RuleBased,
}

impl ReportPath {
    pub fn of(report: &Report) -> Self {
        if report.is_model_augmented() {
            Self::ModelAugmented
        } else {
            Self::RuleBased
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModelAugmented => "model_augmented",
            Self::RuleBased => "rule_based",
        }
    }
}

/// Per-request trace line with latency and, for analyses, the report path.
///
/// Request and response bodies carry patient data and are never logged.
pub async fn trace_request(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status();
    match response.extensions().get::<ReportPath>() {
        Some(report) => info!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms,
            report = report.as_str(),
            "analysis served"
        ),
        None if status.is_server_error() => warn!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms,
            "request failed"
        ),
        None => info!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms,
            "request served"
        ),
    }

    response
}
