//! Report assembly.
//!
//! The model-augmented report combines the summary with the full history
//! analysis. When the summarizer is unavailable, or the augmented report
//! cannot be built, the rule-based fallback report is produced instead; it
//! uses only the one-line history impact.

use serde::Serialize;
use tracing::{error, info, warn};

use diagnost_core::models::history::HistoryAnalysis;
use diagnost_core::models::patient::PatientInfo;
use diagnost_core::models::report::{Recommendations, Report};
use diagnost_core::models::request::{AnalysisResponse, AnalyzeRequest};
use diagnost_core::models::symptoms::SymptomSet;
use diagnost_inference::client::{SummaryOutcome, Summarizer};
use diagnost_inference::prompt::build_prompt;

use crate::classify::classify;
use crate::error::ReportError;
use crate::history::describe;
use crate::render::{ReportTemplates, render_template};
use crate::sections::{self, RuleSections};

#[derive(Serialize)]
struct AugmentedContext<'a> {
    age: &'a str,
    gender: &'a str,
    symptoms: String,
    summary: &'a str,
    history: &'a HistoryAnalysis,
    sections: &'a RuleSections,
    recommendations: &'a Recommendations,
}

#[derive(Serialize)]
struct FallbackContext<'a> {
    age: &'a str,
    gender: &'a str,
    medical_history: &'a str,
    symptoms: String,
    history_impact: &'static str,
    sections: &'a RuleSections,
}

/// Builds reports from summarizer output and the rule tables.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    templates: ReportTemplates,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: ReportTemplates) -> Self {
        Self { templates }
    }

    /// Analyze one case.
    ///
    /// Returns an error only if the fallback report itself cannot be
    /// rendered.
    pub async fn analyze<S: Summarizer>(
        &self,
        summarizer: &S,
        symptoms: &SymptomSet,
        patient: &PatientInfo,
    ) -> Result<Report, ReportError> {
        let prompt = build_prompt(symptoms, patient);

        match summarizer.request_summary(&prompt).await {
            SummaryOutcome::Summary(summary) => {
                match self.augmented_report(&summary, symptoms, patient) {
                    Ok(report) => {
                        info!(symptom_count = symptoms.len(), "model-augmented report assembled");
                        Ok(report)
                    }
                    Err(e) => {
                        warn!(error = %e, "model-augmented report failed, falling back to rules");
                        self.fallback_report(symptoms, patient)
                    }
                }
            }
            SummaryOutcome::Unavailable => {
                info!(symptom_count = symptoms.len(), "summarizer unavailable, using rule-based report");
                self.fallback_report(symptoms, patient)
            }
        }
    }

    /// Analyze a request and wrap the outcome in the response envelope.
    pub async fn analyze_request<S: Summarizer>(
        &self,
        summarizer: &S,
        request: &AnalyzeRequest,
    ) -> AnalysisResponse {
        match self
            .analyze(summarizer, &request.symptoms, &request.patient_info)
            .await
        {
            Ok(report) => AnalysisResponse::ok(report),
            Err(e) => {
                error!(error = %e, "analysis failed");
                AnalysisResponse::failure(e.to_string())
            }
        }
    }

    pub fn augmented_report(
        &self,
        summary: &str,
        symptoms: &SymptomSet,
        patient: &PatientInfo,
    ) -> Result<Report, ReportError> {
        let history = describe(&classify(patient.medical_history().as_deref().unwrap_or("")));
        let rule_sections = RuleSections::generate(symptoms, patient);
        let recommendations = sections::recommendations(symptoms, patient);
        let age = patient.age_or_default();
        let gender = patient.gender_or_default();

        let context = AugmentedContext {
            age: &age,
            gender: &gender,
            symptoms: symptoms.joined(),
            summary,
            history: &history,
            sections: &rule_sections,
            recommendations: &recommendations,
        };
        let analysis = render_template("augmented_report", &self.templates.augmented, &context)?;

        Ok(Report {
            analysis,
            symptoms_analyzed: symptoms.clone(),
            patient_info_used: patient.clone(),
            history_analysis: Some(history),
            recommendations: Some(recommendations),
        })
    }

    pub fn fallback_report(
        &self,
        symptoms: &SymptomSet,
        patient: &PatientInfo,
    ) -> Result<Report, ReportError> {
        let rule_sections = RuleSections::generate(symptoms, patient);
        let age = patient.age_or_default();
        let gender = patient.gender_or_default();
        let medical_history = patient.medical_history_or_default();

        let context = FallbackContext {
            age: &age,
            gender: &gender,
            medical_history: &medical_history,
            symptoms: symptoms.joined(),
            history_impact: sections::history_impact(patient.medical_history().as_deref()),
            sections: &rule_sections,
        };
        let analysis = render_template("fallback_report", &self.templates.fallback, &context)?;

        Ok(Report {
            analysis,
            symptoms_analyzed: symptoms.clone(),
            patient_info_used: patient.clone(),
            history_analysis: None,
            recommendations: None,
        })
    }
}
