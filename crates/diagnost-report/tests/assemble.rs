use std::borrow::Cow;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use diagnost_core::models::patient::PatientInfo;
use diagnost_core::models::request::AnalyzeRequest;
use diagnost_core::models::symptoms::SymptomSet;
use diagnost_inference::client::{InferenceClient, RetryPolicy, SummaryOutcome, Summarizer};
use diagnost_inference::error::InferenceError;
use diagnost_inference::service::SummaryService;
use diagnost_inference::sleep::Sleeper;
use diagnost_report::assemble::ReportAssembler;
use diagnost_report::render::ReportTemplates;
use diagnost_report::sections::{AGE_ADULT, GENDER_FEMALE, HISTORY_IMPACT_PRESENT};

struct FixedSummarizer(SummaryOutcome);

impl Summarizer for FixedSummarizer {
    async fn request_summary(&self, _prompt: &str) -> SummaryOutcome {
        self.0.clone()
    }
}

struct ScriptedService(Mutex<VecDeque<Result<String, InferenceError>>>);

impl ScriptedService {
    fn new(script: Vec<Result<String, InferenceError>>) -> Self {
        Self(Mutex::new(script.into()))
    }
}

impl SummaryService for ScriptedService {
    async fn summarize(&self, _inputs: &str) -> Result<String, InferenceError> {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(InferenceError::Status(500)))
    }
}

#[derive(Default)]
struct RecordingSleeper(Mutex<Vec<Duration>>);

impl Sleeper for &RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.0.lock().unwrap().push(duration);
    }
}

fn case() -> (SymptomSet, PatientInfo) {
    let symptoms = SymptomSet::new(["headache", "blurred vision"]);
    let patient = PatientInfo::new()
        .with("age", "45")
        .with("gender", "female")
        .with("medical_history", "diabetes, high blood pressure");
    (symptoms, patient)
}

#[tokio::test]
async fn summary_produces_augmented_report() {
    let (symptoms, patient) = case();
    let summarizer = FixedSummarizer(SummaryOutcome::Summary("Possible migraine.".to_string()));

    let report = ReportAssembler::new()
        .analyze(&summarizer, &symptoms, &patient)
        .await
        .unwrap();

    assert!(report.is_model_augmented());
    assert!(report.recommendations.is_some());
    assert_eq!(report.symptoms_analyzed, symptoms);
    assert_eq!(report.patient_info_used, patient);

    let text = &report.analysis;
    assert!(text.contains("1. Differential Diagnosis:\n   Possible migraine."));
    assert!(text.contains("Detected medical conditions:\n- Diabetes\n- Hypertension\n"));
    assert!(text.contains(&format!("Age-related factors: {AGE_ADULT}")));
    assert!(text.contains(&format!("Gender-specific considerations: {GENDER_FEMALE}")));
    assert!(text.contains("headache, blurred vision"));
    assert!(text.contains("7. Lifestyle Recommendations:"));
    assert!(text.contains("Follow all prescribed medications and treatments"));
}

#[tokio::test]
async fn unavailable_produces_fallback_report() {
    let (symptoms, patient) = case();
    let summarizer = FixedSummarizer(SummaryOutcome::Unavailable);

    let report = ReportAssembler::new()
        .analyze(&summarizer, &symptoms, &patient)
        .await
        .unwrap();

    assert!(!report.is_model_augmented());
    assert!(report.history_analysis.is_none());
    assert!(report.recommendations.is_none());
    assert_eq!(report.patient_info_used, patient);

    let text = &report.analysis;
    assert!(text.contains("Medical History: diabetes, high blood pressure"));
    assert!(text.contains(&format!(
        "Lifestyle and medical history impact: {HISTORY_IMPACT_PRESENT}"
    )));
    assert!(text.contains("Systemic conditions affecting multiple organ systems"));
    assert!(!text.contains("Detected medical conditions"));
    assert!(!text.contains("7. Lifestyle Recommendations:"));

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("history_analysis").is_none());
    assert!(json.get("recommendations").is_none());
}

#[tokio::test]
async fn exhausted_retries_fall_back() {
    let (symptoms, patient) = case();
    let service = ScriptedService::new(vec![
        Err(InferenceError::ModelLoading),
        Err(InferenceError::Status(502)),
        Err(InferenceError::ModelLoading),
    ]);
    let sleeper = RecordingSleeper::default();
    let client = InferenceClient::with_sleeper(service, &sleeper, RetryPolicy::default());

    let report = ReportAssembler::new()
        .analyze(&client, &symptoms, &patient)
        .await
        .unwrap();

    assert!(report.history_analysis.is_none());
    assert!(report.recommendations.is_none());
    assert!(report.analysis.contains("Lifestyle and medical history impact"));
    assert_eq!(sleeper.0.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn second_attempt_success_is_augmented_after_one_delay() {
    let (symptoms, patient) = case();
    let service = ScriptedService::new(vec![
        Err(InferenceError::ModelLoading),
        Ok("Consider hypertensive headache.".to_string()),
    ]);
    let sleeper = RecordingSleeper::default();
    let client = InferenceClient::with_sleeper(service, &sleeper, RetryPolicy::default());

    let report = ReportAssembler::new()
        .analyze(&client, &symptoms, &patient)
        .await
        .unwrap();

    assert!(report.is_model_augmented());
    assert!(report.analysis.contains("Consider hypertensive headache."));
    assert_eq!(*sleeper.0.lock().unwrap(), vec![Duration::from_secs(5)]);
}

#[tokio::test]
async fn identical_inputs_give_identical_reports() {
    let (symptoms, patient) = case();
    let summarizer = FixedSummarizer(SummaryOutcome::Summary("Stable.".to_string()));
    let assembler = ReportAssembler::new();

    let first = assembler.analyze(&summarizer, &symptoms, &patient).await.unwrap();
    let second = assembler.analyze(&summarizer, &symptoms, &patient).await.unwrap();

    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[tokio::test]
async fn augmented_failure_degrades_to_fallback() {
    let (symptoms, patient) = case();
    let summarizer = FixedSummarizer(SummaryOutcome::Summary("Stable.".to_string()));
    let assembler = ReportAssembler::with_templates(ReportTemplates {
        augmented: Cow::Borrowed("{{ missing_variable }}"),
        ..ReportTemplates::default()
    });

    let report = assembler.analyze(&summarizer, &symptoms, &patient).await.unwrap();

    assert!(!report.is_model_augmented());
    assert!(report.analysis.contains("Lifestyle and medical history impact"));
}

#[tokio::test]
async fn fallback_failure_is_reported_not_raised() {
    let (symptoms, patient) = case();
    let request = AnalyzeRequest {
        symptoms,
        patient_info: patient,
    };
    let assembler = ReportAssembler::with_templates(ReportTemplates {
        augmented: Cow::Borrowed("{{ missing_variable }}"),
        fallback: Cow::Borrowed("{% if %}"),
    });

    let response = assembler
        .analyze_request(&FixedSummarizer(SummaryOutcome::Unavailable), &request)
        .await;

    assert!(!response.success);
    assert!(response.diagnosis.is_none());
    assert!(response.error.is_some());
}

#[tokio::test]
async fn empty_request_still_succeeds() {
    let response = ReportAssembler::new()
        .analyze_request(
            &FixedSummarizer(SummaryOutcome::Summary("n/a".to_string())),
            &AnalyzeRequest::default(),
        )
        .await;

    assert!(response.success);
    let report = response.diagnosis.unwrap();
    let history = report.history_analysis.unwrap();
    assert!(history.summary.starts_with("No medical history provided."));
    assert!(report.analysis.contains("Age: Not provided"));
}

#[tokio::test]
async fn history_without_matches_keeps_its_own_text() {
    let patient = PatientInfo::new().with("medical_history", "patient has a cold");
    let summarizer = FixedSummarizer(SummaryOutcome::Summary("n/a".to_string()));

    let report = ReportAssembler::new()
        .analyze(&summarizer, &SymptomSet::default(), &patient)
        .await
        .unwrap();

    assert_eq!(
        report.history_analysis.unwrap().summary,
        "No specific medical conditions detected in the provided history."
    );
}
