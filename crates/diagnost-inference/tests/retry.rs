use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use diagnost_inference::client::{InferenceClient, RetryPolicy, SummaryOutcome, Summarizer};
use diagnost_inference::error::InferenceError;
use diagnost_inference::service::SummaryService;
use diagnost_inference::sleep::Sleeper;

/// Replays a fixed script of results, one per call.
struct ScriptedService {
    script: Mutex<VecDeque<Result<String, InferenceError>>>,
    calls: AtomicUsize,
}

impl ScriptedService {
    fn new(script: Vec<Result<String, InferenceError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SummaryService for ScriptedService {
    async fn summarize(&self, _inputs: &str) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(InferenceError::Transport("script exhausted".to_string())))
    }
}

impl SummaryService for &ScriptedService {
    async fn summarize(&self, inputs: &str) -> Result<String, InferenceError> {
        (**self).summarize(inputs).await
    }
}

/// Records requested delays without waiting.
#[derive(Default)]
struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Sleeper for &RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

struct HangingService;

impl SummaryService for HangingService {
    async fn summarize(&self, _inputs: &str) -> Result<String, InferenceError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn first_attempt_success_does_not_sleep() {
    let service = ScriptedService::new(vec![Ok("summary".to_string())]);
    let sleeper = RecordingSleeper::default();
    let client = InferenceClient::with_sleeper(&service, &sleeper, RetryPolicy::default());

    let outcome = client.request_summary("prompt").await;

    assert_eq!(outcome, SummaryOutcome::Summary("summary".to_string()));
    assert_eq!(service.calls(), 1);
    assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn loading_then_success_sleeps_once() {
    let service = ScriptedService::new(vec![
        Err(InferenceError::ModelLoading),
        Ok("warm summary".to_string()),
    ]);
    let sleeper = RecordingSleeper::default();
    let client = InferenceClient::with_sleeper(&service, &sleeper, RetryPolicy::default());

    let outcome = client.request_summary("prompt").await;

    assert_eq!(outcome, SummaryOutcome::Summary("warm summary".to_string()));
    assert_eq!(service.calls(), 2);
    assert_eq!(sleeper.delays(), vec![Duration::from_secs(5)]);
}

#[tokio::test]
async fn exhausted_budget_is_unavailable() {
    let service = ScriptedService::new(vec![
        Err(InferenceError::ModelLoading),
        Err(InferenceError::ModelLoading),
        Err(InferenceError::ModelLoading),
    ]);
    let sleeper = RecordingSleeper::default();
    let client = InferenceClient::with_sleeper(&service, &sleeper, RetryPolicy::default());

    let outcome = client.request_summary("prompt").await;

    assert_eq!(outcome, SummaryOutcome::Unavailable);
    assert_eq!(service.calls(), 3);
    assert_eq!(sleeper.delays(), vec![Duration::from_secs(5); 2]);
}

#[tokio::test]
async fn error_classes_are_retried_identically() {
    let service = ScriptedService::new(vec![
        Err(InferenceError::Status(500)),
        Err(InferenceError::ResponseParse("bad shape".to_string())),
        Ok("third time".to_string()),
    ]);
    let sleeper = RecordingSleeper::default();
    let client = InferenceClient::with_sleeper(&service, &sleeper, RetryPolicy::default());

    let outcome = client.request_summary("prompt").await;

    assert_eq!(outcome, SummaryOutcome::Summary("third time".to_string()));
    assert_eq!(service.calls(), 3);
    assert_eq!(sleeper.delays().len(), 2);
}

#[tokio::test]
async fn custom_budget_is_respected() {
    let service = ScriptedService::new(Vec::new());
    let sleeper = RecordingSleeper::default();
    let policy = RetryPolicy {
        max_attempts: 5,
        delay: Duration::from_millis(250),
        ..RetryPolicy::default()
    };
    let client = InferenceClient::with_sleeper(&service, &sleeper, policy);

    let outcome = client.request_summary("prompt").await;

    assert_eq!(outcome, SummaryOutcome::Unavailable);
    assert_eq!(service.calls(), 5);
    assert_eq!(sleeper.delays(), vec![Duration::from_millis(250); 4]);
}

#[tokio::test]
async fn zero_attempts_still_tries_once() {
    let service = ScriptedService::new(vec![Ok("once".to_string())]);
    let sleeper = RecordingSleeper::default();
    let policy = RetryPolicy {
        max_attempts: 0,
        ..RetryPolicy::default()
    };
    let client = InferenceClient::with_sleeper(&service, &sleeper, policy);

    assert_eq!(
        client.request_summary("prompt").await,
        SummaryOutcome::Summary("once".to_string())
    );
}

#[tokio::test]
async fn total_deadline_maps_to_unavailable() {
    let sleeper = RecordingSleeper::default();
    let policy = RetryPolicy {
        total_timeout: Duration::from_millis(50),
        ..RetryPolicy::default()
    };
    let client = InferenceClient::with_sleeper(HangingService, &sleeper, policy);

    assert_eq!(client.request_summary("prompt").await, SummaryOutcome::Unavailable);
}

#[test]
fn only_loading_is_transient() {
    assert!(InferenceError::ModelLoading.is_transient());
    assert!(!InferenceError::Status(500).is_transient());
    assert!(!InferenceError::Timeout.is_transient());
}
