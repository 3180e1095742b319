//! The external summarization capability and its Hugging Face
//! Inference API implementation.
//!
//! The service accepts `{"inputs": "<text>"}` and answers with
//! `[{"summary_text": "<text>"}]` on success. While a cold model is being
//! loaded it answers `503 Service Unavailable`.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InferenceError;

/// Default summarization endpoint.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// One call to a text-summarization model.
pub trait SummaryService: Send + Sync {
    fn summarize(&self, inputs: &str) -> impl Future<Output = Result<String, InferenceError>> + Send;
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct SummaryItem {
    summary_text: String,
}

/// Summarization over the Hugging Face Inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceService {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HuggingFaceService {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| InferenceError::Config(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SummaryService for HuggingFaceService {
    async fn summarize(&self, inputs: &str) -> Result<String, InferenceError> {
        let mut request = self.http.post(&self.endpoint).json(&SummaryRequest { inputs });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "summarization response received");

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(InferenceError::ModelLoading);
        }
        if status != StatusCode::OK {
            return Err(InferenceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_summary(&body)
    }
}

/// Extract the summary text from a success payload.
pub fn parse_summary(body: &[u8]) -> Result<String, InferenceError> {
    let items: Vec<SummaryItem> = serde_json::from_slice(body)
        .map_err(|e| InferenceError::ResponseParse(format!("unexpected payload shape: {e}")))?;

    items
        .into_iter()
        .next()
        .map(|item| item.summary_text)
        .ok_or_else(|| InferenceError::ResponseParse("empty summary list".to_string()))
}
