use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model is still loading")]
    ModelLoading,

    #[error("summarization request failed with status code {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("summarization request timed out")]
    Timeout,

    #[error("client config error: {0}")]
    Config(String),
}

impl InferenceError {
    /// Whether the service signalled that the model is warming up.
    ///
    /// Retry treats every error the same; this only informs logging.
    pub fn is_transient(&self) -> bool {
        matches!(self, InferenceError::ModelLoading)
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            InferenceError::Timeout
        } else if e.is_decode() {
            InferenceError::ResponseParse(e.to_string())
        } else {
            InferenceError::Transport(e.to_string())
        }
    }
}
