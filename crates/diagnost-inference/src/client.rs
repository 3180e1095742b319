use std::future::Future;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::service::SummaryService;
use crate::sleep::{Sleeper, TokioSleeper};

/// Fixed-delay retry budget for one summarization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 act as 1.
    pub max_attempts: u32,
    /// Delay between consecutive attempts. Never grows.
    pub delay: Duration,
    /// Deadline for the whole attempt chain, delays included.
    pub total_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
            total_timeout: Duration::from_secs(120),
        }
    }
}

/// Result of asking for a summary. Failures never escape as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summary(String),
    Unavailable,
}

/// Anything that can turn a prompt into summary text or give up.
pub trait Summarizer: Send + Sync {
    fn request_summary(&self, prompt: &str) -> impl Future<Output = SummaryOutcome> + Send;
}

/// Calls a [`SummaryService`] sequentially under a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct InferenceClient<S, Z = TokioSleeper> {
    service: S,
    sleeper: Z,
    policy: RetryPolicy,
}

impl<S: SummaryService> InferenceClient<S, TokioSleeper> {
    pub fn new(service: S, policy: RetryPolicy) -> Self {
        Self::with_sleeper(service, TokioSleeper, policy)
    }
}

impl<S: SummaryService, Z: Sleeper> InferenceClient<S, Z> {
    pub fn with_sleeper(service: S, sleeper: Z, policy: RetryPolicy) -> Self {
        Self {
            service,
            sleeper,
            policy,
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    async fn attempt_chain(&self, prompt: &str) -> SummaryOutcome {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self.service.summarize(prompt).await {
                Ok(summary) => {
                    info!(attempt, "summary received");
                    return SummaryOutcome::Summary(summary);
                }
                Err(e) => {
                    warn!(
                        attempt,
                        max_attempts,
                        transient = e.is_transient(),
                        error = %e,
                        "summarization attempt failed"
                    );
                    if attempt < max_attempts {
                        debug!(
                            delay_ms = self.policy.delay.as_millis() as u64,
                            "retrying summarization"
                        );
                        self.sleeper.sleep(self.policy.delay).await;
                    }
                }
            }
        }

        warn!(max_attempts, "retry budget exhausted, summarization unavailable");
        SummaryOutcome::Unavailable
    }
}

impl<S: SummaryService, Z: Sleeper> Summarizer for InferenceClient<S, Z> {
    async fn request_summary(&self, prompt: &str) -> SummaryOutcome {
        match tokio::time::timeout(self.policy.total_timeout, self.attempt_chain(prompt)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    timeout_ms = self.policy.total_timeout.as_millis() as u64,
                    "summarization deadline exceeded"
                );
                SummaryOutcome::Unavailable
            }
        }
    }
}
