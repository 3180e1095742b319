use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use diagnost_inference::client::RetryPolicy;
use diagnost_inference::service::DEFAULT_MODEL_URL;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub model_url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
    /// Set when running inside AWS Lambda.
    pub lambda_runtime: bool,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = RetryPolicy::default();

        let bind_addr = parse_or(&lookup, "DIAGNOST_BIND_ADDR", || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR).map_err(|e| eyre::eyre!(e))
        })?;

        let model_url = lookup("DIAGNOST_MODEL_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_URL.to_string());

        let api_key = lookup("HUGGINGFACE_API_KEY").filter(|v| !v.trim().is_empty());

        let max_attempts: u32 =
            parse_or(&lookup, "DIAGNOST_MAX_ATTEMPTS", || Ok(defaults.max_attempts))?;
        if max_attempts == 0 {
            return Err(eyre::eyre!("DIAGNOST_MAX_ATTEMPTS must be at least 1"));
        }

        let delay_secs: u64 = parse_or(&lookup, "DIAGNOST_RETRY_DELAY_SECS", || {
            Ok(defaults.delay.as_secs())
        })?;
        let request_timeout_secs: u64 = parse_or(&lookup, "DIAGNOST_REQUEST_TIMEOUT_SECS", || {
            Ok(DEFAULT_REQUEST_TIMEOUT_SECS)
        })?;
        let total_timeout_secs: u64 = parse_or(&lookup, "DIAGNOST_TOTAL_TIMEOUT_SECS", || {
            Ok(defaults.total_timeout.as_secs())
        })?;

        Ok(Self {
            bind_addr,
            model_url,
            api_key,
            request_timeout: Duration::from_secs(request_timeout_secs),
            retry: RetryPolicy {
                max_attempts,
                delay: Duration::from_secs(delay_secs),
                total_timeout: Duration::from_secs(total_timeout_secs),
            },
            lambda_runtime: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: impl FnOnce() -> eyre::Result<T>,
) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid value for {key}: {raw:?} ({e})")),
        _ => default(),
    }
}
