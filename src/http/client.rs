//! HTTP transport for JSON payloads
//!
//! The only request the extraction layer makes is a GET whose body must be
//! JSON. [`HttpClient::get_json`] wraps that in a retry policy and an optional
//! rate limiter, and sorts failures into the two kinds callers care about:
//! transport errors (the request did not go through) and decode errors (it
//! did, but the body is not JSON).

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::types::BackoffType;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Wait used when a 429 carries no usable `Retry-After`
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(60);

// ============================================================================
// Retry Policy
// ============================================================================

/// How often and how patiently a failed request is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub backoff_type: BackoffType,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(30),
            backoff_type: BackoffType::Exponential,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt + 1`, capped at `max_backoff`
    pub fn delay(&self, attempt: u32) -> Duration {
        let delay = match self.backoff_type {
            BackoffType::Constant => self.initial_backoff,
            BackoffType::Linear => self.initial_backoff.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => self
                .initial_backoff
                .saturating_mul(2u32.saturating_pow(attempt)),
        };
        delay.min(self.max_backoff)
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    pub retry: RetryPolicy,
    /// `None` disables rate limiting
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: default_user_agent(),
            retry: RetryPolicy::default(),
            rate_limit: Some(RateLimiterConfig::default()),
        }
    }
}

/// Desktop browser user agent; the service serves a different payload shape
/// to unknown agents.
pub fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0"
        .to_string()
}

impl HttpClientConfig {
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.retry.max_retries = retries;
        self
    }

    #[must_use]
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.retry.backoff_type = backoff_type;
        self.retry.initial_backoff = initial;
        self.retry.max_backoff = max;
        self
    }

    #[must_use]
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    #[must_use]
    pub fn no_rate_limit(mut self) -> Self {
        self.rate_limit = None;
        self
    }
}

// ============================================================================
// Client
// ============================================================================

/// Result of a single attempt
enum Attempt {
    Payload(Value),
    /// Worth repeating; `wait` overrides the policy delay
    Retry { error: Error, wait: Option<Duration> },
    Fail(Error),
}

/// HTTP client with retry and rate limiting
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// GET `url` with `headers` and decode the body as JSON
    ///
    /// 429, 5xx gateway statuses, timeouts and connection failures are
    /// retried under the configured policy. The last failure is returned once
    /// retries run out. A body that is not JSON fails with [`Error::Decode`]
    /// immediately.
    pub async fn get_json(&self, url: &str, headers: &HeaderMap) -> Result<Value> {
        let policy = self.config.retry;
        let mut retries = 0;

        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.wait().await;
            }

            match self.attempt(url, headers).await {
                Attempt::Payload(value) => {
                    debug!(url, retries, "payload received");
                    return Ok(value);
                }
                Attempt::Fail(error) => return Err(error),
                Attempt::Retry { error, .. } if retries >= policy.max_retries => {
                    return Err(error);
                }
                Attempt::Retry { error, wait } => {
                    let delay = wait.unwrap_or_else(|| policy.delay(retries));
                    retries += 1;
                    warn!(
                        url,
                        error = %error,
                        retry = retries,
                        max_retries = policy.max_retries,
                        ?delay,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn attempt(&self, url: &str, headers: &HeaderMap) -> Attempt {
        let response = match self.client.get(url).headers(headers.clone()).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Attempt::Retry {
                    error: Error::Timeout {
                        timeout_ms: self.config.timeout.as_millis() as u64,
                    },
                    wait: None,
                };
            }
            Err(e) if e.is_connect() => {
                return Attempt::Retry {
                    error: Error::Http(e),
                    wait: None,
                };
            }
            Err(e) => return Attempt::Fail(Error::Http(e)),
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let wait = retry_after(&response);
            return Attempt::Retry {
                error: Error::RateLimited {
                    retry_after_seconds: wait.as_secs(),
                },
                wait: Some(wait),
            };
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = Error::http_status(status.as_u16(), body);
            return if error.is_retryable() {
                Attempt::Retry { error, wait: None }
            } else {
                Attempt::Fail(error)
            };
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Attempt::Fail(Error::Http(e)),
        };
        match serde_json::from_str(&body) {
            Ok(value) => Attempt::Payload(value),
            Err(e) => Attempt::Fail(Error::decode(format!(
                "response from {url} is not JSON: {e}"
            ))),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// `Retry-After` in seconds, or [`DEFAULT_RETRY_AFTER`]
fn retry_after(response: &Response) -> Duration {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .map_or(DEFAULT_RETRY_AFTER, Duration::from_secs)
}
