//! Extractor configuration
//!
//! Everything needed to build a search listing from a file: the service
//! origin, the localization, and the HTTP client tuning. Every field has a
//! default, so an empty document is a valid configuration.

use crate::error::{Error, Result, ResultExt};
use crate::http::{
    default_user_agent, HttpClient, HttpClientConfig, HttpFetcher, RateLimiterConfig,
    DEFAULT_CLIENT_VERSION,
};
use crate::record::SERVICE_URL;
use crate::types::{BackoffType, Localization};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete extractor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Service origin search URLs are built against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language and country sent with every request
    #[serde(default)]
    pub localization: Localization,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_base_url() -> String {
    SERVICE_URL.to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            localization: Localization::default(),
            http: HttpConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;

        if self.localization.language.is_empty() {
            return Err(Error::invalid_config(
                "localization.language",
                "must not be empty",
            ));
        }
        if self.http.timeout_ms == 0 {
            return Err(Error::invalid_config("http.timeout_ms", "must be positive"));
        }
        if self.http.initial_backoff_ms > self.http.max_backoff_ms {
            return Err(Error::invalid_config(
                "http.initial_backoff_ms",
                format!(
                    "{} exceeds max_backoff_ms ({})",
                    self.http.initial_backoff_ms, self.http.max_backoff_ms
                ),
            ));
        }
        Ok(())
    }

    /// Build the HTTP fetcher this configuration describes
    pub fn fetcher(&self) -> Result<HttpFetcher> {
        let client = HttpClient::with_config(self.http.client_config())?;
        Ok(HttpFetcher::new(client).with_client_version(self.http.client_version.as_str()))
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Requests per second; 0 disables rate limiting
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    #[serde(default = "default_burst_size")]
    pub burst_size: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Value of the `X-YouTube-Client-Version` header
    #[serde(default = "default_client_version")]
    pub client_version: String,
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    1_000
}

fn default_max_backoff_ms() -> u64 {
    60_000
}

fn default_requests_per_second() -> u32 {
    RateLimiterConfig::default().requests_per_second
}

fn default_burst_size() -> u32 {
    RateLimiterConfig::default().burst_size
}

fn default_client_version() -> String {
    DEFAULT_CLIENT_VERSION.to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            requests_per_second: default_requests_per_second(),
            burst_size: default_burst_size(),
            user_agent: default_user_agent(),
            client_version: default_client_version(),
        }
    }
}

impl HttpConfig {
    /// Translate into the client's own configuration
    pub fn client_config(&self) -> HttpClientConfig {
        let config = HttpClientConfig::default()
            .timeout(Duration::from_millis(self.timeout_ms))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            )
            .user_agent(self.user_agent.as_str());

        if self.requests_per_second == 0 {
            config.no_rate_limit()
        } else {
            config.rate_limit(RateLimiterConfig::new(
                self.requests_per_second,
                self.burst_size.max(1),
            ))
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a configuration file
///
/// Files ending in `.json` are read as JSON, everything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<ExtractorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed: Result<ExtractorConfig> = if is_json {
        serde_json::from_str(&content).map_err(Error::from)
    } else {
        serde_yaml::from_str(&content).map_err(Error::from)
    };
    let config = parsed.with_context(|| format!("Invalid config file {}", path.display()))?;

    config.validate()?;
    Ok(config)
}

/// Load a configuration from YAML (or JSON, which YAML accepts) text
pub fn load_config_from_str(text: &str) -> Result<ExtractorConfig> {
    let config: ExtractorConfig = if text.trim().is_empty() {
        ExtractorConfig::default()
    } else {
        serde_yaml::from_str(text)?
    };
    config.validate()?;
    Ok(config)
}
