//! Error types for tubelist
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors fall into four groups that callers are expected to treat
//! differently:
//!
//! - **Transport**: the fetch itself failed. Fatal for the call, safe to retry
//!   with the same cursor.
//! - **Structural**: the payload no longer has the shape we walk. Fatal for the
//!   call and not worth retrying.
//! - **Nothing found**: the service explicitly reported an empty result set.
//! - **Parsing**: a single entry could not be turned into a record. These are
//!   collected into the page instead of being returned.

use thiserror::Error;

/// The main error type for tubelist
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Unexpected payload structure at '{path}': {message}")]
    Structural { path: String, message: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Nothing found: {message}")]
    NothingFound { message: String },

    #[error("Failed to parse {kind} entry: {message}")]
    Parsing { kind: String, message: String },

    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("Invalid page url: {message}")]
    InvalidPageUrl { message: String },

    #[error("Initial page has not been fetched yet")]
    NotFetched,

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a structural error for a payload path
    pub fn structural(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structural {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a "nothing found" error carrying the service's message
    pub fn nothing_found(message: impl Into<String>) -> Self {
        Self::NothingFound {
            message: message.into(),
        }
    }

    /// Create a per-entry parsing error
    pub fn parsing(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parsing {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an invalid page url error
    pub fn invalid_page_url(message: impl Into<String>) -> Self {
        Self::InvalidPageUrl {
            message: message.into(),
        }
    }

    /// The fetch failed before a payload was obtained
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::RateLimited { .. }
                | Error::Timeout { .. }
                | Error::InvalidUrl(_)
        )
    }

    /// The payload did not have the expected shape
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::Structural { .. } | Error::Decode { .. })
    }

    /// The service reported an empty result set
    pub fn is_nothing_found(&self) -> bool {
        matches!(self, Error::NothingFound { .. })
    }

    /// A single entry could not be parsed
    pub fn is_parsing(&self) -> bool {
        matches!(self, Error::Parsing { .. })
    }

    /// The caller used the API out of order or with bad input
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidPageUrl { .. } | Error::NotFetched)
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for tubelist
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
