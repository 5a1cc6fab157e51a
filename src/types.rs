//! Common types used throughout tubelist
//!
//! Shared type aliases and small value types used by several modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Localization
// ============================================================================

/// Language and content country a request is made for
///
/// The service localizes both the page text (no-results messages, view count
/// labels) and the result set itself, so every fetch carries one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    /// ISO 639 language code (e.g., "en")
    #[serde(default = "default_language")]
    pub language: String,
    /// ISO 3166 country code (e.g., "US")
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            language: default_language(),
            country: default_country(),
        }
    }
}

impl Localization {
    /// Create a localization from language and country codes
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }

    /// Value for the `Accept-Language` header, e.g. `en-US`
    pub fn accept_language(&self) -> String {
        if self.country.is_empty() {
            self.language.clone()
        } else {
            format!("{}-{}", self.language, self.country.to_uppercase())
        }
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
