//! Fetcher capability
//!
//! The extraction layer never talks to `reqwest` directly. It asks a
//! [`Fetcher`] for the JSON payload behind a URL, which keeps listing sources
//! testable against canned payloads and lets callers plug in their own
//! transport (proxies, caches, recorded fixtures).

use super::client::HttpClient;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Localization};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE};
use tracing::debug;

/// Web client version sent alongside `X-YouTube-Client-Name: 1`
pub const DEFAULT_CLIENT_VERSION: &str = "2.20200214.04.00";

const CLIENT_NAME: HeaderName = HeaderName::from_static("x-youtube-client-name");
const CLIENT_VERSION: HeaderName = HeaderName::from_static("x-youtube-client-version");

/// Retrieves the JSON payload behind a URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` for the given localization
    ///
    /// Fails with a transport error when the request fails and with a decode
    /// error when the body is not JSON.
    async fn fetch(&self, url: &str, localization: &Localization) -> Result<JsonValue>;
}

/// [`Fetcher`] backed by the crate's retrying HTTP client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: HttpClient,
    client_version: String,
}

impl HttpFetcher {
    /// Create a fetcher over an existing client
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
        }
    }

    /// Override the web client version header
    #[must_use]
    pub fn with_client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = version.into();
        self
    }

    /// Headers the service expects on its `pbj=1` JSON endpoints
    pub fn headers(&self, localization: &Localization) -> Result<HeaderMap> {
        let language = localization.accept_language();
        let language = HeaderValue::from_str(&language).map_err(|_| {
            Error::invalid_config("localization", format!("'{language}' is not a header value"))
        })?;
        let version = HeaderValue::from_str(&self.client_version).map_err(|_| {
            Error::invalid_config(
                "http.client_version",
                format!("'{}' is not a header value", self.client_version),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, language);
        headers.insert(CLIENT_NAME, HeaderValue::from_static("1"));
        headers.insert(CLIENT_VERSION, version);
        Ok(headers)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, localization: &Localization) -> Result<JsonValue> {
        debug!(url, language = %localization.language, country = %localization.country, "fetching payload");
        let headers = self.headers(localization)?;
        self.client.get_json(url, &headers).await
    }
}
