//! Search query and URL construction

use serde::{Deserialize, Serialize};

/// Restricts a search to one kind of result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ContentFilter {
    #[default]
    All,
    Videos,
    Channels,
    Playlists,
}

impl ContentFilter {
    /// Value of the `sp` parameter, already percent-encoded
    pub fn search_params(self) -> Option<&'static str> {
        match self {
            ContentFilter::All => None,
            ContentFilter::Videos => Some("EgIQAQ%253D%253D"),
            ContentFilter::Channels => Some("EgIQAg%253D%253D"),
            ContentFilter::Playlists => Some("EgIQAw%253D%253D"),
        }
    }
}

/// Text query plus filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    #[serde(default)]
    pub filter: ContentFilter,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filter: ContentFilter::All,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: ContentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Base search URL: `<base>/results?search_query=<q>[&sp=<filter>]&gl=<country>`
    ///
    /// Cursors for later pages are built by appending to this URL.
    pub fn url(&self, base_url: &str, country: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(self.text.as_bytes()).collect();
        let mut url = format!(
            "{}/results?search_query={encoded}",
            base_url.trim_end_matches('/')
        );
        if let Some(sp) = self.filter.search_params() {
            url.push_str("&sp=");
            url.push_str(sp);
        }
        url.push_str("&gl=");
        url.push_str(country);
        url
    }
}
