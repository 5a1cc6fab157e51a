//! Search listing source
//!
//! The initial search payload nests results as
//! `contents.twoColumnSearchResultsRenderer.primaryContents.sectionListRenderer.contents[*].itemSectionRenderer.contents[*]`.
//! Follow-up pages use a flatter shape under
//! `continuationContents.itemSectionContinuation`. Both carry a
//! `continuations[0].nextContinuationData` block with the token for the next
//! page.

use super::query::SearchQuery;
use crate::collector::Collector;
use crate::decode::{
    lookup, non_empty_object, optional_array, optional_str, require, require_array, require_str,
    response_from_envelope, text_from_object,
};
use crate::error::{Error, Result};
use crate::http::Fetcher;
use crate::pagination::{ListExtractor, ListingState, Page};
use crate::record::{ExtractorSet, Record, SERVICE_URL};
use crate::types::{JsonValue, Localization};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};

/// Section list of the initial payload
const SECTIONS_PATH: &str =
    "contents.twoColumnSearchResultsRenderer.primaryContents.sectionListRenderer.contents";

/// Result region of a continuation payload
const CONTINUATION_PATH: &str = "continuationContents.itemSectionContinuation";

/// Search results as a paginated listing
pub struct SearchExtractor {
    fetcher: Arc<dyn Fetcher>,
    extractors: ExtractorSet,
    query: SearchQuery,
    localization: Localization,
    url: String,
    /// `response` object of the first fetch
    initial_data: Option<JsonValue>,
    state: ListingState,
}

impl SearchExtractor {
    /// Create a search listing against the public service
    pub fn new(fetcher: Arc<dyn Fetcher>, query: SearchQuery, localization: Localization) -> Self {
        let url = query.url(SERVICE_URL, &localization.country);
        Self {
            fetcher,
            extractors: ExtractorSet::default(),
            query,
            localization,
            url,
            initial_data: None,
            state: ListingState::Uninitialized,
        }
    }

    /// Point the listing at another origin
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.url = self.query.url(base_url, &self.localization.country);
        self
    }

    /// Replace the record extractors
    #[must_use]
    pub fn with_extractors(mut self, extractors: ExtractorSet) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    /// Corrected query the service offered or silently searched for instead
    ///
    /// An explicit "did you mean" offer wins over a "showing results for"
    /// substitution. Empty when the service offered neither.
    pub fn search_suggestion(&self) -> Result<String> {
        let Some(entry) = self.first_entry()? else {
            return Ok(String::new());
        };

        let did_you_mean = optional_str(
            entry,
            "didYouMeanRenderer.correctedQueryEndpoint.searchEndpoint.query",
        )
        .map(str::to_string)
        .or_else(|| lookup(entry, "didYouMeanRenderer.correctedQuery").and_then(text_from_object))
        .filter(|s| !s.is_empty());
        if let Some(suggestion) = did_you_mean {
            return Ok(suggestion);
        }

        Ok(lookup(entry, "showingResultsForRenderer.correctedQuery")
            .and_then(text_from_object)
            .unwrap_or_default())
    }

    /// Whether the service searched for a corrected query instead of the one given
    pub fn is_corrected_search(&self) -> Result<bool> {
        Ok(self
            .first_entry()?
            .and_then(|entry| non_empty_object(entry, "showingResultsForRenderer"))
            .is_some())
    }

    fn initial_data(&self) -> Result<&JsonValue> {
        self.initial_data.as_ref().ok_or(Error::NotFetched)
    }

    /// First entry of the first section, where suggestions are placed
    fn first_entry(&self) -> Result<Option<&JsonValue>> {
        let sections = require_array(self.initial_data()?, SECTIONS_PATH)?;
        Ok(sections
            .first()
            .and_then(|section| lookup(section, "itemSectionRenderer.contents[0]")))
    }

    /// Build the cursor from a `continuations` array
    ///
    /// Token and tracking parameter are copied as returned by the service.
    fn next_page_url_from(&self, continuations: Option<&Vec<JsonValue>>) -> Result<String> {
        let Some(first) = continuations.and_then(|c| c.first()) else {
            return Ok(String::new());
        };
        let Some(data) = first.get("nextContinuationData") else {
            trace!("continuation block without nextContinuationData");
            return Ok(String::new());
        };

        let continuation = require_str(data, "continuation")?;
        let click_tracking = require_str(data, "clickTrackingParams")?;
        if continuation.is_empty() {
            return Ok(String::new());
        }

        Ok(format!(
            "{}&pbj=1&ctoken={continuation}&continuation={continuation}&itct={click_tracking}",
            self.url
        ))
    }
}

fn finish(collector: Collector<'_>, next_page_url: String) -> Page<Record> {
    let page = Page::from_collector(collector, next_page_url);
    debug!(
        records = page.len(),
        errors = page.errors().len(),
        has_next = page.has_next_page(),
        "search page extracted"
    );
    page
}

#[async_trait]
impl ListExtractor for SearchExtractor {
    type Item = Record;

    fn url(&self) -> &str {
        &self.url
    }

    fn state(&self) -> ListingState {
        self.state
    }

    async fn fetch_page(&mut self) -> Result<()> {
        if self.initial_data.is_some() {
            return Ok(());
        }

        let url = format!("{}&pbj=1", self.url);
        let payload = self.fetcher.fetch(&url, &self.localization).await?;
        let response = response_from_envelope(&payload)?.clone();
        self.initial_data = Some(response);
        Ok(())
    }

    async fn initial_page(&mut self) -> Result<Page<Record>> {
        self.fetch_page().await?;

        let data = self.initial_data()?;
        let sections = require_array(data, SECTIONS_PATH)?;
        let mut collector = Collector::new(&self.extractors);

        for section in sections {
            match optional_array(section, "itemSectionRenderer.contents") {
                Some(entries) => collector.commit_all(entries)?,
                None => trace!("skipping section without itemSectionRenderer"),
            }
        }

        let next_page_url = self.next_page_url()?;
        let page = finish(collector, next_page_url);
        self.state = ListingState::after_page(page.next_page_url());
        Ok(page)
    }

    fn next_page_url(&self) -> Result<String> {
        let sections = require_array(self.initial_data()?, SECTIONS_PATH)?;
        let continuations = sections
            .first()
            .and_then(|section| optional_array(section, "itemSectionRenderer.continuations"));
        self.next_page_url_from(continuations)
    }

    async fn page(&mut self, page_url: &str) -> Result<Page<Record>> {
        if page_url.is_empty() {
            return Err(Error::invalid_page_url("page url is empty"));
        }

        let payload = self.fetcher.fetch(page_url, &self.localization).await?;
        let response = response_from_envelope(&payload)?;
        let continuation = require(response, CONTINUATION_PATH)?;

        let mut collector = Collector::new(&self.extractors);
        if let Some(entries) = optional_array(continuation, "contents") {
            collector.commit_all(entries)?;
        }

        let next_page_url = self.next_page_url_from(optional_array(continuation, "continuations"))?;
        let page = finish(collector, next_page_url);
        self.state = ListingState::after_page(page.next_page_url());
        Ok(page)
    }
}

impl std::fmt::Debug for SearchExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchExtractor")
            .field("url", &self.url)
            .field("localization", &self.localization)
            .field("state", &self.state)
            .field("fetched", &self.initial_data.is_some())
            .finish_non_exhaustive()
    }
}
