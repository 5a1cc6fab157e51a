//! The listing contract

use super::types::{ListingState, Page};
use crate::error::Result;
use async_trait::async_trait;

/// A source of paginated listings
///
/// Callers fetch [`initial_page`](Self::initial_page), then follow
/// [`Page::next_page_url`] through [`page`](Self::page) until it is empty.
/// Mutating operations take `&mut self`, so one instance serves one caller
/// at a time; independent instances share nothing.
#[async_trait]
pub trait ListExtractor: Send {
    /// Record type the listing yields
    type Item: Send;

    /// URL of the listing's first page
    fn url(&self) -> &str;

    /// Where the source is in its lifecycle
    fn state(&self) -> ListingState;

    /// Fetch and cache the first payload. Does nothing if already fetched.
    async fn fetch_page(&mut self) -> Result<()>;

    /// Build the first page, fetching it first if needed
    async fn initial_page(&mut self) -> Result<Page<Self::Item>>;

    /// Cursor of the page after the initial one, computed from the cached
    /// payload without fetching
    fn next_page_url(&self) -> Result<String>;

    /// Fetch the page behind a cursor from an earlier page
    ///
    /// An empty cursor is rejected with [`Error::InvalidPageUrl`](crate::Error::InvalidPageUrl).
    async fn page(&mut self, page_url: &str) -> Result<Page<Self::Item>>;

    /// Whether the initial page has a successor
    fn has_next_page(&self) -> Result<bool> {
        Ok(!self.next_page_url()?.is_empty())
    }
}
