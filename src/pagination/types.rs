//! Pagination types
//!
//! Defines the page snapshot and the lifecycle state shared by all listing
//! sources.

use crate::collector::Collector;
use crate::error::Error;
use crate::record::Record;

/// One fetched page: records, the cursor to the next page, and the failures
/// that were swallowed while building it
///
/// The cursor is the full URL of the next page. An empty cursor means there
/// are no further pages.
#[derive(Debug)]
pub struct Page<T = Record> {
    items: Vec<T>,
    next_page_url: String,
    errors: Vec<Error>,
}

impl<T> Page<T> {
    /// Create a page from its parts
    pub fn new(items: Vec<T>, next_page_url: impl Into<String>, errors: Vec<Error>) -> Self {
        Self {
            items,
            next_page_url: next_page_url.into(),
            errors,
        }
    }

    /// A page with no records, no errors and no next page
    pub fn empty() -> Self {
        Self::new(Vec::new(), String::new(), Vec::new())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Cursor for [`ListExtractor::page`](super::ListExtractor::page), empty on the last page
    pub fn next_page_url(&self) -> &str {
        &self.next_page_url
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn has_next_page(&self) -> bool {
        !self.next_page_url.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn into_parts(self) -> (Vec<T>, String, Vec<Error>) {
        (self.items, self.next_page_url, self.errors)
    }
}

impl Page<Record> {
    /// Package a finished collector with the derived cursor
    pub fn from_collector(collector: Collector<'_>, next_page_url: impl Into<String>) -> Self {
        let (items, errors) = collector.into_parts();
        Self::new(items, next_page_url, errors)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Lifecycle of a listing source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingState {
    /// Nothing fetched yet
    #[default]
    Uninitialized,
    /// A page was produced and it has a next page
    Active,
    /// The most recent page had no next page
    Exhausted,
}

impl ListingState {
    /// State after producing a page with the given cursor
    pub fn after_page(next_page_url: &str) -> Self {
        if next_page_url.is_empty() {
            Self::Exhausted
        } else {
            Self::Active
        }
    }

    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
