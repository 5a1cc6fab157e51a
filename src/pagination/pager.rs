//! Page-by-page driver for any [`ListExtractor`]

use super::extractor::ListExtractor;
use super::types::Page;
use crate::error::Result;
use tracing::debug;

/// Walks a listing from its first page, following cursors
///
/// Stops when a page has no next page or after `max_pages` pages.
pub struct Pager<'a, E: ListExtractor> {
    extractor: &'a mut E,
    next_page_url: Option<String>,
    max_pages: Option<usize>,
    pages_fetched: usize,
}

impl<'a, E: ListExtractor> Pager<'a, E> {
    pub fn new(extractor: &'a mut E) -> Self {
        Self {
            extractor,
            next_page_url: None,
            max_pages: None,
            pages_fetched: 0,
        }
    }

    /// Limit the number of pages fetched
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetch the next page, `None` once the listing or the page limit is exhausted
    pub async fn next_page(&mut self) -> Result<Option<Page<E::Item>>> {
        if self.max_pages.is_some_and(|max| self.pages_fetched >= max) {
            return Ok(None);
        }

        let page = match self.next_page_url.as_deref() {
            None => self.extractor.initial_page().await?,
            Some("") => return Ok(None),
            Some(url) => {
                debug!(page = self.pages_fetched + 1, "following cursor");
                self.extractor.page(url).await?
            }
        };

        self.pages_fetched += 1;
        self.next_page_url = Some(page.next_page_url().to_string());
        Ok(Some(page))
    }

    /// Fetch every remaining page
    pub async fn collect_all(mut self) -> Result<Vec<Page<E::Item>>> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await? {
            pages.push(page);
        }
        Ok(pages)
    }
}
