//! Search listing
//!
//! [`SearchExtractor`] implements [`ListExtractor`](crate::pagination::ListExtractor)
//! for the service's search results, using continuation tokens for paging.

mod extractor;
mod query;

pub use extractor::SearchExtractor;
pub use query::{ContentFilter, SearchQuery};
