//! Pagination module
//!
//! # Overview
//!
//! Listing sources implement [`ListExtractor`]: a first page, any later page
//! from a cursor, and whether more pages exist. Each fetch yields an immutable
//! [`Page`]. [`Pager`] drives a source through its pages.

mod extractor;
mod pager;
mod types;

pub use extractor::ListExtractor;
pub use pager::Pager;
pub use types::{ListingState, Page};
