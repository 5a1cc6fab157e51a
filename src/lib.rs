// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # tubelist
//!
//! Paginated extraction of video search results into typed records.
//!
//! ## Features
//!
//! - **Typed records**: videos, channels and playlists parsed from the
//!   service's search payloads
//! - **Partial pages**: one malformed entry becomes an error on the page, its
//!   siblings are still returned
//! - **Opaque cursors**: every page carries the URL of the next one
//! - **Pluggable transport**: a [`Fetcher`](http::Fetcher) trait with a
//!   retrying, rate-limited HTTP implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tubelist::http::{HttpClient, HttpFetcher};
//! use tubelist::pagination::{ListExtractor, Pager};
//! use tubelist::search::{SearchExtractor, SearchQuery};
//! use tubelist::{Localization, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = Arc::new(HttpFetcher::new(HttpClient::new()?));
//!     let mut search = SearchExtractor::new(
//!         fetcher,
//!         SearchQuery::new("rust programming"),
//!         Localization::default(),
//!     );
//!
//!     let mut pager = Pager::new(&mut search).with_max_pages(3);
//!     while let Some(page) = pager.next_page().await? {
//!         for record in page.items() {
//!             println!("{} {}", record.kind(), record.name());
//!         }
//!     }
//!
//!     println!("suggestion: {}", search.search_suggestion()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 ListExtractor (SearchExtractor)                 │
//! │  initial_page() → Page    page(cursor) → Page    next_page_url()│
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┴─┬───────────────┬────────────────┐
//! │   Fetch    │      Decode       │   Classify    │    Records     │
//! ├────────────┼───────────────────┼───────────────┼────────────────┤
//! │ Fetcher    │ Path accessors    │ Collector     │ Video          │
//! │ Retry      │ Text runs         │ Nothing found │ Channel        │
//! │ Rate Limit │ Counts, durations │ Unrecognized  │ Playlist       │
//! └────────────┴───────────────────┴───────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// Payload path accessors and text helpers
pub mod decode;

/// Record types and per-kind extractors
pub mod record;

/// Entry classification and page accumulation
pub mod collector;

/// Pages, listing state and the pagination contract
pub mod pagination;

/// Search listing source
pub mod search;

/// Extractor configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, ExtractorConfig};
pub use pagination::{ListExtractor, ListingState, Page, Pager};
pub use record::{Record, RecordKind};
pub use search::{ContentFilter, SearchExtractor, SearchQuery};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
