//! Payload decoding module
//!
//! Helpers for reading the service's loosely structured JSON.
//!
//! # Overview
//!
//! - [`accessors`]: path lookups that fail with one structural error kind
//! - [`text`]: renderer text, thumbnail, count and duration helpers

pub mod accessors;
pub mod text;

pub use accessors::{
    lookup, non_empty_object, optional_array, optional_str, require, require_array,
    require_object, require_str, response_from_envelope,
};
pub use text::{best_thumbnail, fix_thumbnail_url, parse_count, parse_duration, text_from_object};
