//! Entry classification
//!
//! Every entry in a result section is an object keyed by a single renderer
//! name. The key decides what the entry is; unknown keys are layout elements
//! (shelves, ads, refinement cards) that never carry results.

use crate::decode::{lookup, text_from_object};
use crate::error::{Error, Result};
use crate::record::RecordKind;
use serde_json::Value;

/// Discriminator of the "no results" promo entry
pub const NO_RESULTS_KEY: &str = "backgroundPromoRenderer";

/// What a raw entry turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind<'a> {
    /// The service says there is nothing to show, with its own message
    NothingFound(String),
    /// A result of a known kind, with its renderer object
    Record {
        kind: RecordKind,
        renderer: &'a Value,
    },
    /// Not a result; carries the discriminator for tracing
    Unrecognized(&'a str),
}

/// Classify a raw entry by its discriminator field
///
/// Fails only when the entry is not an object at all.
pub fn classify(entry: &Value) -> Result<EntryKind<'_>> {
    let object = entry
        .as_object()
        .ok_or_else(|| Error::parsing("entry", format!("expected an object, got {entry}")))?;

    if let Some(promo) = object.get(NO_RESULTS_KEY) {
        let message = lookup(promo, "bodyText")
            .and_then(text_from_object)
            .or_else(|| lookup(promo, "title").and_then(text_from_object))
            .unwrap_or_else(|| "No results found".to_string());
        return Ok(EntryKind::NothingFound(message));
    }

    for kind in RecordKind::ALL {
        if let Some(renderer) = object.get(kind.renderer_key()) {
            return Ok(EntryKind::Record { kind, renderer });
        }
    }

    let key = object.keys().next().map_or("", String::as_str);
    Ok(EntryKind::Unrecognized(key))
}
