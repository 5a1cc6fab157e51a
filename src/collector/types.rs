//! Per-page record collector

use super::classify::{classify, EntryKind};
use crate::error::{Error, Result};
use crate::record::{ExtractorSet, Record};
use serde_json::Value;
use tracing::{trace, warn};

/// Accumulates the records and swallowed failures of one fetched page
///
/// Each committed entry ends up as exactly one record, exactly one error, or
/// nothing at all when it is not a result.
#[derive(Debug)]
pub struct Collector<'a> {
    extractors: &'a ExtractorSet,
    items: Vec<Record>,
    errors: Vec<Error>,
}

impl<'a> Collector<'a> {
    /// Create an empty collector using the given extractors
    pub fn new(extractors: &'a ExtractorSet) -> Self {
        Self {
            extractors,
            items: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Classify and extract one raw entry
    ///
    /// Parsing failures are recorded and `Ok(())` is returned. The only error
    /// returned is [`Error::NothingFound`], which aborts the page.
    pub fn commit(&mut self, entry: &Value) -> Result<()> {
        match classify(entry) {
            Ok(EntryKind::NothingFound(message)) => Err(Error::nothing_found(message)),
            Ok(EntryKind::Record { kind, renderer }) => {
                match self.extractors.get(kind).extract(renderer) {
                    Ok(record) => self.items.push(record),
                    Err(e) => self.add_error(e),
                }
                Ok(())
            }
            Ok(EntryKind::Unrecognized(key)) => {
                trace!(key, "skipping non-result entry");
                Ok(())
            }
            Err(e) => {
                self.add_error(e);
                Ok(())
            }
        }
    }

    /// Commit every entry of a section, stopping only on "nothing found"
    pub fn commit_all<'v>(&mut self, entries: impl IntoIterator<Item = &'v Value>) -> Result<()> {
        for entry in entries {
            self.commit(entry)?;
        }
        Ok(())
    }

    /// Record a failure without aborting the page
    pub fn add_error(&mut self, error: Error) {
        warn!(error = %error, "entry skipped");
        self.errors.push(error);
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Take the collected records and errors
    pub fn into_parts(self) -> (Vec<Record>, Vec<Error>) {
        (self.items, self.errors)
    }
}
