//! Result records
//!
//! Typed records for the entries a search listing can contain, and the
//! extractors that build them from raw renderer objects.

mod extractors;
mod types;

pub use extractors::{
    ChannelExtractor, ExtractorSet, PlaylistExtractor, RecordExtractor, VideoExtractor,
};
pub use types::{
    ChannelRecord, PlaylistRecord, Record, RecordKind, StreamType, VideoRecord, SERVICE_URL,
};

#[cfg(test)]
mod tests;
