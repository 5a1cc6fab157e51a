//! Record extractor implementations
//!
//! Each extractor turns one renderer object (the value under
//! `videoRenderer`, `channelRenderer`, ...) into a [`Record`]. Missing required
//! fields fail with [`Error::Parsing`]; optional display fields fall back to
//! `None` or -1.

use super::types::{
    ChannelRecord, PlaylistRecord, Record, RecordKind, StreamType, VideoRecord, SERVICE_URL,
};
use crate::decode::{best_thumbnail, lookup, optional_str, parse_count, parse_duration, text_from_object};
use crate::error::{Error, Result};
use serde_json::Value;

/// Parses one renderer object into a [`Record`]
pub trait RecordExtractor: Send + Sync {
    /// The kind this extractor produces
    fn kind(&self) -> RecordKind;

    /// Parse a renderer object
    fn extract(&self, renderer: &Value) -> Result<Record>;
}

// ============================================================================
// Field helpers
// ============================================================================

fn required_str(renderer: &Value, path: &str, kind: RecordKind) -> Result<String> {
    optional_str(renderer, path)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::parsing(kind.as_str(), format!("missing '{path}'")))
}

fn required_text(renderer: &Value, path: &str, kind: RecordKind) -> Result<String> {
    lookup(renderer, path)
        .and_then(text_from_object)
        .ok_or_else(|| Error::parsing(kind.as_str(), format!("missing text at '{path}'")))
}

fn required_thumbnail(renderer: &Value, path: &str, kind: RecordKind) -> Result<String> {
    lookup(renderer, path)
        .and_then(best_thumbnail)
        .ok_or_else(|| Error::parsing(kind.as_str(), format!("missing thumbnail at '{path}'")))
}

fn optional_text(renderer: &Value, path: &str) -> Option<String> {
    lookup(renderer, path).and_then(text_from_object)
}

fn count_or_unknown(text: Option<String>) -> i64 {
    text.as_deref().and_then(parse_count).unwrap_or(-1)
}

/// First byline run: `(name, channel url)`
fn byline(renderer: &Value) -> (Option<String>, Option<String>) {
    let run = ["ownerText", "longBylineText", "shortBylineText"]
        .iter()
        .find_map(|key| lookup(renderer, &format!("{key}.runs[0]")));

    let Some(run) = run else {
        return (None, None);
    };

    let name = optional_str(run, "text").map(str::to_string);
    let url = optional_str(run, "navigationEndpoint.browseEndpoint.browseId")
        .map(|id| format!("{SERVICE_URL}/channel/{id}"));
    (name, url)
}

// ============================================================================
// Video
// ============================================================================

/// Extracts [`VideoRecord`]s from `videoRenderer` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoExtractor;

impl VideoExtractor {
    fn is_live(renderer: &Value) -> bool {
        let badge_live = renderer
            .get("badges")
            .and_then(Value::as_array)
            .is_some_and(|badges| {
                badges.iter().any(|badge| {
                    optional_str(badge, "metadataBadgeRenderer.style")
                        .is_some_and(|style| style.contains("LIVE_NOW"))
                })
            });
        let overlay_live = renderer
            .get("thumbnailOverlays")
            .and_then(Value::as_array)
            .is_some_and(|overlays| {
                overlays.iter().any(|overlay| {
                    optional_str(overlay, "thumbnailOverlayTimeStatusRenderer.style") == Some("LIVE")
                })
            });
        badge_live || overlay_live
    }
}

impl RecordExtractor for VideoExtractor {
    fn kind(&self) -> RecordKind {
        RecordKind::Video
    }

    fn extract(&self, renderer: &Value) -> Result<Record> {
        let kind = self.kind();
        let id = required_str(renderer, "videoId", kind)?;
        let name = required_text(renderer, "title", kind)?;
        let thumbnail_url = required_thumbnail(renderer, "thumbnail", kind)?;
        let (uploader_name, uploader_url) = byline(renderer);

        let stream_type = if Self::is_live(renderer) {
            StreamType::LiveStream
        } else {
            StreamType::VideoStream
        };

        let duration = match stream_type {
            StreamType::LiveStream => -1,
            StreamType::VideoStream => optional_text(renderer, "lengthText")
                .as_deref()
                .and_then(parse_duration)
                .unwrap_or(-1),
        };

        let description = optional_text(renderer, "detailedMetadataSnippets[0].snippetText")
            .or_else(|| optional_text(renderer, "descriptionSnippet"));

        Ok(Record::Video(VideoRecord {
            url: format!("{SERVICE_URL}/watch?v={id}"),
            id,
            name,
            thumbnail_url,
            uploader_name,
            uploader_url,
            duration,
            view_count: count_or_unknown(optional_text(renderer, "viewCountText")),
            textual_upload_date: optional_text(renderer, "publishedTimeText"),
            stream_type,
            description,
        }))
    }
}

// ============================================================================
// Channel
// ============================================================================

/// Extracts [`ChannelRecord`]s from `channelRenderer` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelExtractor;

impl RecordExtractor for ChannelExtractor {
    fn kind(&self) -> RecordKind {
        RecordKind::Channel
    }

    fn extract(&self, renderer: &Value) -> Result<Record> {
        let kind = self.kind();
        let id = required_str(renderer, "channelId", kind)?;

        Ok(Record::Channel(ChannelRecord {
            url: format!("{SERVICE_URL}/channel/{id}"),
            name: required_text(renderer, "title", kind)?,
            thumbnail_url: required_thumbnail(renderer, "thumbnail", kind)?,
            subscriber_count: count_or_unknown(optional_text(renderer, "subscriberCountText")),
            stream_count: count_or_unknown(optional_text(renderer, "videoCountText")),
            description: optional_text(renderer, "descriptionSnippet"),
            id,
        }))
    }
}

// ============================================================================
// Playlist
// ============================================================================

/// Extracts [`PlaylistRecord`]s from `playlistRenderer` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaylistExtractor;

impl RecordExtractor for PlaylistExtractor {
    fn kind(&self) -> RecordKind {
        RecordKind::Playlist
    }

    fn extract(&self, renderer: &Value) -> Result<Record> {
        let kind = self.kind();
        let id = required_str(renderer, "playlistId", kind)?;
        let (uploader_name, _) = byline(renderer);

        // videoCount is a bare numeric string, unlike the display texts
        let stream_count = optional_str(renderer, "videoCount")
            .and_then(|count| count.parse().ok())
            .or_else(|| optional_text(renderer, "videoCountText").as_deref().and_then(parse_count))
            .unwrap_or(-1);

        Ok(Record::Playlist(PlaylistRecord {
            url: format!("{SERVICE_URL}/playlist?list={id}"),
            name: required_text(renderer, "title", kind)?,
            thumbnail_url: required_thumbnail(renderer, "thumbnails[0]", kind)?,
            uploader_name,
            stream_count,
            id,
        }))
    }
}

// ============================================================================
// Extractor set
// ============================================================================

/// One registered extractor per [`RecordKind`]
pub struct ExtractorSet {
    video: Box<dyn RecordExtractor>,
    channel: Box<dyn RecordExtractor>,
    playlist: Box<dyn RecordExtractor>,
}

impl ExtractorSet {
    /// Replace the extractor for its kind
    #[must_use]
    pub fn with(mut self, extractor: impl RecordExtractor + 'static) -> Self {
        let slot = match extractor.kind() {
            RecordKind::Video => &mut self.video,
            RecordKind::Channel => &mut self.channel,
            RecordKind::Playlist => &mut self.playlist,
        };
        *slot = Box::new(extractor);
        self
    }

    /// The extractor registered for `kind`
    pub fn get(&self, kind: RecordKind) -> &dyn RecordExtractor {
        match kind {
            RecordKind::Video => self.video.as_ref(),
            RecordKind::Channel => self.channel.as_ref(),
            RecordKind::Playlist => self.playlist.as_ref(),
        }
    }
}

impl Default for ExtractorSet {
    fn default() -> Self {
        Self {
            video: Box::new(VideoExtractor),
            channel: Box::new(ChannelExtractor),
            playlist: Box::new(PlaylistExtractor),
        }
    }
}

impl std::fmt::Debug for ExtractorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorSet").finish_non_exhaustive()
    }
}
