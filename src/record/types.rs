//! Record types
//!
//! A search result page mixes several kinds of entries. Each is parsed into
//! one variant of [`Record`] and is never modified afterwards.

use serde::{Deserialize, Serialize};

/// Canonical origin used to build record URLs
pub const SERVICE_URL: &str = "https://www.youtube.com";

/// The kinds of record a listing can yield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Video,
    Channel,
    Playlist,
}

impl RecordKind {
    /// All kinds, in classification priority order
    pub const ALL: [RecordKind; 3] = [RecordKind::Video, RecordKind::Channel, RecordKind::Playlist];

    /// The payload field that discriminates entries of this kind
    pub fn renderer_key(self) -> &'static str {
        match self {
            RecordKind::Video => "videoRenderer",
            RecordKind::Channel => "channelRenderer",
            RecordKind::Playlist => "playlistRenderer",
        }
    }

    /// Short lowercase name, used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Video => "video",
            RecordKind::Channel => "channel",
            RecordKind::Playlist => "playlist",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a video is a regular upload or currently live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamType {
    #[default]
    VideoStream,
    LiveStream,
}

/// A video result
///
/// Numeric fields use -1 when the service did not display a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub thumbnail_url: String,
    pub uploader_name: Option<String>,
    pub uploader_url: Option<String>,
    /// Duration in seconds
    pub duration: i64,
    pub view_count: i64,
    /// Upload date as displayed (e.g. "3 weeks ago"), not parsed
    pub textual_upload_date: Option<String>,
    pub stream_type: StreamType,
    pub description: Option<String>,
}

/// A channel result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub thumbnail_url: String,
    pub subscriber_count: i64,
    pub stream_count: i64,
    pub description: Option<String>,
}

/// A playlist result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub thumbnail_url: String,
    pub uploader_name: Option<String>,
    pub stream_count: i64,
}

/// One classified result entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Video(VideoRecord),
    Channel(ChannelRecord),
    Playlist(PlaylistRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Video(_) => RecordKind::Video,
            Record::Channel(_) => RecordKind::Channel,
            Record::Playlist(_) => RecordKind::Playlist,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Video(v) => &v.name,
            Record::Channel(c) => &c.name,
            Record::Playlist(p) => &p.name,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Record::Video(v) => &v.url,
            Record::Channel(c) => &c.url,
            Record::Playlist(p) => &p.url,
        }
    }

    pub fn thumbnail_url(&self) -> &str {
        match self {
            Record::Video(v) => &v.thumbnail_url,
            Record::Channel(c) => &c.thumbnail_url,
            Record::Playlist(p) => &p.thumbnail_url,
        }
    }
}
