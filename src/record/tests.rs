//! Tests for record extractors

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

fn video_renderer() -> serde_json::Value {
    json!({
        "videoId": "dQw4w9WgXcQ",
        "title": {"runs": [{"text": "Never Gonna Give You Up"}]},
        "thumbnail": {"thumbnails": [
            {"url": "//i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"},
            {"url": "//i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"}
        ]},
        "ownerText": {"runs": [{
            "text": "Rick Astley",
            "navigationEndpoint": {"browseEndpoint": {"browseId": "UCuAXFkgsw1L7xaCfnd5JJOw"}}
        }]},
        "lengthText": {"simpleText": "3:33"},
        "viewCountText": {"simpleText": "1,234,567 views"},
        "publishedTimeText": {"simpleText": "14 years ago"},
        "detailedMetadataSnippets": [{"snippetText": {"runs": [{"text": "The official video"}]}}]
    })
}

// ============================================================================
// Video Tests
// ============================================================================

#[test]
fn test_video_extractor_full() {
    let record = VideoExtractor.extract(&video_renderer()).unwrap();

    assert_eq!(
        record,
        Record::Video(VideoRecord {
            id: "dQw4w9WgXcQ".to_string(),
            name: "Never Gonna Give You Up".to_string(),
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
            uploader_name: Some("Rick Astley".to_string()),
            uploader_url: Some(
                "https://www.youtube.com/channel/UCuAXFkgsw1L7xaCfnd5JJOw".to_string()
            ),
            duration: 213,
            view_count: 1_234_567,
            textual_upload_date: Some("14 years ago".to_string()),
            stream_type: StreamType::VideoStream,
            description: Some("The official video".to_string()),
        })
    );
}

#[test]
fn test_video_extractor_live() {
    let mut renderer = video_renderer();
    renderer["badges"] = json!([{"metadataBadgeRenderer": {"style": "BADGE_STYLE_TYPE_LIVE_NOW", "label": "LIVE"}}]);
    renderer["viewCountText"] = json!({"runs": [{"text": "1,024"}, {"text": " watching"}]});

    let Record::Video(video) = VideoExtractor.extract(&renderer).unwrap() else {
        panic!("Expected video");
    };
    assert_eq!(video.stream_type, StreamType::LiveStream);
    assert_eq!(video.duration, -1);
    assert_eq!(video.view_count, 1024);
}

#[test]
fn test_video_extractor_optional_fields_absent() {
    let renderer = json!({
        "videoId": "abc",
        "title": {"simpleText": "Minimal"},
        "thumbnail": {"thumbnails": [{"url": "https://i.ytimg.com/abc.jpg"}]}
    });

    let Record::Video(video) = VideoExtractor.extract(&renderer).unwrap() else {
        panic!("Expected video");
    };
    assert_eq!(video.duration, -1);
    assert_eq!(video.view_count, -1);
    assert!(video.uploader_name.is_none());
    assert!(video.textual_upload_date.is_none());
}

#[test]
fn test_video_extractor_unreadable_display_numbers() {
    let mut renderer = video_renderer();
    renderer["lengthText"] = json!({"simpleText": "999999999999999999:00:00"});
    renderer["viewCountText"] = json!({"simpleText": "1,2 Mio. Aufrufe"});

    let Record::Video(video) = VideoExtractor.extract(&renderer).unwrap() else {
        panic!("Expected video");
    };
    assert_eq!(video.duration, -1);
    assert_eq!(video.view_count, -1);
    assert_eq!(video.name, "Never Gonna Give You Up");
}

#[test]
fn test_video_extractor_missing_id() {
    let mut renderer = video_renderer();
    renderer.as_object_mut().unwrap().remove("videoId");

    let err = VideoExtractor.extract(&renderer).unwrap_err();
    match err {
        Error::Parsing { kind, message } => {
            assert_eq!(kind, "video");
            assert!(message.contains("videoId"));
        }
        other => panic!("Expected Parsing, got {other:?}"),
    }
}

#[test]
fn test_video_extractor_missing_thumbnail() {
    let mut renderer = video_renderer();
    renderer["thumbnail"] = json!({"thumbnails": []});

    assert!(VideoExtractor.extract(&renderer).unwrap_err().is_parsing());
}

// ============================================================================
// Channel Tests
// ============================================================================

#[test]
fn test_channel_extractor() {
    let renderer = json!({
        "channelId": "UC123",
        "title": {"simpleText": "Rust Channel"},
        "thumbnail": {"thumbnails": [{"url": "//yt3.ggpht.com/photo.jpg"}]},
        "subscriberCountText": {"simpleText": "1.2M subscribers"},
        "videoCountText": {"runs": [{"text": "345"}, {"text": " videos"}]},
        "descriptionSnippet": {"runs": [{"text": "All about "}, {"text": "Rust"}]}
    });

    let record = ChannelExtractor.extract(&renderer).unwrap();
    assert_eq!(record.kind(), RecordKind::Channel);
    assert_eq!(record.url(), "https://www.youtube.com/channel/UC123");
    assert_eq!(record.thumbnail_url(), "https://yt3.ggpht.com/photo.jpg");

    let Record::Channel(channel) = record else {
        panic!("Expected channel");
    };
    assert_eq!(channel.subscriber_count, 1_200_000);
    assert_eq!(channel.stream_count, 345);
    assert_eq!(channel.description.as_deref(), Some("All about Rust"));
}

#[test]
fn test_channel_extractor_missing_title() {
    let renderer = json!({
        "channelId": "UC123",
        "thumbnail": {"thumbnails": [{"url": "//yt3.ggpht.com/photo.jpg"}]}
    });
    assert!(ChannelExtractor.extract(&renderer).unwrap_err().is_parsing());
}

// ============================================================================
// Playlist Tests
// ============================================================================

#[test]
fn test_playlist_extractor() {
    let renderer = json!({
        "playlistId": "PL42",
        "title": {"simpleText": "Rust Talks"},
        "thumbnails": [{"thumbnails": [{"url": "https://i.ytimg.com/pl.jpg"}]}],
        "videoCount": "17",
        "shortBylineText": {"runs": [{"text": "RustConf"}]}
    });

    let Record::Playlist(playlist) = PlaylistExtractor.extract(&renderer).unwrap() else {
        panic!("Expected playlist");
    };
    assert_eq!(playlist.url, "https://www.youtube.com/playlist?list=PL42");
    assert_eq!(playlist.name, "Rust Talks");
    assert_eq!(playlist.stream_count, 17);
    assert_eq!(playlist.uploader_name.as_deref(), Some("RustConf"));
}

// ============================================================================
// Record / ExtractorSet Tests
// ============================================================================

#[test]
fn test_record_kind_keys() {
    assert_eq!(RecordKind::Video.renderer_key(), "videoRenderer");
    assert_eq!(RecordKind::Channel.renderer_key(), "channelRenderer");
    assert_eq!(RecordKind::Playlist.renderer_key(), "playlistRenderer");
    assert_eq!(RecordKind::Playlist.to_string(), "playlist");
}

#[test]
fn test_record_serializes_tagged() {
    let record = VideoExtractor.extract(&video_renderer()).unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["type"], "video");
    assert_eq!(value["id"], "dQw4w9WgXcQ");
}

struct FixedChannel;

impl RecordExtractor for FixedChannel {
    fn kind(&self) -> RecordKind {
        RecordKind::Channel
    }

    fn extract(&self, _renderer: &serde_json::Value) -> crate::Result<Record> {
        Err(Error::parsing("channel", "always fails"))
    }
}

#[test]
fn test_extractor_set_override() {
    let set = ExtractorSet::default().with(FixedChannel);

    assert!(set.get(RecordKind::Channel).extract(&json!({})).is_err());
    assert_eq!(set.get(RecordKind::Video).kind(), RecordKind::Video);
    assert!(set
        .get(RecordKind::Video)
        .extract(&video_renderer())
        .is_ok());
}
