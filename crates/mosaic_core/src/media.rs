//! Normalized media items, the records of the manifest.

use crate::MediaKind;
use chrono::{DateTime, FixedOffset};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A display-ready media record as written to `media.json`.
///
/// Built once per build run and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use mosaic_core::{MediaItem, MediaKind};
///
/// let item = MediaItem::builder()
///     .id("b1")
///     .name("clip.mp4")
///     .mime_type("video/mp4")
///     .folder_id("folder-b")
///     .thumb("https://drive.google.com/thumbnail?id=b1&sz=w800")
///     .url_view("https://drive.google.com/file/d/b1/preview?autoplay=1")
///     .url_dl("https://drive.google.com/uc?export=download&id=b1")
///     .build()
///     .unwrap();
///
/// assert_eq!(item.kind(), MediaKind::Video);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct MediaItem {
    /// Drive file id, unique within a manifest
    pub(crate) id: String,
    /// File name
    pub(crate) name: String,
    /// MIME type, used to tell images from videos
    #[serde(rename = "mimeType")]
    pub(crate) mime_type: String,
    /// RFC 3339 creation timestamp
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub(crate) created_time: Option<String>,
    /// Folder this item was listed from
    #[serde(rename = "folderId")]
    pub(crate) folder_id: String,
    /// Thumbnail URL
    pub(crate) thumb: String,
    /// Full-size view URL (direct view for images, embedded player for videos)
    pub(crate) url_view: String,
    /// Direct download URL
    pub(crate) url_dl: String,
}

impl MediaItem {
    /// Creates a new builder for `MediaItem`.
    pub fn builder() -> MediaItemBuilder {
        MediaItemBuilder::default()
    }

    /// Image or video, from the MIME type prefix.
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime_type(&self.mime_type)
    }

    /// Parsed creation time; `None` when absent or not RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.created_time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
    }
}
