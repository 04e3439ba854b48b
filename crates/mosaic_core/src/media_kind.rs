//! Media kind enumeration.

/// How an item is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum MediaKind {
    /// Still image, shown through its thumbnail
    #[display("image")]
    Image,
    /// Video, shown through an embedded preview player
    #[display("video")]
    Video,
}

impl MediaKind {
    /// Classify a MIME type. Only the `video/` prefix makes a video.
    pub fn from_mime_type(mime_type: &str) -> Self {
        if mime_type.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}
