//! Drive API file records.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// One file as returned by the Drive `files.list` endpoint.
///
/// Owned by the remote service; read-only input to the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct DriveFile {
    /// Drive file id
    pub id: String,
    /// File name
    pub name: String,
    /// MIME type (e.g. "image/jpeg", "video/mp4")
    pub mime_type: String,
    /// Small preview image served by Drive
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_link: Option<String>,
    /// RFC 3339 creation timestamp
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    /// Whether the file sits in the trash
    #[builder(default)]
    #[serde(default)]
    pub trashed: bool,
}

impl DriveFile {
    /// Creates a new builder for `DriveFile`.
    pub fn builder() -> DriveFileBuilder {
        DriveFileBuilder::default()
    }

    /// True for non-trashed images and videos.
    pub fn is_listable_media(&self) -> bool {
        !self.trashed
            && (self.mime_type.starts_with("image/") || self.mime_type.starts_with("video/"))
    }
}

/// One page of a `files.list` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePage {
    /// Records on this page
    #[serde(default)]
    pub files: Vec<DriveFile>,
    /// Continuation token, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl FilePage {
    /// The continuation token, treating an empty string as absent.
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_page() {
        let json = r#"{
            "nextPageToken": "abc",
            "files": [
                {"id": "f1", "name": "a.jpg", "mimeType": "image/jpeg",
                 "thumbnailLink": "https://lh3.googleusercontent.com/x=s220",
                 "createdTime": "2024-01-01T00:00:00.000Z"}
            ]
        }"#;
        let page: FilePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.continuation(), Some("abc"));
        assert_eq!(page.files[0].mime_type, "image/jpeg");
        assert!(!page.files[0].trashed);
    }

    #[test]
    fn empty_page_has_no_continuation() {
        let page: FilePage = serde_json::from_str(r#"{"nextPageToken": ""}"#).unwrap();
        assert!(page.files.is_empty());
        assert_eq!(page.continuation(), None);
    }
}
