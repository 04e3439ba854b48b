//! Mapping of Drive file records to manifest items.
//!
//! Everything here is pure string work: no I/O, and every record carrying an
//! id, a name and a MIME type maps to a [`MediaItem`].

use crate::{DriveFile, MediaItem, MediaKind};
use regex::Regex;
use std::sync::LazyLock;

/// Width of the constructed public thumbnail when Drive sent no link.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 800;

/// Width requested when upscaling a Drive-provided thumbnail link.
pub const DEFAULT_UPSCALE_WIDTH: u32 = 1600;

const AUTH_PARAM: &str = "authuser=0";
const VIEW_PARAM: &str = "export=view";

// Trailing size options on googleusercontent links: =s220, =w400-h300-p, =s220-Ic42
static SIZE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=[swh]\d+(-[A-Za-z0-9]+)*$").expect("size suffix pattern"));

/// Thumbnail sizing used by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrlOptions {
    /// Width of the fallback thumbnail
    pub thumbnail_width: u32,
    /// Width requested from upscaled Drive thumbnails
    pub upscale_width: u32,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            upscale_width: DEFAULT_UPSCALE_WIDTH,
        }
    }
}

/// Map one Drive record from `folder_id` into a manifest item.
///
/// # Examples
///
/// ```
/// use mosaic_core::{DriveFile, UrlOptions, normalize};
///
/// let file = DriveFile::builder()
///     .id("a1")
///     .name("beach.jpg")
///     .mime_type("image/jpeg")
///     .build()
///     .unwrap();
///
/// let item = normalize(&file, "folder-a", &UrlOptions::default());
/// assert_eq!(item.url_view(), "https://drive.google.com/uc?export=view&id=a1");
/// assert_eq!(item.thumb(), "https://drive.google.com/thumbnail?id=a1&sz=w800");
/// ```
pub fn normalize(file: &DriveFile, folder_id: &str, opts: &UrlOptions) -> MediaItem {
    MediaItem {
        id: file.id.clone(),
        name: file.name.clone(),
        mime_type: file.mime_type.clone(),
        created_time: file.created_time.clone(),
        folder_id: folder_id.to_string(),
        thumb: thumbnail_url(file, opts),
        url_view: view_url(&file.id, MediaKind::from_mime_type(&file.mime_type)),
        url_dl: download_url(&file.id),
    }
}

/// Thumbnail for a record: the upscaled Drive link, or the public fallback.
pub fn thumbnail_url(file: &DriveFile, opts: &UrlOptions) -> String {
    match file.thumbnail_link.as_deref().map(str::trim) {
        Some(link) if !link.is_empty() => upscale_thumbnail(link, opts.upscale_width),
        _ => fallback_thumbnail_url(&file.id, opts.thumbnail_width),
    }
}

/// Public thumbnail endpoint keyed by file id.
pub fn fallback_thumbnail_url(id: &str, width: u32) -> String {
    format!("https://drive.google.com/thumbnail?id={}&sz=w{}", id, width)
}

/// Rewrite a Drive thumbnail link to request `width` pixels.
///
/// Any trailing size option is replaced with `=w<width>`, and the query ends
/// up carrying `authuser=0` and `export=view` exactly once. Applying the
/// function to its own output returns the same string.
///
/// # Examples
///
/// ```
/// use mosaic_core::upscale_thumbnail;
///
/// let once = upscale_thumbnail("https://lh3.googleusercontent.com/drive-storage/AbC=s220", 1600);
/// assert_eq!(
///     once,
///     "https://lh3.googleusercontent.com/drive-storage/AbC=w1600?authuser=0&export=view"
/// );
/// assert_eq!(upscale_thumbnail(&once, 1600), once);
/// ```
pub fn upscale_thumbnail(link: &str, width: u32) -> String {
    let (path, query) = match link.split_once('?') {
        Some((path, query)) => (path, query),
        None => (link, ""),
    };

    let base = SIZE_SUFFIX.replace(path, "");

    let mut params: Vec<&str> = query
        .split('&')
        .filter(|p| !p.is_empty())
        .filter(|p| !p.starts_with("authuser=") && !p.starts_with("export="))
        .collect();
    params.push(AUTH_PARAM);
    params.push(VIEW_PARAM);

    format!("{}=w{}?{}", base, width, params.join("&"))
}

/// Full-size view URL: an autoplaying preview for videos, direct view otherwise.
pub fn view_url(id: &str, kind: MediaKind) -> String {
    match kind {
        MediaKind::Video => format!("https://drive.google.com/file/d/{}/preview?autoplay=1", id),
        MediaKind::Image => format!("https://drive.google.com/uc?export=view&id={}", id),
    }
}

/// Direct download URL, the same for every media kind.
pub fn download_url(id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_compound_size_suffix() {
        let out = upscale_thumbnail("https://lh3.googleusercontent.com/x/Tok=w400-h300-p", 1600);
        assert_eq!(
            out,
            "https://lh3.googleusercontent.com/x/Tok=w1600?authuser=0&export=view"
        );
    }

    #[test]
    fn strips_mixed_case_options() {
        let out = upscale_thumbnail("https://lh3.googleusercontent.com/x/Tok=s220-Ic42", 1600);
        assert_eq!(
            out,
            "https://lh3.googleusercontent.com/x/Tok=w1600?authuser=0&export=view"
        );
    }

    #[test]
    fn keeps_unrelated_query_params() {
        let out = upscale_thumbnail("https://lh3.googleusercontent.com/x/Tok=s220?foo=bar&authuser=3", 1600);
        assert_eq!(
            out,
            "https://lh3.googleusercontent.com/x/Tok=w1600?foo=bar&authuser=0&export=view"
        );
    }

    #[test]
    fn link_without_size_suffix_gets_one() {
        let out = upscale_thumbnail("https://lh3.googleusercontent.com/x/Tok", 640);
        assert_eq!(
            out,
            "https://lh3.googleusercontent.com/x/Tok=w640?authuser=0&export=view"
        );
    }

    #[test]
    fn blank_thumbnail_link_falls_back() {
        let file = DriveFile::builder()
            .id("z9")
            .name("z.png")
            .mime_type("image/png")
            .thumbnail_link("   ")
            .build()
            .unwrap();
        assert_eq!(
            thumbnail_url(&file, &UrlOptions::default()),
            "https://drive.google.com/thumbnail?id=z9&sz=w800"
        );
    }
}
