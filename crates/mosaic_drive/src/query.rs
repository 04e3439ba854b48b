//! Drive `files.list` query construction.

use reqwest::Url;

/// Largest page size `files.list` accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Fields requested from `files.list`.
pub const LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, thumbnailLink, createdTime)";

/// Fields requested from `files.get` for folder lookups.
pub const FOLDER_FIELDS: &str = "id, name";

/// The `q` filter selecting non-trashed images and videos in `folder_id`.
///
/// # Examples
///
/// ```
/// use mosaic_drive::media_query;
///
/// assert_eq!(
///     media_query("abc"),
///     "'abc' in parents and trashed = false and (mimeType contains 'image/' or mimeType contains 'video/')"
/// );
/// ```
pub fn media_query(folder_id: &str) -> String {
    format!(
        "'{}' in parents and trashed = false and (mimeType contains 'image/' or mimeType contains 'video/')",
        escape_literal(folder_id)
    )
}

// Drive query string literals escape backslash and single quote.
fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Query parameters for one `files.list` call.
pub(crate) fn list_params(
    folder_id: &str,
    page_token: Option<&str>,
    page_size: u32,
    api_key: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", media_query(folder_id)),
        ("fields", LIST_FIELDS.to_string()),
        ("pageSize", page_size.clamp(1, MAX_PAGE_SIZE).to_string()),
        ("includeItemsFromAllDrives", "true".to_string()),
        ("supportsAllDrives", "true".to_string()),
        ("key", api_key.to_string()),
    ];
    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }
    params
}

/// Query parameters for one `files.get` folder lookup.
pub(crate) fn folder_params(api_key: &str) -> Vec<(&'static str, String)> {
    vec![
        ("fields", FOLDER_FIELDS.to_string()),
        ("supportsAllDrives", "true".to_string()),
        ("key", api_key.to_string()),
    ]
}

/// Render `url` for diagnostics with the `key` parameter masked.
pub fn redact_key(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
