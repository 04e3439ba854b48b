//! Drive v3 REST client.

use crate::DriveApi;
use crate::query::{folder_params, list_params, redact_key};
use async_trait::async_trait;
use mosaic_core::{FilePage, FolderRef};
use mosaic_error::{DriveError, DriveErrorKind, DriveResult};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Drive v3 base URL.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/drive/v3";

/// Drive API client authenticated with an API key.
///
/// Only publicly shared folders are readable with a bare API key.
#[derive(Debug, Clone)]
pub struct DriveClient {
    client: Client,
    api_key: String,
    endpoint: String,
    page_size: u32,
}

impl DriveClient {
    /// Creates a new Drive client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Drive API key
    /// * `endpoint` - Base URL, normally [`DEFAULT_ENDPOINT`]
    /// * `page_size` - Records per `files.list` page
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip(api_key, endpoint))]
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        page_size: u32,
        timeout: Duration,
    ) -> DriveResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DriveError::new(DriveErrorKind::Transport(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        debug!(endpoint = %endpoint, "Creating new Drive client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint,
            page_size,
        })
    }

    fn files_url(&self) -> DriveResult<Url> {
        let raw = format!("{}/files", self.endpoint);
        Url::parse(&raw).map_err(|e| {
            DriveError::new(DriveErrorKind::InvalidUrl(format!("{}: {}", raw, e)))
        })
    }

    /// URL for a `files.list` page.
    fn list_url(&self, folder_id: &str, page_token: Option<&str>) -> DriveResult<Url> {
        let mut url = self.files_url()?;
        url.query_pairs_mut()
            .extend_pairs(list_params(folder_id, page_token, self.page_size, &self.api_key));
        Ok(url)
    }

    /// URL for a `files.get` folder lookup.
    fn folder_url(&self, folder_id: &str) -> DriveResult<Url> {
        let mut url = self.files_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                DriveError::new(DriveErrorKind::InvalidUrl(format!(
                    "{} cannot carry a path",
                    self.endpoint
                )))
            })?
            .push(folder_id);
        url.query_pairs_mut()
            .extend_pairs(folder_params(&self.api_key));
        Ok(url)
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Non-success statuses become [`DriveErrorKind::Api`] with the redacted
    /// URL, the status and the response body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> DriveResult<T> {
        let shown = redact_key(&url);
        debug!(url = %shown, "Sending Drive API request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(url = %shown, error = ?e, "Failed to send request to Drive API");
            DriveError::new(DriveErrorKind::Transport(format!("{}: {}", shown, e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(url = %shown, error = ?e, "Failed to read Drive API error body");
                    format!("<unreadable body: {}>", e)
                }
            };
            error!(status = %status, url = %shown, body = %body, "Drive API returned error");
            return Err(DriveError::new(DriveErrorKind::Api {
                status: status.as_u16(),
                url: shown,
                body,
            }));
        }

        response.json::<T>().await.map_err(|e| {
            error!(url = %shown, error = ?e, "Failed to parse Drive API response");
            DriveError::new(DriveErrorKind::Decode(format!("{}: {}", shown, e)))
        })
    }
}

#[async_trait]
impl DriveApi for DriveClient {
    #[instrument(skip(self), fields(has_token = page_token.is_some()))]
    async fn list_page(&self, folder_id: &str, page_token: Option<&str>) -> DriveResult<FilePage> {
        let url = self.list_url(folder_id, page_token)?;
        self.get_json(url).await
    }

    #[instrument(skip(self))]
    async fn folder_metadata(&self, folder_id: &str) -> DriveResult<FolderRef> {
        let url = self.folder_url(folder_id)?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DriveClient {
        DriveClient::new("k3y", DEFAULT_ENDPOINT, 1000, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn list_url_targets_files_endpoint() {
        let url = client().list_url("folder1", Some("next")).unwrap();
        assert_eq!(url.path(), "/drive/v3/files");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("pageToken".to_string(), "next".to_string())));
        assert!(pairs.contains(&(
            "q".to_string(),
            crate::media_query("folder1")
        )));
    }

    #[test]
    fn folder_url_puts_id_in_path() {
        let url = client().folder_url("folder1").unwrap();
        assert_eq!(url.path(), "/drive/v3/files/folder1");
        assert!(url.query_pairs().any(|(k, v)| k == "fields" && v == "id, name"));
    }

    #[test]
    fn trailing_slash_on_endpoint_is_ignored() {
        let c = DriveClient::new("k", "https://example.test/drive/v3/", 10, Duration::from_secs(1))
            .unwrap();
        assert_eq!(c.files_url().unwrap().as_str(), "https://example.test/drive/v3/files");
    }
}
