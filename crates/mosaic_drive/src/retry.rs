//! Bounded retry with exponential backoff around a [`DriveApi`].

use crate::DriveApi;
use async_trait::async_trait;
use mosaic_core::{FilePage, FolderRef};
use mosaic_error::{DriveResult, RetryableError};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

/// How transient Drive failures are retried.
///
/// `max_retries = 0` disables retries: the first failure ends the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: usize,
    /// Delay before the first retry, doubled for each retry after it
    pub initial_backoff_ms: u64,
    /// Upper bound for a single delay
    pub max_delay_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 500,
            max_delay_secs: 10,
        }
    }
}

impl RetryPolicy {
    fn strategy(&self) -> impl Iterator<Item = Duration> + Send {
        // Delays are 2^n * factor, so the first one is initial_backoff_ms.
        ExponentialBackoff::from_millis(2)
            .factor((self.initial_backoff_ms / 2).max(1))
            .max_delay(Duration::from_secs(self.max_delay_secs))
            .map(jitter)
            .take(self.max_retries)
    }
}

/// Run `attempt`, retrying transient errors according to `policy`.
///
/// Permanent errors (any 4xx other than 408/429) are returned immediately.
pub(crate) async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    operation: &str,
    mut attempt: F,
) -> DriveResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = DriveResult<T>>,
{
    Retry::spawn(policy.strategy(), || {
        let fut = attempt();
        async move {
            match fut.await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(operation, error = %e, "Drive API call failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        }
    })
    .await
}

/// Wraps a [`DriveApi`] so every call is retried per [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryingDriveApi<A> {
    inner: A,
    policy: RetryPolicy,
}

impl<A: DriveApi> RetryingDriveApi<A> {
    /// Wrap `inner` with `policy`.
    pub fn new(inner: A, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// The wrapped API.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A: DriveApi> DriveApi for RetryingDriveApi<A> {
    async fn list_page(&self, folder_id: &str, page_token: Option<&str>) -> DriveResult<FilePage> {
        with_retry(&self.policy, "files.list", || {
            self.inner.list_page(folder_id, page_token)
        })
        .await
    }

    async fn folder_metadata(&self, folder_id: &str) -> DriveResult<FolderRef> {
        with_retry(&self.policy, "files.get", || self.inner.folder_metadata(folder_id)).await
    }
}
