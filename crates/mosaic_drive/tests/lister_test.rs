use async_trait::async_trait;
use mosaic_core::{DriveFile, FilePage, FolderRef};
use mosaic_drive::{
    DriveApi, RetryPolicy, RetryingDriveApi, list_folder, list_folders, resolve_folder_names,
};
use mosaic_error::{DriveError, DriveErrorKind, DriveResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

fn record(id: &str, mime: &str) -> DriveFile {
    DriveFile::builder()
        .id(id)
        .name(format!("{}.file", id))
        .mime_type(mime)
        .build()
        .unwrap()
}

fn api_error(status: u16) -> DriveError {
    DriveError::new(DriveErrorKind::Api {
        status,
        url: "https://www.googleapis.com/drive/v3/files?key=REDACTED".to_string(),
        body: "stub failure".to_string(),
    })
}

/// Stub Drive serving canned pages per folder. Page `n` is requested with token `"p<n>"`.
#[derive(Default)]
struct StubDrive {
    pages: HashMap<String, Vec<FilePage>>,
    names: HashMap<String, String>,
    requests: Mutex<Vec<(String, Option<String>)>>,
    metadata_calls: AtomicUsize,
    fail_list_with: Option<u16>,
}

impl StubDrive {
    fn with_pages(mut self, folder: &str, pages: Vec<Vec<DriveFile>>) -> Self {
        let count = pages.len();
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, files)| FilePage {
                files,
                next_page_token: (i + 1 < count).then(|| format!("p{}", i + 1)),
            })
            .collect();
        self.pages.insert(folder.to_string(), pages);
        self
    }

    fn with_name(mut self, folder: &str, name: &str) -> Self {
        self.names.insert(folder.to_string(), name.to_string());
        self
    }
}

#[async_trait]
impl DriveApi for StubDrive {
    async fn list_page(&self, folder_id: &str, page_token: Option<&str>) -> DriveResult<FilePage> {
        self.requests
            .lock()
            .unwrap()
            .push((folder_id.to_string(), page_token.map(str::to_string)));

        if let Some(status) = self.fail_list_with {
            return Err(api_error(status));
        }

        let index = match page_token {
            None => 0,
            Some(t) => t.trim_start_matches('p').parse::<usize>().unwrap(),
        };
        Ok(self
            .pages
            .get(folder_id)
            .and_then(|p| p.get(index))
            .cloned()
            .unwrap_or_default())
    }

    async fn folder_metadata(&self, folder_id: &str) -> DriveResult<FolderRef> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        match self.names.get(folder_id) {
            Some(name) => Ok(FolderRef::new(folder_id).with_name(name.clone())),
            None => Err(api_error(404)),
        }
    }
}

#[tokio::test]
async fn pagination_returns_all_pages_in_order() {
    let pages: Vec<Vec<DriveFile>> = (0..3)
        .map(|p| {
            (0..4)
                .map(|k| record(&format!("r{}-{}", p, k), "image/jpeg"))
                .collect()
        })
        .collect();
    let expected: Vec<String> = pages.iter().flatten().map(|f| f.id.clone()).collect();
    let stub = StubDrive::default().with_pages("f", pages);

    let files = list_folder(&stub, "f").await.unwrap();

    let ids: Vec<String> = files.iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids, expected);

    let requests = stub.requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].1, None);
    assert_eq!(requests[1].1.as_deref(), Some("p1"));
    assert_eq!(requests[2].1.as_deref(), Some("p2"));
}

#[tokio::test]
async fn lister_never_returns_non_media_or_trashed_records() {
    let mut trashed = record("trashed", "image/png");
    trashed.trashed = true;
    let stub = StubDrive::default().with_pages(
        "f",
        vec![
            vec![record("img", "image/png"), record("doc", "application/pdf")],
            vec![trashed, record("vid", "video/mp4"), record("txt", "text/plain")],
        ],
    );

    let files = list_folder(&stub, "f").await.unwrap();

    let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["img", "vid"]);
}

#[tokio::test]
async fn empty_folder_yields_no_records() {
    let stub = StubDrive::default();
    assert!(list_folder(&stub, "nothing").await.unwrap().is_empty());
}

#[tokio::test]
async fn repeated_token_is_a_pagination_loop() {
    struct Looping;

    #[async_trait]
    impl DriveApi for Looping {
        async fn list_page(&self, _: &str, _: Option<&str>) -> DriveResult<FilePage> {
            Ok(FilePage {
                files: vec![],
                next_page_token: Some("same".to_string()),
            })
        }

        async fn folder_metadata(&self, id: &str) -> DriveResult<FolderRef> {
            Ok(FolderRef::new(id))
        }
    }

    let err = list_folder(&Looping, "f").await.unwrap_err();
    assert!(matches!(err.kind, DriveErrorKind::PaginationLoop { ref token, .. } if token == "same"));
}

#[tokio::test]
async fn api_failure_aborts_listing() {
    let stub = StubDrive {
        fail_list_with: Some(403),
        ..Default::default()
    };

    let err = list_folder(&stub, "f").await.unwrap_err();
    match err.kind {
        DriveErrorKind::Api { status, ref body, .. } => {
            assert_eq!(status, 403);
            assert_eq!(body, "stub failure");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn list_folders_keeps_input_order() {
    let stub = StubDrive::default()
        .with_pages("a", vec![vec![record("a1", "image/jpeg")]])
        .with_pages("b", vec![vec![record("b1", "video/mp4")], vec![record("b2", "image/gif")]])
        .with_pages("c", vec![vec![]]);
    let folders = vec![FolderRef::new("a"), FolderRef::new("b"), FolderRef::new("c")];

    let listed = list_folders(&stub, &folders, 3).await.unwrap();

    let order: Vec<&str> = listed.iter().map(|(f, _)| f.id.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
    assert_eq!(listed[1].1.len(), 2);
    assert!(listed[2].1.is_empty());
}

#[tokio::test]
async fn only_unnamed_folders_are_looked_up() {
    let stub = StubDrive::default().with_name("x", "Resolved X");
    let folders = vec![FolderRef::new("x"), FolderRef::new("y").with_name("Given Y")];

    let resolved = resolve_folder_names(&stub, folders, 2).await.unwrap();

    assert_eq!(resolved[0].name.as_deref(), Some("Resolved X"));
    assert_eq!(resolved[1].name.as_deref(), Some("Given Y"));
    assert_eq!(stub.metadata_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_folder_lookup_fails_resolution() {
    let stub = StubDrive::default();
    let err = resolve_folder_names(&stub, vec![FolderRef::new("missing")], 1)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, DriveErrorKind::Api { status: 404, .. }));
}

/// Fails with `status` for the first `failures` list calls, then serves one empty page.
struct Flaky {
    status: u16,
    failures: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl DriveApi for Flaky {
    async fn list_page(&self, _: &str, _: Option<&str>) -> DriveResult<FilePage> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Err(api_error(self.status))
        } else {
            Ok(FilePage::default())
        }
    }

    async fn folder_metadata(&self, id: &str) -> DriveResult<FolderRef> {
        Ok(FolderRef::new(id))
    }
}

fn fast_policy(max_retries: usize) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        initial_backoff_ms: 1,
        max_delay_secs: 0,
    }
}

#[tokio::test]
async fn transient_errors_are_retried() {
    let api = RetryingDriveApi::new(
        Flaky {
            status: 503,
            failures: 2,
            calls: AtomicUsize::new(0),
        },
        fast_policy(3),
    );

    assert!(list_folder(&api, "f").await.unwrap().is_empty());
    assert_eq!(api.inner().calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn retries_are_bounded() {
    let api = RetryingDriveApi::new(
        Flaky {
            status: 503,
            failures: 10,
            calls: AtomicUsize::new(0),
        },
        fast_policy(2),
    );

    let err = list_folder(&api, "f").await.unwrap_err();
    assert!(matches!(err.kind, DriveErrorKind::Api { status: 503, .. }));
    assert_eq!(api.inner().calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn client_errors_fail_fast() {
    let api = RetryingDriveApi::new(
        Flaky {
            status: 404,
            failures: 10,
            calls: AtomicUsize::new(0),
        },
        fast_policy(5),
    );

    let err = list_folder(&api, "f").await.unwrap_err();
    assert!(matches!(err.kind, DriveErrorKind::Api { status: 404, .. }));
    assert_eq!(api.inner().calls.load(Ordering::SeqCst), 1);
}
