//! `DriveClient` against a local one-shot HTTP server.

use mosaic_drive::{DriveApi, DriveClient};
use mosaic_error::{DriveErrorKind, RetryableError};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const KEY: &str = "k3y";

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

/// Answer a single request with `response` verbatim and hand back the raw request head.
async fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}/drive/v3", addr), handle)
}

fn client(endpoint: &str) -> DriveClient {
    DriveClient::new(KEY, endpoint, 1000, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn error_response_carries_status_url_and_body() {
    let (endpoint, server) = serve_once(http_response("403 Forbidden", r#"{"error":"nope"}"#)).await;

    let err = client(&endpoint)
        .list_page("fold'er", None)
        .await
        .unwrap_err();
    let request = server.await.unwrap();

    assert!(!err.is_retryable());
    match &err.kind {
        DriveErrorKind::Api { status, url, body } => {
            assert_eq!(*status, 403);
            assert_eq!(body, r#"{"error":"nope"}"#);
            assert!(url.starts_with(&format!("{}/files?", endpoint)));
            assert!(url.contains("key=REDACTED"));
            assert!(!url.contains(KEY));
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert!(err.to_string().contains("403"));

    // The real key still goes over the wire.
    assert!(request.starts_with("GET /drive/v3/files?"));
    assert!(request.contains("key=k3y"));
}

#[tokio::test]
async fn success_response_decodes_into_page() {
    let body = r#"{"nextPageToken":"t2","files":[{"id":"a1","name":"a.jpg","mimeType":"image/jpeg","createdTime":"2024-01-01T00:00:00Z"}]}"#;
    let (endpoint, server) = serve_once(http_response("200 OK", body)).await;

    let page = client(&endpoint)
        .list_page("folder1", Some("t1"))
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert_eq!(page.files.len(), 1);
    assert_eq!(page.files[0].id, "a1");
    assert_eq!(page.files[0].mime_type, "image/jpeg");
    assert_eq!(page.continuation(), Some("t2"));
    assert!(request.contains("pageToken=t1"));
}

#[tokio::test]
async fn folder_lookup_decodes_name() {
    let (endpoint, server) =
        serve_once(http_response("200 OK", r#"{"id":"F1","name":"Family"}"#)).await;

    let folder = client(&endpoint).folder_metadata("F1").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(folder.id, "F1");
    assert_eq!(folder.name.as_deref(), Some("Family"));
    assert!(request.starts_with("GET /drive/v3/files/F1?"));
}

#[tokio::test]
async fn truncated_error_body_is_reported() {
    let response = "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"err"
        .to_string();
    let (endpoint, server) = serve_once(response).await;

    let err = client(&endpoint)
        .list_page("folder1", None)
        .await
        .unwrap_err();
    server.await.unwrap();

    assert!(err.is_retryable());
    match &err.kind {
        DriveErrorKind::Api { status, body, .. } => {
            assert_eq!(*status, 500);
            assert!(body.starts_with("<unreadable body:"), "body was {body:?}");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
