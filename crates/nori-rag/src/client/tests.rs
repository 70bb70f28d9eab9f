//! HttpBackend against an in-process TCP responder.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::*;
use crate::identity::{IdentityParams, IdentityPolicy};
use crate::request::{HistoryEntry, OutgoingRequest};
use crate::{Message, RagError, RetrievalBackend};

/// Captured request: lower-cased head and raw body.
struct Captured {
    head: String,
    body: String,
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Accept one connection, read a full request, answer with `status` and `body`.
async fn respond_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/chat", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head_end, content_length) = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending a full request");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                break (end, len);
            }
        };
        while buf.len() < head_end + 4 + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        Captured {
            head: String::from_utf8_lossy(&buf[..head_end]).to_lowercase(),
            body: String::from_utf8_lossy(&buf[head_end + 4..]).to_string(),
        }
    });

    (url, handle)
}

fn sample_request() -> OutgoingRequest {
    let identity = IdentityParams::new("u1")
        .with_studio_id("1001")
        .validate(IdentityPolicy::user_and_studio())
        .unwrap();
    OutgoingRequest::new(
        "Hello",
        &identity,
        vec![HistoryEntry::from(&Message::user("Hello"))],
    )
}

#[tokio::test]
async fn posts_json_with_api_key() {
    let (url, server) = respond_once("200 OK", r#"{"answer":"Hi!"}"#).await;
    let backend = HttpBackend::new(BackendConfig::new(url).with_api_key("k-123")).unwrap();

    let reply = backend.send(&sample_request()).await.unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, r#"{"answer":"Hi!"}"#);

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("post /chat http/1.1"));
    assert!(captured.head.contains("content-type: application/json"));
    assert!(captured.head.contains("x-api-key: k-123"));

    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["message"], "Hello");
    assert_eq!(sent["user_id"], "u1");
    assert_eq!(sent["studio_id"], "1001");
    assert_eq!(sent["history"][0]["role"], "user");
}

#[tokio::test]
async fn omits_api_key_header_when_unset() {
    let (url, server) = respond_once("200 OK", "{}").await;
    let backend = HttpBackend::new(BackendConfig::new(url)).unwrap();

    backend.send(&sample_request()).await.unwrap();

    let captured = server.await.unwrap();
    assert!(!captured.head.contains("x-api-key"));
}

#[tokio::test]
async fn error_status_is_a_reply_not_an_error() {
    let (url, _server) = respond_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let backend = HttpBackend::new(BackendConfig::new(url)).unwrap();

    let reply = backend.send(&sample_request()).await.unwrap();
    assert_eq!(reply.status, 500);
    assert_eq!(reply.body, r#"{"error":"boom"}"#);
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/chat", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let backend = HttpBackend::new(
        BackendConfig::new(url).with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = backend.send(&sample_request()).await.unwrap_err();
    assert!(matches!(err, RagError::Timeout(_)), "got {err:?}");
    assert!(err.is_transport());
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/chat", listener.local_addr().unwrap());
    drop(listener);

    let backend = HttpBackend::new(BackendConfig::new(url)).unwrap();
    let err = backend.send(&sample_request()).await.unwrap_err();
    assert!(matches!(err, RagError::Network(_)), "got {err:?}");
}

#[test]
fn blank_api_key_is_ignored() {
    let config = BackendConfig::new("http://localhost").with_api_key("   ");
    assert_eq!(config.api_key, None);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn debug_redacts_api_key() {
    let config = BackendConfig::new("http://localhost").with_api_key("secret-key");
    let dbg = format!("{config:?}");
    assert!(!dbg.contains("secret-key"));
    assert!(dbg.contains("[REDACTED]"));
}

#[test]
fn header_unsafe_api_key_fails_at_construction() {
    let result = HttpBackend::new(BackendConfig::new("http://localhost").with_api_key("bad\nkey"));
    assert!(matches!(result, Err(RagError::Configuration(_))));
}

#[test]
fn api_key_header_is_prepared_once() {
    let backend = HttpBackend::new(BackendConfig::new("http://localhost").with_api_key("k-9")).unwrap();
    assert_eq!(backend.headers.get("x-api-key").unwrap(), "k-9");
    assert!(backend.headers.get("x-api-key").unwrap().is_sensitive());
    assert_eq!(backend.headers.get("content-type").unwrap(), "application/json");
}
