//! Shared test utilities: a single-request HTTP stub over loopback.
//!
//! Each stub serves exactly one connection with a canned status and JSON
//! body, and hands the captured request back to the test for inspection.

use pb_core::config::PushbulletConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One captured HTTP request.
pub struct CapturedRequest {
    /// Everything up to the blank line, including the request line.
    pub head: String,
    /// The request body, if any.
    pub body: String,
}

impl CapturedRequest {
    /// The request line, e.g. "POST /v2/chats HTTP/1.1".
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or("")
    }

    /// Look up a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<String> {
        let want = name.to_ascii_lowercase();
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.trim().to_ascii_lowercase() == want {
                Some(value.trim().to_string())
            } else {
                None
            }
        })
    }

    /// Parse the request body as JSON.
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body was not valid JSON")
    }
}

/// Spawn a stub server answering one request with `status` and `body`.
///
/// Returns the base URL to point the client at and a receiver that yields
/// the captured request once the stub has answered.
pub async fn spawn_stub(
    status: u16,
    body: &str,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has no local addr");
    let (tx, rx) = oneshot::channel();

    let response = format!(
        "HTTP/1.1 {status} OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("stub accept failed");

        let mut buf: Vec<u8> = Vec::new();
        let (head_end, content_length) = loop {
            let mut chunk = [0u8; 1024];
            let n = socket.read(&mut chunk).await.expect("stub read failed");
            if n == 0 {
                panic!("connection closed before request head was complete");
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find_blank_line(&buf) {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                break (pos, parse_content_length(&head));
            }
        };

        while buf.len() < head_end + 4 + content_length {
            let mut chunk = [0u8; 1024];
            let n = socket.read(&mut chunk).await.expect("stub read failed");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        socket
            .write_all(response.as_bytes())
            .await
            .expect("stub write failed");
        let _ = socket.shutdown().await;

        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let body_bytes = &buf[head_end + 4..];
        let _ = tx.send(CapturedRequest {
            head,
            body: String::from_utf8_lossy(body_bytes).to_string(),
        });
    });

    (format!("http://{addr}"), rx)
}

/// Config pointing at a stub server.
pub fn stub_config(base: &str) -> PushbulletConfig {
    PushbulletConfig {
        access_token: "o.stub-token".to_string(),
        api_base: base.to_string(),
        api_timeout_ms: 5_000,
    }
}

fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn parse_content_length(head: &str) -> usize {
    head.lines()
        .skip(1)
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}
