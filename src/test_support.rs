//! Shared test utilities
//!
//! A minimal HTTP/1.1 responder on a local port, used to exercise the sheet
//! export and insight clients without reaching the network.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Canned response served for one connection
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

impl StubResponse {
    pub fn csv(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/csv; charset=utf-8".to_string(),
            body: body.to_string(),
        }
    }

    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json; charset=utf-8".to_string(),
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain".to_string(),
            body: body.to_string(),
        }
    }

    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8".to_string(),
            body: body.to_string(),
        }
    }
}

/// Running stub server
pub struct HttpStub {
    pub base_url: String,
    requests: mpsc::UnboundedReceiver<String>,
}

impl HttpStub {
    /// Raw text (head and body) of the next request received
    pub async fn next_request(&mut self) -> String {
        self.requests.recv().await.unwrap()
    }
}

/// Serve `responses` in order, one per incoming connection
pub async fn spawn_http_stub(responses: Vec<StubResponse>) -> HttpStub {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (sender, requests) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let request = read_request(&mut stream).await.unwrap_or_default();
            let _ = sender.send(request);
            let _ = write_response(&mut stream, &response).await;
        }
    });

    HttpStub { base_url, requests }
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        if let Some(head_end) = find_head_end(&buffer) {
            let head = String::from_utf8_lossy(&buffer[..head_end]).to_string();
            let expected = head_end + 4 + content_length(&head);
            while buffer.len() < expected {
                let read = stream.read(&mut chunk).await?;
                if read == 0 {
                    break;
                }
                buffer.extend_from_slice(&chunk[..read]);
            }
            break;
        }
    }

    Ok(String::from_utf8_lossy(&buffer).to_string())
}

fn find_head_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

async fn write_response(stream: &mut TcpStream, response: &StubResponse) -> std::io::Result<()> {
    let reason = if response.status == 200 { "OK" } else { "Error" };
    let raw = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.content_type,
        response.body.len(),
        response.body
    );
    stream.write_all(raw.as_bytes()).await?;
    stream.shutdown().await
}
