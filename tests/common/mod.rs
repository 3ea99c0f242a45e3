//! Shared mock HTTP backends for integration tests
//!
//! Hand-rolled HTTP/1.1 over a raw `TcpListener`, so tests control the exact
//! bytes on the wire (including odd statuses and connection handling).

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

fn reason_phrase(status: u16) -> &'static str {
    match status {
        101 => "Switching Protocols",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        _ => "OK",
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = vec![0u8; 8192];
    let mut request = String::new();
    loop {
        match socket.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                request.push_str(&String::from_utf8_lossy(&buf[..n]));
                // Headers are enough for these tests; stop once we have them
                // plus whatever body arrived in the same segments
                if request.contains("\r\n\r\n") {
                    let body_len = request
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            let value = lower.strip_prefix("content-length:")?;
                            value.trim().parse::<usize>().ok()
                        })
                        .unwrap_or(0);
                    let body_received = request.split("\r\n\r\n").nth(1).map_or(0, |b| b.len());
                    if body_received >= body_len {
                        break;
                    }
                }
            }
            Err(_) => break,
        }
    }
    request
}

fn write_response(status: u16, body: &str) -> String {
    if status == 101 || status == 204 {
        // No body on informational / no-content responses
        format!("HTTP/1.1 {} {}\r\nConnection: close\r\n\r\n", status, reason_phrase(status))
    } else {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason_phrase(status),
            body.len(),
            body
        )
    }
}

/// Start a backend that answers with the status code named by the request
/// path (`GET /404` answers 404). Unrecognized paths answer 200.
pub async fn start_status_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        let status = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .and_then(|path| path.trim_start_matches('/').parse::<u16>().ok())
                            .unwrap_or(200);
                        let response = write_response(status, "{}");
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a backend that always answers 200 with an empty JSON body.
pub async fn start_ok_backend() -> SocketAddr {
    start_status_backend().await
}

/// Reserve a port with nothing listening on it: connections are refused.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start a mock token endpoint.
///
/// Answers `status`; on 200 the body carries the given access token.
pub async fn start_token_backend(status: u16, access_token: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = if status == 200 {
        format!(
            r#"{{"access_token":"{access_token}","token_type":"Bearer","refresh_token":"r","expires_in":2592000,"scope":"profile openid"}}"#
        )
    } else {
        r#"{"error":"invalid_grant"}"#.to_string()
    };

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let body = body.clone();
                    tokio::spawn(async move {
                        let _ = read_request(&mut socket).await;
                        let response = write_response(status, &body);
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// A report collector that records every request it receives.
pub struct ReportCollector {
    /// Address the collector listens on
    pub addr: SocketAddr,
    /// Raw requests received, headers and body
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Start a mock report collector answering `status` and capturing requests.
pub async fn start_report_backend(status: u16) -> ReportCollector {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let captured = Arc::clone(&captured);
                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        captured.lock().await.push(request);
                        let response = write_response(status, "{}");
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    ReportCollector { addr, requests }
}
