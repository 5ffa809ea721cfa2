//! Minimal HTTP/1.1 server for exercising the exchange adapters offline.
//!
//! Routes are matched on the full request target (path plus query). An
//! unmatched request gets a 404.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Clone, Debug)]
pub struct Route {
    pub target: String,
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Route {
    pub fn ok(target: &str, body: &str) -> Self {
        Self {
            target: target.to_string(),
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(target: &str, status: u16, body: &str) -> Self {
        Self {
            status,
            ..Self::ok(target, body)
        }
    }

    pub fn slow(target: &str, body: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::ok(target, body)
        }
    }
}

pub struct StubServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");

        let task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &routes).await;
                });
            }
        });

        Self { addr, task }
    }

    /// Base URL without a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(mut stream: TcpStream, routes: &[Route]) -> std::io::Result<()> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request = String::from_utf8_lossy(&buf);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (status, body) = match routes.iter().find(|r| r.target == target) {
        Some(route) => {
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            (route.status, route.body.clone())
        }
        None => (404, format!("{{\"error\":\"no route for {target}\"}}")),
    };

    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
