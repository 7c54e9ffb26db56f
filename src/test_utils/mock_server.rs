//! Minimal single-connection HTTP server for exercising the network sender.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Request line, lowercased headers and body of one received request.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Value of header `name`; names are stored lowercased.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

enum Reply {
    Raw(String),
    Hold(mpsc::Receiver<()>),
}

/// Server accepting exactly one connection on an ephemeral local port.
///
/// Dropping the server releases a held connection.
pub struct MockServer {
    addr: SocketAddr,
    requests: mpsc::Receiver<CapturedRequest>,
    release: Option<mpsc::Sender<()>>,
}

impl MockServer {
    /// Answer the first request with `status` and `body`.
    pub fn respond_once(status: u16, body: &str) -> Self {
        Self::raw_once(format!(
            "HTTP/1.1 {status} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            reason_phrase(status),
            body.len(),
        ))
    }

    /// Write `response` verbatim after the first request, then close.
    pub fn raw_once(response: impl Into<String>) -> Self {
        Self::spawn(Reply::Raw(response.into()), None)
    }

    /// Read the first request and keep the connection open without
    /// answering until the server is dropped.
    pub fn hold_once() -> Self {
        let (tx, rx) = mpsc::channel();
        Self::spawn(Reply::Hold(rx), Some(tx))
    }

    fn spawn(reply: Reply, release: Option<mpsc::Sender<()>>) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral listener");
        let addr = listener.local_addr().expect("listener has address");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let captured = read_http_request(&mut stream);
            let _ = tx.send(captured);
            match reply {
                Reply::Raw(response) => {
                    let _ = stream.write_all(response.as_bytes());
                }
                Reply::Hold(release) => {
                    let _ = release.recv();
                }
            }
        });
        Self {
            addr,
            requests: rx,
            release,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// DSN pointing at this server for project `42`.
    pub fn dsn(&self) -> String {
        format!("http://public@{}/42", self.addr)
    }

    /// Wait for the request the server received.
    pub fn received(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server received a request")
    }

    /// The received request, if one arrives within `wait`.
    pub fn try_received(&self, wait: Duration) -> Option<CapturedRequest> {
        self.requests.recv_timeout(wait).ok()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.release.take();
    }
}

/// Local address with nothing listening on it.
pub fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral listener");
    listener.local_addr().expect("listener has address")
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        413 => "Payload Too Large",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn read_http_request(stream: &mut TcpStream) -> CapturedRequest {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .expect("read request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_owned();
    let path = parts.next().unwrap_or_default().to_owned();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("read header");
        if line.trim().is_empty() {
            break;
        }
        if let Some((key, value)) = line.trim().split_once(':') {
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().to_owned();
            if key == "content-length" {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((key, value));
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).expect("read body");
    CapturedRequest {
        method,
        path,
        headers,
        body,
    }
}
