//! Request and response values exchanged with a
//! [`TransportSender`](crate::TransportSender).
//!
//! Both are plain data: a request is built fresh for every send and a
//! response is consumed immediately after it is received.

mod headers;

pub use headers::RequestHeaders;

/// HTTP method of an outgoing request. Envelopes are always submitted with
/// POST.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HTTPMethod {
    #[default]
    POST,
}

impl HTTPMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::POST => "POST",
        }
    }
}

/// Outgoing request handed to a sender.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HTTPMethod,
    pub url: String,
    pub headers: RequestHeaders,
    pub body: Vec<u8>,
}

impl TransportRequest {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Response produced by a sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Response body; only read for diagnostics when the status is a failure.
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn with_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, or `None` when absent.
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}
