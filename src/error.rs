//! Error types crossing the transport boundary.
//!
//! Only configuration problems, transport faults and cancellation surface
//! to callers. A remote rejection (non-success status) is absorbed by the
//! transport and reported through the diagnostic logger instead.

use std::io;

use thiserror::Error;

use crate::dsn::DsnError;

/// Errors raised while turning options into a usable transport.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No connection descriptor was supplied.
    #[error("no DSN configured")]
    MissingDsn,
    /// The connection descriptor could not be parsed.
    #[error("invalid DSN: {0}")]
    InvalidDsn(#[from] DsnError),
}

/// Failure of the byte transport before any response was obtained.
#[derive(Debug, Error)]
pub enum TransportFault {
    /// Connection could not be established (refused, DNS failure).
    #[error("connection failed: {0}")]
    Connect(String),
    /// TLS setup or handshake failure.
    #[error("TLS failure: {0}")]
    Tls(String),
    /// I/O error while writing the request or reading the response.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Any other transport-level failure.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Errors returned by [`HttpTransport::send_envelope`](crate::HttpTransport::send_envelope).
#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The envelope could not be serialised into a request body.
    #[error("failed to serialise envelope: {0}")]
    Serialization(#[source] io::Error),
    #[error(transparent)]
    Transport(#[from] TransportFault),
    /// The caller's cancellation token fired before a response arrived.
    #[error("send cancelled")]
    Cancelled,
}

impl SendError {
    /// Return `true` when the send was aborted through cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
