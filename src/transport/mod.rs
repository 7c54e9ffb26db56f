//! HTTP transport delivering envelopes to the ingestion endpoint.
//!
//! [`HttpTransport`] turns an [`Envelope`](crate::Envelope) into a POST
//! request, dispatches it through a [`TransportSender`](crate::TransportSender)
//! and interprets the response.
//!
//! # Outcome semantics
//!
//! - **2xx**: success, nothing further happens.
//! - **Any other status**: the envelope was rejected. A single error-level
//!   entry is written to the diagnostic logger, and the send still
//!   completes with `Ok(())`. Delivery is best effort.
//! - **No response** (connection failure, TLS failure): returned as
//!   [`SendError::Transport`](crate::SendError::Transport).
//! - **Cancellation**: returned as [`SendError::Cancelled`](crate::SendError::Cancelled).
//!
//! There are no retries and no queueing; each call is one request.

mod builder;
mod http_transport;
mod options;
mod rejection;


pub use builder::HttpTransportBuilder;
pub use http_transport::{HttpTransport, REJECTION_TEMPLATE};
pub use options::TransportOptions;
pub use rejection::{NO_MESSAGE_FALLBACK, rejection_message};
