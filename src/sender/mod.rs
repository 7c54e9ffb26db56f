//! Byte transport abstraction.
//!
//! [`TransportSender`] is the seam between the envelope transport and the
//! network. Production code uses [`UreqSender`]; tests substitute a fake
//! that records requests and returns canned responses.

mod config;
#[cfg(any(test, feature = "test-util"))]
mod recording;
mod ureq_sender;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::SendError;
use crate::http::{TransportRequest, TransportResponse};

pub use config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_WRITE_TIMEOUT, SenderConfig};
#[cfg(any(test, feature = "test-util"))]
pub use recording::{RecordedCall, RecordingSender};
pub use ureq_sender::UreqSender;

/// Dispatches a request and yields the response.
///
/// Implementations must observe `cancel`: a token that is already cancelled
/// or fires while the request is in flight should end the call with
/// [`SendError::Cancelled`]. A well-formed response with a failure status
/// is still `Ok`; only the absence of a response is an error. Timeouts, if
/// any, are the implementation's responsibility.
#[async_trait]
pub trait TransportSender: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, SendError>;
}
