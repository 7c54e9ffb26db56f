//! A sender that records requests and answers from a script.
//!
//! Shared between unit tests and the integration tests (through the
//! `test-util` feature).

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use super::TransportSender;
use crate::error::SendError;
use crate::http::{TransportRequest, TransportResponse};

type Responder = dyn Fn(&TransportRequest) -> Result<TransportResponse, SendError> + Send + Sync;

/// One call observed by [`RecordingSender`].
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub request: TransportRequest,
    /// Whether the token was cancelled when the call arrived.
    pub cancelled_on_entry: bool,
    /// Clone of the token passed in; shares state with the caller's token.
    pub token: CancellationToken,
}

/// [`TransportSender`] answering every request through a closure.
#[derive(Clone)]
pub struct RecordingSender {
    responder: Arc<Responder>,
    honor_cancellation: bool,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingSender {
    /// Answer every request through `responder`.
    pub fn from_fn<F>(responder: F) -> Self
    where
        F: Fn(&TransportRequest) -> Result<TransportResponse, SendError> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            honor_cancellation: false,
            calls: Arc::default(),
        }
    }

    /// Answer every request with `status` and no body.
    pub fn responding(status: u16) -> Self {
        Self::from_fn(move |_| Ok(TransportResponse::new(status)))
    }

    /// Answer every request with `status` and `body`.
    pub fn responding_with_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self::from_fn(move |_| Ok(TransportResponse::with_body(status, body.clone())))
    }

    /// Fail with [`SendError::Cancelled`] when the token is already cancelled.
    pub fn honoring_cancellation(mut self) -> Self {
        self.honor_cancellation = true;
        self
    }

    /// Snapshot of every call received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl TransportSender for RecordingSender {
    async fn send(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, SendError> {
        let cancelled_on_entry = cancel.is_cancelled();
        let result = (self.responder)(&request);
        self.calls.lock().push(RecordedCall {
            request,
            cancelled_on_entry,
            token: cancel.clone(),
        });
        // Give concurrently running sends a chance to interleave.
        tokio::task::yield_now().await;
        if self.honor_cancellation && cancelled_on_entry {
            return Err(SendError::Cancelled);
        }
        result
    }
}
