//! Core transport type.

use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::options::TransportOptions;
use super::rejection::rejection_message;
use crate::auth::{Authenticator, DEFAULT_CLIENT_NAME};
use crate::diagnostics::DiagnosticLogger;
use crate::envelope::{ENVELOPE_CONTENT_TYPE, Envelope, EventId};
use crate::error::{ConfigurationError, SendError};
use crate::http::{HTTPMethod, RequestHeaders, TransportRequest, TransportResponse};
use crate::level::DiagnosticLevel;
use crate::sender::TransportSender;

/// Template of the entry logged when the endpoint rejects an envelope.
pub const REJECTION_TEMPLATE: &str =
    "Sentry rejected the envelope {eventId}. Status code: {statusCode}. Sentry response: {message}";

/// Sends envelopes to the endpoint named by the configured DSN.
///
/// All state is read-only after construction, so one instance can serve
/// any number of concurrent sends.
pub struct HttpTransport {
    endpoint: String,
    sender: Arc<dyn TransportSender>,
    authenticator: Authenticator,
    logger: Option<Arc<dyn DiagnosticLogger>>,
}

impl HttpTransport {
    /// Construct a transport, resolving the endpoint from `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the DSN is missing or invalid.
    pub fn new(
        options: TransportOptions,
        sender: Arc<dyn TransportSender>,
        authenticator: Authenticator,
    ) -> Result<Self, ConfigurationError> {
        let endpoint = options.parsed_dsn()?.envelope_endpoint();
        Ok(Self {
            endpoint,
            sender,
            authenticator,
            logger: options.effective_logger(),
        })
    }

    /// URL envelopes are submitted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request submitting `envelope`.
    ///
    /// The authenticator is invoked exactly once on the fresh header set.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Serialization`] if the envelope cannot be
    /// serialised.
    pub fn create_request(&self, envelope: &Envelope) -> Result<TransportRequest, SendError> {
        let mut headers = RequestHeaders::new();
        headers.insert("Content-Type", ENVELOPE_CONTENT_TYPE);
        headers.insert("User-Agent", DEFAULT_CLIENT_NAME);
        (self.authenticator)(&mut headers);

        let body = envelope
            .try_serialize()
            .map_err(SendError::Serialization)?;
        Ok(TransportRequest {
            method: HTTPMethod::POST,
            url: self.endpoint.clone(),
            headers,
            body,
        })
    }

    /// Submit `envelope` and wait for the endpoint's answer.
    ///
    /// `cancel` is handed to the sender as given; `None` means the send is
    /// never cancelled. A rejection by the endpoint is logged and the call
    /// still returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// [`SendError::Cancelled`] when the token fires, [`SendError::Transport`]
    /// when no response was obtained and [`SendError::Serialization`] when the
    /// envelope cannot be encoded.
    pub async fn send_envelope(
        &self,
        envelope: &Envelope,
        cancel: Option<&CancellationToken>,
    ) -> Result<(), SendError> {
        let request = self.create_request(envelope)?;
        let never_cancelled;
        let cancel = match cancel {
            Some(token) => token,
            None => {
                never_cancelled = CancellationToken::new();
                &never_cancelled
            }
        };

        log::debug!(
            "sending envelope {} ({} bytes) to {}",
            display_event_id(envelope),
            request.body.len(),
            self.endpoint
        );
        let response = self.sender.send(request, cancel).await?;

        if response.is_success() {
            log::debug!("envelope {} accepted", display_event_id(envelope));
        } else {
            self.report_rejection(envelope, &response);
        }
        Ok(())
    }

    fn report_rejection(&self, envelope: &Envelope, response: &TransportResponse) {
        let Some(logger) = self.logger.as_deref() else {
            return;
        };
        if !logger.is_enabled(DiagnosticLevel::Error) {
            return;
        }
        let event_id = display_event_id(envelope);
        let message = rejection_message(response);
        logger.log(
            DiagnosticLevel::Error,
            REJECTION_TEMPLATE,
            None,
            &[&event_id, &response.status, &message],
        );
    }
}

/// Event id of `envelope`, or the nil id when it carries none.
fn display_event_id(envelope: &Envelope) -> EventId {
    envelope.event_id().unwrap_or_else(EventId::nil)
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .field("logger", &self.logger.is_some())
            .finish_non_exhaustive()
    }
}
