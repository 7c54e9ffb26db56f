//! HTTP transport for diagnostic event envelopes.
//!
//! The crate serialises [`Envelope`]s, authenticates and POSTs them to the
//! ingestion endpoint described by a [`Dsn`], and reports rejected
//! submissions through a pluggable [`DiagnosticLogger`]. The network is
//! reached through the [`TransportSender`] trait so tests can substitute
//! their own sender.
//!
//! ```ignore
//! use envelope_transport::{Envelope, EventId, HttpTransportBuilder};
//!
//! let transport = HttpTransportBuilder::new()
//!     .with_dsn("https://public@o1.ingest.example.com/42")
//!     .with_debug(true)
//!     .build()?;
//! let envelope = Envelope::from_event(EventId::new(), serde_json::json!({"message": "boom"}));
//! transport.send_envelope(&envelope, None).await?;
//! ```

pub mod auth;
pub mod diagnostics;
pub mod dsn;
pub mod envelope;
pub mod error;
pub mod http;
pub mod level;
pub mod sender;
#[cfg(any(test, feature = "test-util"))]
pub mod test_utils;
pub mod transport;

pub use auth::{AuthConfig, Authenticator, authenticator, noop_authenticator};
#[cfg(any(test, feature = "test-util"))]
pub use diagnostics::{CollectingLogger, LoggedEntry};
pub use diagnostics::{DiagnosticLogger, LOG_TARGET, LogCrateLogger, render_template};
#[cfg(feature = "tracing-compat")]
pub use diagnostics::TracingLogger;
pub use dsn::{Dsn, DsnError};
pub use envelope::{Envelope, EnvelopeItem, EventId, ItemPayload, ItemType};
pub use error::{ConfigurationError, SendError, TransportFault};
pub use http::{HTTPMethod, RequestHeaders, TransportRequest, TransportResponse};
pub use level::DiagnosticLevel;
#[cfg(any(test, feature = "test-util"))]
pub use sender::{RecordedCall, RecordingSender};
pub use sender::{SenderConfig, TransportSender, UreqSender};
pub use transport::{
    HttpTransport, HttpTransportBuilder, NO_MESSAGE_FALLBACK, REJECTION_TEMPLATE,
    TransportOptions,
};

/// Re-exported so callers need not depend on `tokio-util` directly.
pub use tokio_util::sync::CancellationToken;
