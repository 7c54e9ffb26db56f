//! Builder for [`HttpTransport`].
//!
//! Collects the DSN, diagnostics settings, authentication and the sender.
//! Anything left unset falls back to the network sender and DSN-key
//! authentication.

use std::sync::Arc;

use super::{HttpTransport, TransportOptions};
use crate::auth::{AuthConfig, Authenticator};
use crate::diagnostics::DiagnosticLogger;
use crate::error::SendError;
use crate::level::DiagnosticLevel;
use crate::sender::{SenderConfig, TransportSender, UreqSender};

macro_rules! option_setter {
    ($(#[$meta:meta])* $fn_name:ident, $field:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $fn_name(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Builder for constructing [`HttpTransport`] instances.
#[derive(Clone, Default)]
pub struct HttpTransportBuilder {
    options: TransportOptions,
    sender: Option<Arc<dyn TransportSender>>,
    sender_config: Option<SenderConfig>,
    authenticator: Option<Authenticator>,
    auth: Option<AuthConfig>,
}

impl HttpTransportBuilder {
    /// Create a new builder with no DSN configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection descriptor (required).
    pub fn with_dsn(mut self, dsn: impl Into<String>) -> Self {
        self.options.dsn = Some(dsn.into());
        self
    }

    /// Enable diagnostics through the `log` facade when no logger is set.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    /// Minimum level of the logger installed by [`with_debug`](Self::with_debug).
    pub fn with_diagnostic_level(mut self, level: DiagnosticLevel) -> Self {
        self.options.diagnostic_level = level;
        self
    }

    /// Report diagnostics through `logger`.
    pub fn with_diagnostic_logger(mut self, logger: Arc<dyn DiagnosticLogger>) -> Self {
        self.options.diagnostic_logger = Some(logger);
        self
    }

    /// Replace all option values at once.
    pub fn with_options(mut self, options: TransportOptions) -> Self {
        self.options = options;
        self
    }

    option_setter!(
        #[doc = "Dispatch requests through `sender` instead of the network sender."]
        with_sender,
        sender,
        Arc<dyn TransportSender>
    );
    option_setter!(
        #[doc = "Settings for the default network sender."]
        with_sender_config,
        sender_config,
        SenderConfig
    );
    option_setter!(
        #[doc = "Use a custom authentication callback. Takes precedence over `with_auth`."]
        with_authenticator,
        authenticator,
        Authenticator
    );
    option_setter!(
        #[doc = "Select one of the built-in authentication schemes."]
        with_auth,
        auth,
        AuthConfig
    );

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// [`SendError::Configuration`] for a missing or invalid DSN and
    /// [`SendError::Transport`] when the default sender cannot be created.
    pub fn build(self) -> Result<HttpTransport, SendError> {
        let dsn = self.options.parsed_dsn()?;
        let sender = match self.sender {
            Some(sender) => sender,
            None => {
                let config = self.sender_config.unwrap_or_default();
                Arc::new(UreqSender::new(&config)?) as Arc<dyn TransportSender>
            }
        };
        let authenticator = match self.authenticator {
            Some(authenticator) => authenticator,
            None => self.auth.unwrap_or_default().into_authenticator(&dsn),
        };
        HttpTransport::new(self.options, sender, authenticator).map_err(SendError::from)
    }
}
