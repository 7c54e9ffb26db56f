//! Settings supplied once when a transport is constructed.

use std::fmt;
use std::sync::Arc;

use crate::diagnostics::{DiagnosticLogger, LogCrateLogger};
use crate::dsn::Dsn;
use crate::error::ConfigurationError;
use crate::level::DiagnosticLevel;

/// Immutable configuration consumed by [`HttpTransport`](super::HttpTransport).
#[derive(Clone, Default)]
pub struct TransportOptions {
    /// Connection descriptor of the ingestion endpoint.
    pub dsn: Option<String>,
    /// Sink for the transport's own diagnostics.
    pub diagnostic_logger: Option<Arc<dyn DiagnosticLogger>>,
    /// Enable diagnostics when no logger was supplied explicitly.
    pub debug: bool,
    /// Minimum level of the default logger installed by `debug`.
    pub diagnostic_level: DiagnosticLevel,
}

impl TransportOptions {
    /// Options targeting `dsn` with every other setting at its default.
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: Some(dsn.into()),
            ..Self::default()
        }
    }

    /// Parse the configured DSN.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingDsn`] if none is set and
    /// [`ConfigurationError::InvalidDsn`] if it does not parse.
    pub fn parsed_dsn(&self) -> Result<Dsn, ConfigurationError> {
        let raw = self.dsn.as_deref().ok_or(ConfigurationError::MissingDsn)?;
        Ok(Dsn::parse(raw)?)
    }

    /// Logger the transport reports through.
    ///
    /// An explicitly supplied logger always wins. Without one, `debug`
    /// installs a [`LogCrateLogger`] at `diagnostic_level`; otherwise
    /// diagnostics are discarded.
    pub fn effective_logger(&self) -> Option<Arc<dyn DiagnosticLogger>> {
        match &self.diagnostic_logger {
            Some(logger) => Some(Arc::clone(logger)),
            None if self.debug => Some(Arc::new(LogCrateLogger::new(self.diagnostic_level))),
            None => None,
        }
    }
}

impl fmt::Debug for TransportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportOptions")
            .field("dsn", &self.dsn)
            .field("diagnostic_logger", &self.diagnostic_logger.is_some())
            .field("debug", &self.debug)
            .field("diagnostic_level", &self.diagnostic_level)
            .finish()
    }
}
