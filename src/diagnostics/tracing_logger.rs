//! Diagnostic logger emitting `tracing` events.

use std::error::Error;
use std::fmt::Display;

use super::{DiagnosticLogger, template::render_template};
use crate::level::DiagnosticLevel;

/// Emits each diagnostic as a `tracing` event carrying the raw template as
/// a field alongside the rendered message.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger {
    min_level: DiagnosticLevel,
}

impl TracingLogger {
    pub fn new(min_level: DiagnosticLevel) -> Self {
        Self { min_level }
    }
}

impl DiagnosticLogger for TracingLogger {
    fn is_enabled(&self, level: DiagnosticLevel) -> bool {
        if level < self.min_level {
            return false;
        }
        match level {
            DiagnosticLevel::Debug => tracing::enabled!(tracing::Level::DEBUG),
            DiagnosticLevel::Info => tracing::enabled!(tracing::Level::INFO),
            DiagnosticLevel::Warning => tracing::enabled!(tracing::Level::WARN),
            DiagnosticLevel::Error | DiagnosticLevel::Fatal => {
                tracing::enabled!(tracing::Level::ERROR)
            }
        }
    }

    fn log(
        &self,
        level: DiagnosticLevel,
        template: &str,
        error: Option<&(dyn Error + 'static)>,
        args: &[&dyn Display],
    ) {
        if level < self.min_level {
            return;
        }
        let message = render_template(template, args);
        let error = error.map(|err| err.to_string());
        match level {
            DiagnosticLevel::Debug => {
                tracing::debug!(template, error = error.as_deref(), "{message}")
            }
            DiagnosticLevel::Info => {
                tracing::info!(template, error = error.as_deref(), "{message}")
            }
            DiagnosticLevel::Warning => {
                tracing::warn!(template, error = error.as_deref(), "{message}")
            }
            DiagnosticLevel::Error | DiagnosticLevel::Fatal => {
                tracing::error!(template, error = error.as_deref(), "{message}")
            }
        }
    }
}
