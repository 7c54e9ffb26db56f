//! Diagnostic logger backed by the `log` facade.

use std::error::Error;
use std::fmt::Display;

use super::{DiagnosticLogger, template::render_template};
use crate::level::DiagnosticLevel;

/// Target used for every record emitted by [`LogCrateLogger`].
pub const LOG_TARGET: &str = "envelope_transport";

/// Forwards diagnostics to whichever `log` implementation the host installed.
///
/// Entries below `min_level` are dropped before the template is rendered.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogCrateLogger {
    min_level: DiagnosticLevel,
}

impl LogCrateLogger {
    pub fn new(min_level: DiagnosticLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> DiagnosticLevel {
        self.min_level
    }
}

impl DiagnosticLogger for LogCrateLogger {
    fn is_enabled(&self, level: DiagnosticLevel) -> bool {
        level >= self.min_level && log::log_enabled!(target: LOG_TARGET, level.as_log_level())
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
        match error {
            Some(err) => log::log!(target: LOG_TARGET, level.as_log_level(), "{message}: {err}"),
            None => log::log!(target: LOG_TARGET, level.as_log_level(), "{message}"),
        }
    }
}
