//! A logger that accumulates diagnostics in memory for test assertions.
//!
//! Shared between unit tests and the integration tests (through the
//! `test-util` feature) so each test module does not need its own copy.

use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

use parking_lot::Mutex;

use super::DiagnosticLogger;
use crate::level::DiagnosticLevel;

/// One captured [`DiagnosticLogger::log`] call with its arguments rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggedEntry {
    pub level: DiagnosticLevel,
    pub template: String,
    pub error: Option<String>,
    pub args: Vec<String>,
}

/// Logger that stores every entry it receives.
#[derive(Clone, Debug)]
pub struct CollectingLogger {
    enabled: bool,
    entries: Arc<Mutex<Vec<LoggedEntry>>>,
    enabled_checks: Arc<Mutex<Vec<DiagnosticLevel>>>,
}

impl Default for CollectingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectingLogger {
    /// Create a logger reporting every level as enabled.
    pub fn new() -> Self {
        Self {
            enabled: true,
            entries: Arc::default(),
            enabled_checks: Arc::default(),
        }
    }

    /// Create a logger reporting every level as disabled.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Return a snapshot of all entries received so far.
    pub fn collected(&self) -> Vec<LoggedEntry> {
        self.entries.lock().clone()
    }

    /// Return entries recorded at `level`.
    pub fn at_level(&self, level: DiagnosticLevel) -> Vec<LoggedEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .cloned()
            .collect()
    }

    /// Levels passed to [`DiagnosticLogger::is_enabled`], in call order.
    pub fn enabled_checks(&self) -> Vec<DiagnosticLevel> {
        self.enabled_checks.lock().clone()
    }
}

impl DiagnosticLogger for CollectingLogger {
    fn is_enabled(&self, level: DiagnosticLevel) -> bool {
        self.enabled_checks.lock().push(level);
        self.enabled
    }

    fn log(
        &self,
        level: DiagnosticLevel,
        template: &str,
        error: Option<&(dyn Error + 'static)>,
        args: &[&dyn Display],
    ) {
        self.entries.lock().push(LoggedEntry {
            level,
            template: template.to_owned(),
            error: error.map(|err| err.to_string()),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
    }
}
