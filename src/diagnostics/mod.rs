//! Pluggable diagnostic logging.
//!
//! The transport reports its own operational problems (rejected envelopes)
//! through a [`DiagnosticLogger`]. This channel is separate from the events
//! being shipped. Messages are structured as a template with named
//! placeholders plus positional arguments so sinks can keep the arguments
//! as fields instead of a pre-rendered string.
//!
//! Implementations shipped with the crate:
//!
//! - [`LogCrateLogger`]: renders the template and forwards to the `log` facade.
//! - [`TracingLogger`] (`tracing-compat` feature): emits `tracing` events.
//! - [`CollectingLogger`] (tests and the `test-util` feature): stores every
//!   call for later assertions.

use std::error::Error;
use std::fmt::Display;

use crate::level::DiagnosticLevel;

#[cfg(any(test, feature = "test-util"))]
mod collecting;
mod log_logger;
mod template;
#[cfg(feature = "tracing-compat")]
mod tracing_logger;

#[cfg(any(test, feature = "test-util"))]
pub use collecting::{CollectingLogger, LoggedEntry};
pub use log_logger::{LOG_TARGET, LogCrateLogger};
pub use template::render_template;
#[cfg(feature = "tracing-compat")]
pub use tracing_logger::TracingLogger;

/// Leveled sink for the transport's own diagnostics.
///
/// Implementations must tolerate concurrent calls: one transport instance
/// may report rejections from several in-flight sends at once.
pub trait DiagnosticLogger: Send + Sync {
    /// Return `true` when entries at `level` would be recorded.
    ///
    /// Callers check this before building arguments.
    fn is_enabled(&self, level: DiagnosticLevel) -> bool;

    /// Record an entry.
    ///
    /// `template` contains `{name}` placeholders matched positionally by
    /// `args`. `error` carries the failure that prompted the entry, if any.
    fn log(
        &self,
        level: DiagnosticLevel,
        template: &str,
        error: Option<&(dyn Error + 'static)>,
        args: &[&dyn Display],
    );
}
