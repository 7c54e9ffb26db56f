//! Settings for the network-backed sender.

use std::time::Duration;

/// Default connection timeout applied when establishing HTTP connections.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default overall request timeout.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound on response bytes kept for diagnostics.
pub const MAX_RESPONSE_BODY: u64 = 64 * 1024;

/// Configuration consumed by [`UreqSender`](super::UreqSender).
#[derive(Clone, Debug)]
pub struct SenderConfig {
    /// Timeout for establishing connections.
    pub connect_timeout: Duration,
    /// Timeout for the whole request, from connect to the last body byte.
    pub write_timeout: Duration,
    /// Skip certificate validation when true (intended for tests).
    pub accept_invalid_certs: bool,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}
