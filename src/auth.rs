//! Request authentication.
//!
//! An [`Authenticator`] is a callback that augments the headers of every
//! outgoing request. The transport invokes it exactly once per request,
//! before dispatch, and may do so from several tasks at once.
//! [`AuthConfig`] builds the common callbacks.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};

use crate::dsn::Dsn;
use crate::http::RequestHeaders;

/// Envelope protocol version advertised in the auth header.
pub const SENTRY_PROTOCOL_VERSION: u32 = 7;
/// Client identifier sent when none is configured.
pub const DEFAULT_CLIENT_NAME: &str = concat!("envelope-transport/", env!("CARGO_PKG_VERSION"));
/// Header carrying DSN-derived credentials.
pub const SENTRY_AUTH_HEADER: &str = "X-Sentry-Auth";

/// Callback mutating the headers of an outgoing request.
pub type Authenticator = Arc<dyn Fn(&mut RequestHeaders) + Send + Sync>;

/// Wrap a closure as an [`Authenticator`].
pub fn authenticator<F>(f: F) -> Authenticator
where
    F: Fn(&mut RequestHeaders) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Authenticator that leaves headers untouched.
pub fn noop_authenticator() -> Authenticator {
    authenticator(|_| {})
}

/// Authentication schemes with built-in authenticators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication.
    None,
    /// `X-Sentry-Auth` header derived from the DSN keys.
    SentryKey { client: String },
    /// HTTP Basic authentication with username and password.
    Basic { username: String, password: String },
    /// Bearer token authentication.
    Bearer { token: String },
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::SentryKey {
            client: DEFAULT_CLIENT_NAME.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Build the authenticator for this scheme.
    ///
    /// Header values are computed once here; the returned callback only
    /// copies them into each request.
    pub fn into_authenticator(self, dsn: &Dsn) -> Authenticator {
        match self {
            Self::None => noop_authenticator(),
            Self::SentryKey { client } => {
                let value = sentry_auth_value(dsn, &client);
                authenticator(move |headers| headers.insert(SENTRY_AUTH_HEADER, value.clone()))
            }
            Self::Basic { username, password } => {
                let credentials = format!("{username}:{password}");
                let value = format!("Basic {}", base64_encode(credentials.as_bytes()));
                authenticator(move |headers| headers.insert("Authorization", value.clone()))
            }
            Self::Bearer { token } => {
                let value = format!("Bearer {token}");
                authenticator(move |headers| headers.insert("Authorization", value.clone()))
            }
        }
    }
}

/// Value of the `X-Sentry-Auth` header for `dsn`.
pub fn sentry_auth_value(dsn: &Dsn, client: &str) -> String {
    let mut value = format!(
        "Sentry sentry_version={SENTRY_PROTOCOL_VERSION}, sentry_client={client}, sentry_key={}",
        dsn.public_key()
    );
    if let Some(secret) = dsn.secret_key() {
        value.push_str(", sentry_secret=");
        value.push_str(secret);
    }
    value
}

/// Base64-encode a byte slice for Basic auth.
fn base64_encode(input: &[u8]) -> String {
    BASE64_STANDARD.encode(input)
}
