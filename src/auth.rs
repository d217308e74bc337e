//! Authentication module for Buycoins.
//!
//! The API authenticates every request with HTTP Basic auth built from the
//! account's public and secret keys:
//!
//! ```text
//! Authorization: Basic base64(public_key:secret_key)
//! ```
//!
//! [`Credentials`] is built once and shared read-only by every request.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Basic auth credentials for the Buycoins API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    header_value: String,
}

impl Credentials {
    /// Encode a public/secret key pair into a Basic auth header value.
    pub fn new(public_key: &str, secret_key: &str) -> Self {
        let token = STANDARD.encode(format!("{}:{}", public_key, secret_key));
        Self {
            header_value: format!("Basic {}", token),
        }
    }

    /// The full `Authorization` header value, including the `Basic ` prefix.
    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

// Keep the secret out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("header_value", &"Basic <redacted>")
            .finish()
    }
}
