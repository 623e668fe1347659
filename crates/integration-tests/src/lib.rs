//! Integration tests for the wishlist service.
//!
//! The tests in `tests/` spawn the service on an ephemeral port and drive
//! it over HTTP with `reqwest`, exercising the external contract: wishlist
//! CRUD, media attachments with checksum verification, and line items.
//!
//! This library provides the shared harness: [`TestContext`] owns a running
//! server instance and an HTTP client, and [`md5_hex`] computes the
//! checksums the media tests assert on.

#![cfg_attr(not(test), forbid(unsafe_code))]

use md5::{Digest, Md5};
use reqwest::Client;

use wishlist_server::config::ServerConfig;
use wishlist_server::state::AppState;

/// Tenant used by the test suite.
pub const TENANT: &str = "acme";

/// Client identifier used by the test suite.
pub const CLIENT: &str = "test";

/// Customer identity seeded into the directory; valid wishlist owner.
pub const CUSTOMER: &str = "customer@example.com";

/// A running server instance plus an HTTP client pointed at it.
pub struct TestContext {
    /// HTTP client for driving the service.
    pub client: Client,
    /// Base URL of the spawned server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
}

impl TestContext {
    /// Spawn the service on an ephemeral port.
    ///
    /// The listener is bound before the configuration is built so the
    /// base URL (used in `Location` headers and media URIs) carries the
    /// real port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; tests cannot proceed
    /// without a running server.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Listener has no local addr");
        let base_url = format!("http://{addr}");

        let config = ServerConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: base_url.clone(),
            max_upload_bytes: 10 * 1024 * 1024,
            known_customers: vec![CUSTOMER.to_owned()],
        };

        let app = wishlist_server::app(AppState::new(config));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Build an absolute URL for a service path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Compute the lowercase hex MD5 digest of a byte slice.
#[must_use]
pub fn md5_hex(bytes: &[u8]) -> String {
    let digest = Md5::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_vector() {
        // RFC 1321 test vector
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_hex_empty() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
