//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WISHLIST_HOST` - Bind address (default: 127.0.0.1)
//! - `WISHLIST_PORT` - Listen port (default: 8080)
//! - `WISHLIST_BASE_URL` - Public URL used in `Location` headers and media
//!   URIs (default: `http://{host}:{port}`)
//! - `WISHLIST_MAX_UPLOAD_BYTES` - Media upload size cap (default: 10 MiB)
//! - `WISHLIST_KNOWN_CUSTOMERS` - Comma-separated customer ids seeded into
//!   the customer directory (default: empty)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Wishlist server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the service
    pub base_url: String,
    /// Maximum accepted media upload size in bytes
    pub max_upload_bytes: usize,
    /// Customer ids the directory resolves
    pub known_customers: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("WISHLIST_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("WISHLIST_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("WISHLIST_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("WISHLIST_PORT".to_string(), e.to_string()))?;
        let base_url =
            get_optional_env("WISHLIST_BASE_URL").unwrap_or_else(|| format!("http://{host}:{port}"));
        let max_upload_bytes = match get_optional_env("WISHLIST_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.parse::<usize>().map_err(|e| {
                ConfigError::InvalidEnvVar("WISHLIST_MAX_UPLOAD_BYTES".to_string(), e.to_string())
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        let known_customers =
            parse_customer_list(&get_optional_env("WISHLIST_KNOWN_CUSTOMERS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            base_url,
            max_upload_bytes,
            known_customers,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a comma-separated customer list, dropping empty entries.
fn parse_customer_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customer_list() {
        let customers = parse_customer_list("a@example.com, b@example.com");
        assert_eq!(customers, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_parse_customer_list_empty() {
        assert!(parse_customer_list("").is_empty());
        assert!(parse_customer_list(" , ,").is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            known_customers: Vec::new(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
    }
}
