//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_API_URL` - Base URL of the catalog/order service
//!   (default: <http://127.0.0.1:3001/api>)
//! - `CATALOG_READ_TIMEOUT_MS` - Deadline for catalog reads (default: 5000)
//! - `CATALOG_WRITE_TIMEOUT_MS` - Deadline for order submission (default: 10000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog/order service client configuration
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Catalog/order service client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (e.g., <http://127.0.0.1:3001/api>)
    pub base_url: String,
    /// Deadline for read calls (products, categories)
    pub read_timeout: Duration,
    /// Deadline for order submission; longer because orders are
    /// lower-frequency and tolerate more latency
    pub write_timeout: Duration,
}

impl StorefrontConfig {
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

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let catalog = CatalogConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            catalog,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("CATALOG_API_URL", "http://127.0.0.1:3001/api");
        validate_base_url(&base_url)?;

        Ok(Self {
            base_url,
            read_timeout: get_timeout_ms("CATALOG_READ_TIMEOUT_MS", 5000)?,
            write_timeout: get_timeout_ms("CATALOG_WRITE_TIMEOUT_MS", 10_000)?,
        })
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

/// Parse a millisecond timeout variable into a `Duration`.
fn get_timeout_ms(key: &str, default_ms: u64) -> Result<Duration, ConfigError> {
    let raw = get_env_or_default(key, &default_ms.to_string());
    let ms = raw
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if ms == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "timeout must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_millis(ms))
}

/// Check that the catalog base URL is an absolute http(s) URL.
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = url::Url::parse(base_url).map_err(|e| {
        ConfigError::InvalidEnvVar("CATALOG_API_URL".to_string(), e.to_string())
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "CATALOG_API_URL".to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(())
}
