//! API service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `API_HOST` - Bind address (default: 127.0.0.1)
//! - `API_PORT` - Listen port (default: 3001)
//! - `API_ADMIN_TOKEN` - Bearer token required for admin CRUD routes; when
//!   unset the service runs in open demo mode
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const MIN_ADMIN_TOKEN_LENGTH: usize = 16;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// API service configuration.
///
/// Implements `Debug` manually to redact the admin token.
#[derive(Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Bearer token protecting admin CRUD routes; `None` means open demo mode
    pub admin_token: Option<SecretString>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field(
                "admin_token",
                &self.admin_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("sentry_dsn", &self.sentry_dsn)
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable, or if
    /// the admin token is set but too short to be credible.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("API_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("API_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("API_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("API_PORT".to_string(), e.to_string()))?;

        let admin_token = match get_optional_env("API_ADMIN_TOKEN") {
            Some(token) => {
                validate_admin_token(&token)?;
                Some(SecretString::from(token))
            }
            None => None,
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            admin_token,
            sentry_dsn,
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

/// Reject admin tokens too short to be anything but a placeholder.
fn validate_admin_token(token: &str) -> Result<(), ConfigError> {
    if token.len() < MIN_ADMIN_TOKEN_LENGTH {
        return Err(ConfigError::InsecureSecret(
            "API_ADMIN_TOKEN".to_string(),
            format!(
                "must be at least {MIN_ADMIN_TOKEN_LENGTH} characters (got {})",
                token.len()
            ),
        ));
    }
    Ok(())
}
