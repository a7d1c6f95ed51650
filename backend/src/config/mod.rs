//! Environment-driven configuration for the gateway.
//!
//! Everything the process needs is read once at startup; nothing else in
//! the codebase touches `std::env`.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Gateway runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the axum server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the Thamer core REST API.
    pub api_base_url: String,
    /// Whether bearer cookies carry the `Secure` attribute. Disabled only
    /// for local plain-HTTP development.
    pub secure_cookies: bool,
}

impl Config {
    /// Reads configuration from the environment. `THAMER_API_URL` is
    /// required; the rest have development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url =
            std::env::var("THAMER_API_URL").map_err(|_| ConfigError::Missing("THAMER_API_URL"))?;

        let bind_addr = std::env::var("THAMER_BIND")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| ConfigError::Invalid {
                name: "THAMER_BIND",
                reason: format!("{err}"),
            })?;

        let secure_cookies = std::env::var("THAMER_INSECURE_COOKIES")
            .map(|v| v != "1" && !v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Ok(Self {
            bind_addr,
            api_base_url,
            secure_cookies,
        })
    }

    /// Configuration for tests: any base URL, secure cookies on.
    pub fn for_tests(api_base_url: impl Into<String>) -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 0).into(),
            api_base_url: api_base_url.into(),
            secure_cookies: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::for_tests("http://localhost:9000");
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert!(config.secure_cookies);
    }
}
