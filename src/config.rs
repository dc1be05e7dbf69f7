//! Runtime configuration.
//!
//! The client is configured by a single value: the base URL of the remote
//! task store, read from the `TODO_API_URL` environment variable.

use url::Url;

const API_URL_ENV: &str = "TODO_API_URL";

/// Runtime configuration for the client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote task store, without a trailing slash.
    pub api_url: String,
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TODO_API_URL is not set")]
    MissingApiUrl,

    #[error("invalid TODO_API_URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    #[error("unsupported TODO_API_URL scheme: {0}")]
    UnsupportedScheme(String),
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(API_URL_ENV).map_err(|_| ConfigError::MissingApiUrl)?;
        Self::from_api_url(&raw)
    }

    /// Build a config from an explicit endpoint value.
    pub fn from_api_url(raw: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(raw)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        Ok(Self {
            api_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_url_and_strips_trailing_slash() {
        let config = Config::from_api_url("http://localhost:3000/api/todos/").unwrap();
        assert_eq!(config.api_url, "http://localhost:3000/api/todos");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = Config::from_api_url("ftp://localhost/todos");
        assert!(matches!(result, Err(ConfigError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_rejects_relative_url() {
        let result = Config::from_api_url("/api/todos");
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl(_))));
    }
}
