//! Server configuration from environment variables.

use std::env;
use std::time::Duration;

use notepad_store::StoreConfig;

use crate::summarizer::SummarizerConfig;

/// Default summarization endpoint.
pub const DEFAULT_SUMMARIZER_URL: &str = "https://api.summarizer.example/v1/summarize";

/// Where notes are kept.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// PostgreSQL, configured from `DATABASE_*` variables.
    Postgres(StoreConfig),
    /// Process memory. Notes vanish on restart.
    Memory,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Note store selection.
    pub store: StoreBackend,
    /// Summarization service settings.
    pub summarizer: SummarizerConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SUMMARIZER_API_KEY`: Bearer token for the summarization service
    /// - `DATABASE_URL`: Database connection string (unless `NOTEPAD_STORE=memory`)
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 5000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "text" or "json" (default: "text")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "http://localhost:3000")
    /// - `NOTEPAD_STORE`: "postgres" or "memory" (default: "postgres")
    /// - `SUMMARIZER_URL`, `SUMMARIZER_LANGUAGE`, `SUMMARIZER_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("not a port number: {s}"),
            })?,
            None => 5000,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "LOG_FORMAT".to_string(),
                    reason: format!("expected \"text\" or \"json\", got {other:?}"),
                });
            }
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        let store = match lookup("NOTEPAD_STORE").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres(
                StoreConfig::from_vars(&lookup).map_err(|e| ConfigError::Store(e.to_string()))?,
            ),
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "NOTEPAD_STORE".to_string(),
                    reason: format!("expected \"postgres\" or \"memory\", got {other:?}"),
                });
            }
        };

        let api_key = lookup("SUMMARIZER_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("SUMMARIZER_API_KEY".to_string()))?;

        let timeout = match lookup("SUMMARIZER_TIMEOUT_SECS") {
            Some(s) => Some(Duration::from_secs(s.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    name: "SUMMARIZER_TIMEOUT_SECS".to_string(),
                    reason: format!("not a number of seconds: {s}"),
                }
            })?)),
            None => None,
        };

        let summarizer = SummarizerConfig {
            url: lookup("SUMMARIZER_URL").unwrap_or_else(|| DEFAULT_SUMMARIZER_URL.to_string()),
            api_key,
            language: lookup("SUMMARIZER_LANGUAGE").unwrap_or_else(|| "en".to_string()),
            timeout,
        };

        Ok(Self {
            port,
            log_level,
            log_format,
            cors_allowed_origins,
            store,
            summarizer,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    /// Store settings are incomplete or invalid.
    #[error("store configuration: {0}")]
    Store(String),
}
