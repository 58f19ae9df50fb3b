use std::path::PathBuf;

use axum::http::HeaderValue;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// JSON file the store is seeded from at startup.
    pub seed_path: PathBuf,
    /// Allowed CORS origins. `None` permits any origin.
    pub cors_origins: Option<Vec<HeaderValue>>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `HOST`                 | `0.0.0.0`            |
    /// | `PORT`                 | `3000`               |
    /// | `MOVIES_SEED_PATH`     | `data/movies.json`   |
    /// | `CORS_ORIGINS`         | unset (any origin)   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                 |
    /// | `LOG_FORMAT`           | `pretty`             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = match get("PORT") {
            Some(raw) => parse_var("PORT", "u16", raw)?,
            None => 3000,
        };

        let seed_path = get("MOVIES_SEED_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/movies.json"));

        let cors_origins = get("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .transpose()?
            .filter(|origins| !origins.is_empty());

        let request_timeout_secs: u64 = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_var("REQUEST_TIMEOUT_SECS", "u64", raw)?,
            None => 30,
        };

        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    expected: "log format (pretty|json)",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            seed_path,
            cors_origins,
            request_timeout_secs,
            log_format,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: String,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw,
    })
}

/// Parse a comma-separated origin list, skipping blanks.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "origin list",
                value: origin.to_string(),
            })
        })
        .collect()
}
