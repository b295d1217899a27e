//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use axum::http::HeaderValue;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Which browser origins may call the API. Listed origins are already
/// validated as header values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub reload: bool,
    pub cors_origins: CorsOrigins,
    pub log_level: Level,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        // An unparsable port falls back to the default rather than aborting startup.
        let port = lookup("API_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let reload = lookup("API_RELOAD")
            .map(|value| parse_bool(&value))
            .unwrap_or(false);

        let cors_origins = parse_cors_origins(lookup("CORS_ORIGINS").as_deref())?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            host,
            port,
            reload,
            cors_origins,
            log_level,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn parse_cors_origins(value: Option<&str>) -> Result<CorsOrigins, ConfigError> {
    let value = value.unwrap_or("*").trim();
    if value == "*" {
        return Ok(CorsOrigins::Any);
    }

    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                ConfigError::InvalidValue(
                    "CORS_ORIGINS".to_string(),
                    format!("'{}' is not a valid origin", origin),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsOrigins::List(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(!config.reload);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_port_precedence_and_fallback() {
        assert_eq!(load(&[("PORT", "9000")]).unwrap().port, 9000);
        assert_eq!(
            load(&[("API_PORT", "7000"), ("PORT", "9000")]).unwrap().port,
            7000
        );
        assert_eq!(load(&[("API_PORT", "not-a-port")]).unwrap().port, 8000);
    }

    #[test]
    fn test_reload_flag() {
        for value in ["1", "true", "YES", " y ", "On"] {
            assert!(load(&[("API_RELOAD", value)]).unwrap().reload, "{value}");
        }
        for value in ["0", "false", "off", ""] {
            assert!(!load(&[("API_RELOAD", value)]).unwrap().reload, "{value}");
        }
    }

    #[test]
    fn test_cors_list_drops_blanks() {
        let config = load(&[(
            "CORS_ORIGINS",
            " http://localhost:3000, ,https://example.com ",
        )])
        .unwrap();
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://example.com"),
            ])
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("CORS_ORIGINS", "http://ok.com,bad\norigin")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "CORS_ORIGINS"
        ));
        assert!(matches!(
            load(&[("RUST_LOG", "chatty")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "RUST_LOG"
        ));
    }
}
