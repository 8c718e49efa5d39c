use std::env;
use std::str::FromStr;

/// One year. Longer sessions are rejected at startup.
pub const MAX_SESSION_DURATION_HOURS: i64 = 24 * 366;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Sql,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sql" => Ok(StorageBackend::Sql),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidStorageBackend(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub storage_backend: StorageBackend,
    pub server_host: String,
    pub server_port: u16,
    pub session_duration_hours: i64,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
    /// Account and token of a session created at startup, if both are set.
    pub bootstrap_username: Option<String>,
    pub bootstrap_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://jmap-vacation.db?mode=rwc".to_string());

        let storage_backend: StorageBackend = lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "sql".to_string())
            .parse()?;

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let session_duration_hours = match lookup("SESSION_DURATION_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| (1..=MAX_SESSION_DURATION_HOURS).contains(hours))
                .ok_or(ConfigError::InvalidSessionDuration(value))?,
            None => 9,
        };

        let otel_exporter_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT");

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "jmap-vacation".to_string());

        let metrics_port = lookup("METRICS_PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(9000);

        let bootstrap_username = lookup("BOOTSTRAP_USERNAME");
        let bootstrap_token = lookup("BOOTSTRAP_TOKEN");

        Ok(Config {
            database_url,
            storage_backend,
            server_host,
            server_port,
            session_duration_hours,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
            bootstrap_username,
            bootstrap_token,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid storage backend '{0}', expected 'sql' or 'memory'")]
    InvalidStorageBackend(String),

    #[error("Invalid session duration '{0}', expected 1 to 8784 hours")]
    InvalidSessionDuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Sql);
        assert_eq!(config.server_address(), "127.0.0.1:3000");
        assert_eq!(config.metrics_port, 9000);
        assert_eq!(config.session_duration_hours, 9);
        assert!(config.bootstrap_username.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("STORAGE_BACKEND", "Memory"),
            ("SERVER_PORT", "8080"),
            ("BOOTSTRAP_USERNAME", "alice"),
            ("BOOTSTRAP_TOKEN", "secret"),
        ])
        .unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.bootstrap_username.as_deref(), Some("alice"));
        assert_eq!(config.bootstrap_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("SERVER_PORT", "not-a-port")]),
            Err(ConfigError::InvalidPort)
        ));
        assert!(matches!(
            config_from(&[("STORAGE_BACKEND", "redis")]),
            Err(ConfigError::InvalidStorageBackend(_))
        ));
    }

    #[test]
    fn test_session_duration_must_be_in_range() {
        for value in ["0", "-3", "9223372036854775807", "8785", "soon"] {
            assert!(
                matches!(
                    config_from(&[("SESSION_DURATION_HOURS", value)]),
                    Err(ConfigError::InvalidSessionDuration(ref rejected)) if rejected == value
                ),
                "{} should be rejected",
                value
            );
        }

        let config = config_from(&[("SESSION_DURATION_HOURS", "8784")]).unwrap();
        assert_eq!(config.session_duration_hours, MAX_SESSION_DURATION_HOURS);
    }
}
