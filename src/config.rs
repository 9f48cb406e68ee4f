// src/config.rs
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::Invalid(format!(
                "APP_ENV must be development or production, got {other:?}"
            ))),
        }
    }
}

/// Where articles are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(Self::InMemory),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConfigError::Invalid(format!(
                "ARTICLE_BACKEND must be memory or sqlite, got {other:?}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    environment: Environment,
    backend: StorageBackend,
    database_url: String,
    command_timeout: Duration,
    max_connections: u32,
    listen_addr: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://catalog.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_command_timeout_secs() -> u64 {
    10
}

fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_positive<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    value
        .trim()
        .parse::<T>()
        .ok()
        .filter(|parsed| *parsed > T::default())
        .ok_or_else(|| ConfigError::Invalid(format!("{key} must be a positive integer")))
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV")
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(Environment::Development);

        let backend = lookup("ARTICLE_BACKEND")
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(StorageBackend::InMemory);

        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let command_timeout_secs = lookup("DB_COMMAND_TIMEOUT_SECS")
            .map(|v| parse_positive::<u64>("DB_COMMAND_TIMEOUT_SECS", &v))
            .transpose()?
            .unwrap_or_else(default_command_timeout_secs);

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .map(|v| parse_positive::<u32>("DB_MAX_CONNECTIONS", &v))
            .transpose()?
            .unwrap_or_else(default_max_connections);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            environment,
            backend,
            database_url,
            command_timeout: Duration::from_secs(command_timeout_secs),
            max_connections,
            listen_addr,
            allowed_origins,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Upper bound for a single SQLite operation.
    pub fn command_timeout(&self) -> Duration {
        self.command_timeout
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
