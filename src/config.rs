use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local lists; contents are lost on restart
    Memory,
    Postgres {
        database_url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub db_max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0} must be set when STORAGE_BACKEND=postgres")]
    MissingVariable(&'static str),

    #[error("Unknown STORAGE_BACKEND: {0} (expected `memory` or `postgres`)")]
    UnknownBackend(String),
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = Self::parse_or("PORT", lookup("PORT"), 8080)?;
        let db_max_connections =
            Self::parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 10)?;
        let run_migrations = Self::parse_or("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), false)?;

        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "memory".to_string());
        let storage_backend = match backend.trim().to_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "postgres" => StorageBackend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingVariable("DATABASE_URL"))?,
            },
            _ => return Err(ConfigError::UnknownBackend(backend)),
        };

        Ok(Self {
            host,
            port,
            storage_backend,
            db_max_connections,
            run_migrations,
        })
    }

    /// Helper function to parse optional typed values
    fn parse_or<T: std::str::FromStr>(
        key: &'static str,
        raw: Option<String>,
        default: T,
    ) -> Result<T, ConfigError> {
        match raw {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue { key, value }),
        }
    }
}
