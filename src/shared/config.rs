use std::fmt::Display;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Reads `key` and parses it, falling back to `default` when unset.
pub fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or(ConfigError::Missing(key))
}

/// Process-wide settings, assembled once in `main` and handed to the
/// components that need them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` if present, otherwise `.env`.
    pub fn load_dotenv() {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let database_url = required(&lookup, "DATABASE_URL")?;
        let host = required(&lookup, "HOST")?;
        let port: u16 = required(&lookup, "PORT")?
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?;

        let db_max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", 50)?;
        let db_min_connections: u32 = parse_or(&lookup, "DB_MIN_CONNECTIONS", 10)?;
        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        let run_migrations: bool = parse_or(&lookup, "RUN_MIGRATIONS", false)?;
        let jwt = JwtConfig::from_lookup(&lookup)?;

        Ok(Self {
            environment,
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            run_migrations,
            jwt,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
