use crate::shared::config::{parse_or, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    const MIN_SECRET_LEN: usize = 32;
    const MAX_ACCESS_EXPIRY: i64 = 86400;

    /// Reads the `JWT_*` keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters long", Self::MIN_SECRET_LEN),
            });
        }

        let access_token_expiry: i64 = parse_or(&lookup, "JWT_ACCESS_EXPIRY", 1800)?;
        if access_token_expiry <= 0 || access_token_expiry > Self::MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("must be between 1 and {} seconds", Self::MAX_ACCESS_EXPIRY),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "topics".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
