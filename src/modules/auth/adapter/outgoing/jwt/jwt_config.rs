use std::env;

use crate::shared::config::{parse_or, required, ConfigError};

pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub session_token_expiry: i64,      // Expiration in seconds
    pub verification_token_expiry: i64, // Expiration in seconds
    pub reset_token_expiry: i64,        // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 keys shorter than the hash output weaken the MAC
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Invalid(
                "JWT_SECRET".to_string(),
                format!("must be at least {} characters long", MIN_SECRET_LENGTH),
            ));
        }

        let config = Self {
            secret_key,
            session_token_expiry: parse_or(lookup, "JWT_SESSION_EXPIRY", 86400)?,
            verification_token_expiry: parse_or(lookup, "JWT_VERIFICATION_EXPIRY", 86400)?,
            reset_token_expiry: parse_or(lookup, "JWT_RESET_EXPIRY", 3600)?,
        };

        for (key, value) in [
            ("JWT_SESSION_EXPIRY", config.session_token_expiry),
            ("JWT_VERIFICATION_EXPIRY", config.verification_token_expiry),
            ("JWT_RESET_EXPIRY", config.reset_token_expiry),
        ] {
            if value <= 0 {
                return Err(ConfigError::Invalid(
                    key.to_string(),
                    "must be a positive number of seconds".to_string(),
                ));
            }
        }

        Ok(config)
    }
}
