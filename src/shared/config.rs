// src/shared/config.rs
use std::env;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{0} is invalid: {1}")]
    Invalid(String, String),
}

/// Reads a required variable through `lookup`.
pub(crate) fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing(key.to_string()))
}

pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(key.to_string(), raw)),
        None => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SmtpTransportConfig {
    /// Authenticated STARTTLS relay
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local relay (mailpit, mailhog)
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub from: String,
    pub transport: SmtpTransportConfig,
}

#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Base of verification links
    pub app_url: String,
    /// Base of password reset links
    pub client_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OAuth1Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
}

#[derive(Debug, Clone, Default)]
pub struct SocialConfig {
    /// Twitter is only registered when both consumer values are present
    pub twitter: Option<OAuth1Credentials>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
    fn default() -> Self {
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub mail: MailConfig,
    pub links: LinkConfig,
    pub social: SocialConfig,
    pub argon2: Argon2Config,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
        };

        let transport = if environment == "test" {
            SmtpTransportConfig::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(&lookup, "SMTP_PORT", 1025)?,
            }
        } else {
            SmtpTransportConfig::Relay {
                server: required(&lookup, "SMTP_SERVER")?,
                username: required(&lookup, "SMTP_USERNAME")?,
                password: required(&lookup, "SMTP_PASSWORD")?,
            }
        };

        let twitter = match (
            lookup("TWITTER_CONSUMER_KEY"),
            lookup("TWITTER_CONSUMER_SECRET"),
        ) {
            (Some(consumer_key), Some(consumer_secret)) => Some(OAuth1Credentials {
                consumer_key,
                consumer_secret,
            }),
            _ => None,
        };

        let defaults = Argon2Config::default();

        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            server,
            jwt: JwtConfig::from_lookup(&lookup)?,
            mail: MailConfig {
                from: required(&lookup, "EMAIL_FROM")?,
                transport,
            },
            links: LinkConfig {
                app_url: required(&lookup, "APP_URL")?
                    .trim_end_matches('/')
                    .to_string(),
                client_url: required(&lookup, "CLIENT_URL")?
                    .trim_end_matches('/')
                    .to_string(),
            },
            social: SocialConfig { twitter },
            argon2: Argon2Config {
                memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
                iterations: parse_or(&lookup, "ARGON2_ITERATIONS", defaults.iterations)?,
                parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", defaults.parallelism)?,
            },
            environment,
        })
    }
}
