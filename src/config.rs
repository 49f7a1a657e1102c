//! Environment configuration.
//!
//! Settings are read from the process environment (after `.env` has been loaded by the
//! binary). Credentials are required; everything else falls back to the defaults below.

use std::str::FromStr;

use crate::error::config::ConfigError;

/// Base URL of the public Marvel Comics API.
pub const DEFAULT_MARVEL_API_URL: &str = "https://gateway.marvel.com";

/// SQLite database created next to the binary when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://heroes.db?mode=rwc";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Pagination defaults for the characters endpoint.
pub mod pagination {
    /// Characters requested per page.
    pub const PAGE_LIMIT: u32 = 25;

    /// Largest page size the Marvel API accepts.
    pub const MAX_PAGE_LIMIT: u32 = 100;

    /// Offset at which loading stops regardless of the reported total (12 pages of 25).
    pub const MAX_OFFSET: u32 = 300;
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Marvel API, without the `/v1/public/...` path.
    pub marvel_api_url: String,
    /// Public API key, sent as `apikey` and appended to the signature input.
    pub marvel_public_key: String,
    /// Private API key, only ever used as signature input.
    pub marvel_private_key: String,
    /// SeaORM connection string of the local store.
    pub database_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Characters requested per page.
    pub page_limit: u32,
    /// Offset at which pagination stops.
    pub max_offset: u32,
    /// Timeout applied to every HTTP request.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(ConfigError::MissingEnvVar)` - A credential is missing or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A numeric value failed to parse or is out of range
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_limit = parse_or(&lookup, "PAGE_LIMIT", pagination::PAGE_LIMIT)?;
        if page_limit == 0 || page_limit > pagination::MAX_PAGE_LIMIT {
            return Err(ConfigError::InvalidEnvValue {
                var: "PAGE_LIMIT".to_string(),
                reason: format!("must be between 1 and {}", pagination::MAX_PAGE_LIMIT),
            });
        }

        let request_timeout_secs =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "REQUEST_TIMEOUT_SECS".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Self {
            marvel_api_url: lookup("MARVEL_API_URL")
                .unwrap_or_else(|| DEFAULT_MARVEL_API_URL.to_string()),
            marvel_public_key: required(&lookup, "MARVEL_PUBLIC_KEY")?,
            marvel_private_key: required(&lookup, "MARVEL_PRIVATE_KEY")?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            user_agent: lookup("USER_AGENT").unwrap_or_else(|| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
            page_limit,
            max_offset: parse_or(&lookup, "MAX_OFFSET", pagination::MAX_OFFSET)?,
            request_timeout_secs,
        })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
