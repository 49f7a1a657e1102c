//! Error types for the heroes loader.
//!
//! This module aggregates domain-specific error types (configuration, Marvel API) and
//! external library errors into a single `Error` type. All errors use `thiserror` for
//! ergonomic definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod marvel;

use thiserror::Error;

use crate::error::{config::ConfigError, marvel::MarvelError};

/// Main error type for the heroes loader.
///
/// `#[from]` conversions allow the `?` operator to lift underlying errors into this type.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Marvel API errors (non-200 result codes, rejected requests)
/// - Transport and decoding errors (reqwest, serde_json, URL parsing)
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Marvel API reported a failure for a request.
    #[error(transparent)]
    MarvelError(#[from] MarvelError),
    /// Endpoint or image URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// HTTP transport error (connection, timeout, body read).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Response body did not match the expected JSON shape.
    #[error("Failed to decode Marvel API response: {0}")]
    DecodeError(#[from] serde_json::Error),
    /// Database error (query failures, connection issues, commit failures).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
