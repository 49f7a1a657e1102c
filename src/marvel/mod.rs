//! Marvel Comics API client.
//!
//! A thin wrapper around `reqwest` that signs characters requests and downloads
//! thumbnails. Requests are issued one at a time by the caller; the client keeps no
//! state between calls besides its connection pool.

pub mod request;
pub mod signature;

use std::time::Duration;

use url::Url;

use crate::{
    config::DEFAULT_MARVEL_API_URL,
    error::{marvel::MarvelError, Error},
    marvel::{
        request::{build_characters_url, CHARACTERS_PATH},
        signature::{timestamp_now, Credentials},
    },
    model::marvel::ApiResponse,
};

/// Signed HTTP client for the Marvel API.
#[derive(Debug, Clone)]
pub struct MarvelClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl MarvelClient {
    /// Creates a new [`MarvelClientBuilder`]
    pub fn builder() -> MarvelClientBuilder {
        MarvelClientBuilder::default()
    }

    /// Signed URL of the characters page at `offset`, using a fresh timestamp.
    pub fn characters_url(&self, limit: u32, offset: u32) -> Result<Url, Error> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), CHARACTERS_PATH);

        build_characters_url(
            &endpoint,
            &self.credentials,
            &timestamp_now(),
            limit,
            offset,
        )
    }

    /// Fetches one page of characters.
    ///
    /// # Returns
    /// - `Ok(ApiResponse)` - Response decoded and reported code `200`
    /// - `Err(Error::MarvelError)` - Response carried another code, or a non-2xx status with an unreadable body
    /// - `Err(Error::DecodeError)` - Body of a 2xx response is not a characters response
    /// - `Err(Error::ReqwestError)` - Transport failure or timeout
    pub async fn get_characters(&self, limit: u32, offset: u32) -> Result<ApiResponse, Error> {
        let url = self.characters_url(limit, offset)?;

        tracing::debug!(limit, offset, "Requesting characters page");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiResponse>(&body) {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(MarvelError::ApiStatus {
                code: response.code,
                status: response.status.unwrap_or_default(),
            }
            .into()),
            Err(_) if !status.is_success() => Err(MarvelError::HttpStatus(status.as_u16()).into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Downloads the raw bytes behind `url`, failing on transport errors and non-2xx statuses.
    pub async fn get_image(&self, url: &str) -> Result<Vec<u8>, Error> {
        let url = Url::parse(url)?;

        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}

/// Builder for [`MarvelClient`].
#[derive(Default)]
pub struct MarvelClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl MarvelClientBuilder {
    /// API base URL, defaults to the public Marvel gateway.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Key pair used to sign requests. Required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// User agent sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(MarvelClient)` - Client ready for use
    /// - `Err(Error::MarvelError)` - No credentials were provided
    /// - `Err(Error::ReqwestError)` - The underlying HTTP client could not be created
    pub fn build(self) -> Result<MarvelClient, Error> {
        let credentials = self.credentials.ok_or(MarvelError::MissingCredentials)?;

        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(MarvelClient {
            http: http.build()?,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_MARVEL_API_URL.to_string()),
            credentials,
        })
    }
}
