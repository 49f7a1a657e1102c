use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarvelError {
    #[error("Marvel client is missing API credentials")]
    MissingCredentials,
    /// The response decoded but carried a result code other than 200.
    #[error("Marvel API returned code {code}: {status}")]
    ApiStatus { code: i64, status: String },
    // Rejected requests (bad hash, missing key, rate limit) come back with a non-2xx
    // status and a body that is not a characters response.
    #[error("Marvel API request failed with HTTP status {0}")]
    HttpStatus(u16),
}
