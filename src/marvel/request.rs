use url::Url;

use crate::{error::Error, marvel::signature::Credentials};

/// Path of the characters listing relative to the API base URL.
pub const CHARACTERS_PATH: &str = "/v1/public/characters";

/// Builds a signed characters page URL.
///
/// Query parameters are emitted in the fixed order `ts`, `apikey`, `hash`, `limit`, `offset`.
///
/// # Arguments
/// - `endpoint` - Fully qualified characters endpoint, e.g. `https://gateway.marvel.com/v1/public/characters`
/// - `credentials` - Key pair used to sign the request
/// - `timestamp` - Timestamp embedded in the URL and fed to the signature
/// - `limit` - Page size
/// - `offset` - Index of the first row on the page
///
/// # Returns
/// - `Ok(Url)` - Signed request URL
/// - `Err(Error::InvalidUrl)` - `endpoint` is not an absolute URL
pub fn build_characters_url(
    endpoint: &str,
    credentials: &Credentials,
    timestamp: &str,
    limit: u32,
    offset: u32,
) -> Result<Url, Error> {
    let mut url = Url::parse(endpoint)?;

    url.query_pairs_mut()
        .clear()
        .append_pair("ts", timestamp)
        .append_pair("apikey", credentials.public_key())
        .append_pair("hash", &credentials.sign(timestamp))
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string());

    Ok(url)
}
