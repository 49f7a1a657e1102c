//! Marvel HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate
//! Marvel API responses. These endpoints are registered with the mockito server
//! and can verify they were called the expected number of times.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{CHARACTERS_PATH, IMAGES_PATH, TEST_PUBLIC_KEY, TEST_USER_AGENT},
    fixtures::marvel::MarvelFixtures,
};

impl<'a> MarvelFixtures<'a> {
    /// Create a mock HTTP endpoint for the characters page at `offset`.
    ///
    /// Sets up a mock GET endpoint at `/v1/public/characters` matching the `offset` query
    /// parameter and returning `body` as JSON. The mock verifies it was called exactly
    /// `expected_requests` times.
    ///
    /// # Arguments
    /// - `offset` - The `offset` query parameter this endpoint answers
    /// - `body` - JSON body returned with status 200
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_characters_endpoint(
        &mut self,
        offset: u32,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_characters_endpoint_with_status(offset, 200, body.to_string(), expected_requests)
    }

    /// Create a mock HTTP endpoint for the characters page with a custom status and raw body.
    ///
    /// Used to simulate rejected credentials, server errors and malformed payloads.
    ///
    /// # Arguments
    /// - `offset` - The `offset` query parameter this endpoint answers
    /// - `status` - HTTP status code returned
    /// - `body` - Raw response body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_characters_endpoint_with_status(
        &mut self,
        offset: u32,
        status: usize,
        body: impl Into<String>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", CHARACTERS_PATH)
            .match_query(Matcher::UrlEncoded("offset".into(), offset.to_string()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.into())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint that only answers correctly signed requests.
    ///
    /// Matches the full query string `ts=..&apikey=..&hash=..&limit=..&offset=..` in that
    /// order, with the test public key, a 32 character hex hash and the test user agent.
    pub fn create_signed_characters_endpoint(
        &mut self,
        limit: u32,
        offset: u32,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let query = format!(
            r"^ts=[0-9]+\.[0-9]{{6}}&apikey={}&hash=[0-9a-f]{{32}}&limit={}&offset={}$",
            TEST_PUBLIC_KEY, limit, offset
        );

        self.setup
            .server
            .mock("GET", CHARACTERS_PATH)
            .match_query(Matcher::Regex(query))
            .match_header("user-agent", TEST_USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint serving the thumbnail of character `id`.
    ///
    /// Sets up a mock GET endpoint at `/images/{id}.jpg` returning `bytes`.
    ///
    /// # Arguments
    /// - `id` - Character ID the thumbnail belongs to
    /// - `bytes` - Image bytes returned
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_image_endpoint(
        &mut self,
        id: i64,
        bytes: Vec<u8>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}/{}.jpg", IMAGES_PATH, id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body(bytes)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint answering the thumbnail of character `id` with 404.
    pub fn create_missing_image_endpoint(&mut self, id: i64, expected_requests: usize) -> Mock {
        let url = format!("{}/{}.jpg", IMAGES_PATH, id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(404)
            .expect(expected_requests)
            .create()
    }
}
