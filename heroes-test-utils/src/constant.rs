//! Test configuration constants for Marvel API client setup.
//!
//! This module defines standard constant values used across all tests for Marvel client
//! configuration. These values are not real credentials but placeholder values for
//! testing purposes.

/// User agent string for test Marvel API requests.
pub static TEST_USER_AGENT: &str = "marvel-heroes-tests/1.0";

/// Mock Marvel public API key for testing.
///
/// Placeholder key used when creating test Marvel clients. Not a real credential.
pub static TEST_PUBLIC_KEY: &str = "1234";

/// Mock Marvel private API key for testing.
///
/// Placeholder key used when creating test Marvel clients. Not a real credential.
pub static TEST_PRIVATE_KEY: &str = "abcd";

/// Path of the characters endpoint on the mock server.
pub static CHARACTERS_PATH: &str = "/v1/public/characters";

/// Path prefix under which the mock server serves character thumbnails.
pub static IMAGES_PATH: &str = "/images";
