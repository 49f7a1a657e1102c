//! Helpers wiring the test harness to the public loader API

use std::time::Duration;

use heroes_test_utils::{
    constant::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY, TEST_USER_AGENT},
    TestContext,
};
use marvel_heroes::marvel::{signature::Credentials, MarvelClient};

/// Extension trait for TestContext to build clients against the mock server
pub trait TestContextExt {
    fn marvel_client(&self) -> MarvelClient;
}

impl TestContextExt for TestContext {
    fn marvel_client(&self) -> MarvelClient {
        MarvelClient::builder()
            .base_url(self.api_url())
            .credentials(Credentials::new(TEST_PUBLIC_KEY, TEST_PRIVATE_KEY))
            .user_agent(TEST_USER_AGENT)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build test Marvel client")
    }
}
