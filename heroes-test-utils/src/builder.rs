//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::Schema;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with the hero tables,
/// stored fixtures, and mock Marvel API endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    include_hero_tables: bool,

    // Database fixtures to insert
    heroes: Vec<String>,
    settings: Vec<(String, bool)>,

    // Pre-configured endpoint shortcuts
    characters_endpoints: Vec<(u32, Value, usize)>, // (offset, body, expected_requests)
    image_endpoints: Vec<(i64, Vec<u8>, usize)>,    // (character_id, bytes, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            include_hero_tables: false,
            heroes: Vec::new(),
            settings: Vec::new(),
            characters_endpoints: Vec::new(),
            image_endpoints: Vec::new(),
        }
    }

    /// Add the `hero` and `app_setting` tables to the test database.
    pub fn with_hero_tables(mut self) -> Self {
        self.include_hero_tables = true;
        self
    }

    /// Insert a hero with the given name into the database during `build()`.
    pub fn with_mock_hero(mut self, name: impl Into<String>) -> Self {
        self.heroes.push(name.into());
        self
    }

    /// Insert a boolean setting into the database during `build()`.
    pub fn with_setting(mut self, key: impl Into<String>, value: bool) -> Self {
        self.settings.push((key.into(), value));
        self
    }

    /// Add a mock characters page endpoint to the test server.
    ///
    /// # Arguments
    /// - `offset` - The `offset` query parameter the endpoint answers
    /// - `body` - JSON body returned, usually built with [`crate::fixtures::marvel::factory`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_characters_endpoint(
        mut self,
        offset: u32,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.characters_endpoints
            .push((offset, body, expected_requests));
        self
    }

    /// Add a mock thumbnail endpoint at `/images/{id}.jpg` to the test server.
    pub fn with_image_endpoint(mut self, id: i64, bytes: Vec<u8>, expected_requests: usize) -> Self {
        self.image_endpoints.push((id, bytes, expected_requests));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates the hero tables if requested
    /// 2. Inserts database fixtures (heroes, settings)
    /// 3. Creates mock HTTP endpoints (characters pages, images)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        if self.include_hero_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup
                .with_tables(vec![
                    schema.create_table_from_entity(entity::prelude::Hero),
                    schema.create_table_from_entity(entity::prelude::AppSetting),
                ])
                .await?;
        }

        // 2. Insert database fixtures
        for name in self.heroes {
            setup.marvel().insert_mock_hero(&name).await?;
        }

        for (key, value) in self.settings {
            setup.marvel().insert_setting(&key, value).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for (offset, body, expected) in self.characters_endpoints {
            mocks.push(
                setup
                    .marvel()
                    .create_characters_endpoint(offset, body, expected),
            );
        }

        for (id, bytes, expected) in self.image_endpoints {
            mocks.push(setup.marvel().create_image_endpoint(id, bytes, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
