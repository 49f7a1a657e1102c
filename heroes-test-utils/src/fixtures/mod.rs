//! Test fixture modules for database and HTTP mock creation.
//!
//! This module contains fixture utilities for creating test data and mock HTTP endpoints
//! during test execution (Phase 2 of the test architecture).
//!
//! - `marvel` - Marvel API payloads, mock endpoints and stored hero records

pub mod marvel;
