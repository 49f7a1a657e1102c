//! Marvel heroes loader.
//!
//! Fetches Marvel Comics characters page by page from the public API, downloads each
//! character's thumbnail and stores the result as heroes in a local SQLite database.
//! Loading happens once per installation, guarded by a persisted flag.

pub mod config;
pub mod data;
pub mod error;
pub mod marvel;
pub mod model;
pub mod service;
pub mod startup;
