//! Database repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so callers can pass either
//! the connection or an open transaction.

pub mod hero;
pub mod setting;
