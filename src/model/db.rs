//! Aliases for the stored entity models.

/// A stored hero row.
pub type HeroModel = entity::hero::Model;
