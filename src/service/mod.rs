//! Hero loading pipeline.
//!
//! Pages flow through [`pagination::PaginationDriver`], which fetches them with the
//! Marvel client, maps each record with [`mapper::map_character`], downloads thumbnails
//! through [`image::ImageLoader`] and stores the page via [`hero::HeroService`].
//! [`loader::HeroLoader`] wraps the driver with the persisted one-time flag.

pub mod hero;
pub mod image;
pub mod loader;
pub mod mapper;
pub mod pagination;

#[cfg(test)]
mod tests;
