//! Data transfer and storage models.

pub mod db;
pub mod marvel;
