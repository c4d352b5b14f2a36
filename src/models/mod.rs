//! Data models for quick view placement

pub mod config;
pub mod geometry;

pub use config::*;
pub use geometry::*;
