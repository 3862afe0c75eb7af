//! Domain schema for a mountain-bike trail knowledge base.
//!
//! The crate defines the entity shapes (systems, routes, trails, difficulty
//! profiles, user-generated content) and the closed enumeration vocabulary
//! everything references by slug id, plus structural validation for both.
//! Persistence and fixtures live in the companion `seed-data` crate; nothing
//! here performs I/O.

pub mod catalog;
pub mod models;
pub mod types;
pub mod validate;

pub use catalog::SeedCatalog;
pub use validate::{CatalogIndex, ValidationError, VerifyReferences};
