//! Database seeding utilities.

pub mod seeder;

pub use seeder::{SeedError, Seeder};
