//! Fixtures and database seeding for the mtb-wiki knowledge base.
//!
//! This crate carries the parts of the knowledge base that are data rather
//! than shape: the curated example records for four destinations and their
//! content layer, the relational schema under `migrations/`, and an
//! idempotent seeder that inserts the builtin enumeration catalog plus the
//! fixture graph into Postgres.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mtb_wiki::SeedCatalog;
//! use seed_data::prelude::*;
//!
//! let catalog = SeedCatalog::builtin();
//! let fixtures = FixtureSet::curated();
//! fixtures.verify(&catalog)?;
//!
//! let seeder = Seeder::new(pool);
//! seeder.seed_catalog(&catalog).await?;
//! seeder.seed_fixtures(&fixtures).await?;
//! ```

pub mod db;
pub mod fixtures;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::db::{SeedError, Seeder};
    pub use crate::fixtures::FixtureSet;
    pub use mtb_wiki::SeedCatalog;
}
