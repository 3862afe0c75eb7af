//! Database round-trip tests for the seeder.
//!
//! These need a PostgreSQL database with the migrations applied (the test
//! applies them itself) and the DATABASE_URL environment variable set.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p seed-data seed_db`
//!
//! Seeding is idempotent, so the tests can safely run against a development
//! database that has already been seeded.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;

use mtb_wiki::SeedCatalog;
use seed_data::db::Seeder;
use seed_data::fixtures::FixtureSet;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("count {table}: {e}"))
}

#[tokio::test]
async fn seed_db_full_round_trip() {
    let Some(pool) = get_test_pool().await else {
        return;
    };

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let catalog = SeedCatalog::builtin();
    let fixtures = FixtureSet::curated();
    fixtures.verify(&catalog).expect("fixtures verify");

    let seeder = Seeder::new(pool.clone());
    seeder.seed_catalog(&catalog).await.expect("seed catalog");
    seeder.seed_fixtures(&fixtures).await.expect("seed fixtures");

    assert_eq!(count(&pool, "countries").await, catalog.countries.len() as i64);
    assert_eq!(
        count(&pool, "character_tags").await,
        catalog.character_tags.len() as i64
    );
    assert_eq!(count(&pool, "months").await, 12);
    assert_eq!(count(&pool, "systems").await, fixtures.systems.len() as i64);
    assert_eq!(count(&pool, "trails").await, fixtures.trails.len() as i64);
    assert_eq!(count(&pool, "routes").await, fixtures.routes.len() as i64);
    assert_eq!(count(&pool, "guides").await, fixtures.guides.len() as i64);

    let sequence_len: i64 = fixtures
        .routes
        .iter()
        .map(|r| r.trail_sequence.len() as i64)
        .sum();
    assert_eq!(count(&pool, "route_trails").await, sequence_len);

    // Stored guide links back to the credibility record that vouches for its
    // author.
    let author_id: String =
        sqlx::query_scalar("SELECT author_user_id FROM guides WHERE id = $1")
            .bind("guide_squamish_first_timer")
            .fetch_one(&pool)
            .await
            .expect("guide row");
    let credibility_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM local_credibility WHERE user_id = $1 AND system_id = $2)",
    )
    .bind(&author_id)
    .bind("sys_squamish")
    .fetch_one(&pool)
    .await
    .expect("credibility lookup");
    assert_eq!(author_id, "user_123");
    assert!(credibility_exists);
}

#[tokio::test]
async fn seed_db_is_idempotent() {
    let Some(pool) = get_test_pool().await else {
        return;
    };

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let catalog = SeedCatalog::builtin();
    let fixtures = FixtureSet::curated();
    let seeder = Seeder::new(pool.clone());

    seeder.seed_catalog(&catalog).await.expect("first catalog pass");
    seeder.seed_fixtures(&fixtures).await.expect("first fixture pass");

    let systems_before = count(&pool, "systems").await;
    let months_before = count(&pool, "system_months").await;

    seeder.seed_catalog(&catalog).await.expect("second catalog pass");
    seeder.seed_fixtures(&fixtures).await.expect("second fixture pass");

    assert_eq!(count(&pool, "systems").await, systems_before);
    assert_eq!(count(&pool, "system_months").await, months_before);
}
