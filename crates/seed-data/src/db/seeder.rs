//! Database seeder for the enumeration catalog and the curated fixtures.
//!
//! Inserts are idempotent (`ON CONFLICT DO NOTHING`), so re-running the seed
//! binary against an already-seeded database is safe. Entity id-vector fields
//! are decomposed into their junction tables here; the structs themselves
//! never change shape for storage.

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use mtb_wiki::SeedCatalog;
use mtb_wiki::models::{
    Affinity, DifficultyProfile, Guide, Media, Route, SkillFit, System, SystemTagRole, Trail,
};

use crate::fixtures::FixtureSet;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] mtb_wiki::ValidationError),
}

/// Inserts the catalog and fixture graph into Postgres.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Validates and seeds the enumeration catalog.
    pub async fn seed_catalog(&self, catalog: &SeedCatalog) -> Result<(), SeedError> {
        catalog.validate()?;

        info!("Seeding {} countries...", catalog.countries.len());
        for row in &catalog.countries {
            sqlx::query(
                r#"
                INSERT INTO countries (id, name, code)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.code)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} state/provinces...", catalog.state_provinces.len());
        for row in &catalog.state_provinces {
            sqlx::query(
                r#"
                INSERT INTO state_provinces (id, country_id, name, code)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.country_id)
            .bind(&row.name)
            .bind(&row.code)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} regions...", catalog.regions.len());
        for row in &catalog.regions {
            sqlx::query(
                r#"
                INSERT INTO regions (id, name, description, typical_features, climate_type)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.description)
            .bind(&row.typical_features)
            .bind(row.climate_type)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} difficulty ratings...", catalog.difficulty_ratings.len());
        for row in &catalog.difficulty_ratings {
            sqlx::query(
                r#"
                INSERT INTO difficulty_ratings (id, name, display_name, numeric_value, description)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.numeric_value)
            .bind(&row.description)
            .execute(&self.pool)
            .await?;
        }

        info!(
            "Seeding {} regional calibrations...",
            catalog.regional_calibrations.len()
        );
        for row in &catalog.regional_calibrations {
            sqlx::query(
                r#"
                INSERT INTO regional_calibrations (id, name, display_name, adjustment_factor, description)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.adjustment_factor)
            .bind(&row.description)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} character tags...", catalog.character_tags.len());
        for row in &catalog.character_tags {
            sqlx::query(
                r#"
                INSERT INTO character_tags (id, name, category, description, icon)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(row.category)
            .bind(&row.description)
            .bind(&row.icon)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} system sizes...", catalog.system_sizes.len());
        for row in &catalog.system_sizes {
            sqlx::query(
                r#"
                INSERT INTO system_sizes
                    (id, name, display_name, trail_count_min, trail_count_max,
                     days_needed_min, days_needed_max, description)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.typical_trail_count.min)
            .bind(row.typical_trail_count.max)
            .bind(row.typical_days_needed.min)
            .bind(row.typical_days_needed.max)
            .bind(&row.description)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} trail directions...", catalog.trail_directions.len());
        for row in &catalog.trail_directions {
            sqlx::query(
                r#"
                INSERT INTO trail_directions (id, name, display_name, description)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(&row.description)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} route types...", catalog.route_types.len());
        for row in &catalog.route_types {
            sqlx::query(
                r#"
                INSERT INTO route_types (id, name, display_name, description, typical_logistics)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(&row.description)
            .bind(&row.typical_logistics)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} riding styles...", catalog.riding_styles.len());
        for row in &catalog.riding_styles {
            sqlx::query(
                r#"
                INSERT INTO riding_styles (id, name, display_name, description, typical_features)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(&row.description)
            .bind(&row.typical_features)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} skill levels...", catalog.skill_levels.len());
        for row in &catalog.skill_levels {
            sqlx::query(
                r#"
                INSERT INTO skill_levels
                    (id, name, display_name, numeric_value, description, typical_experience)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.numeric_value)
            .bind(&row.description)
            .bind(&row.typical_experience)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} fitness levels...", catalog.fitness_levels.len());
        for row in &catalog.fitness_levels {
            sqlx::query(
                r#"
                INSERT INTO fitness_levels
                    (id, name, display_name, numeric_value, description,
                     distance_km_min, distance_km_max)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.numeric_value)
            .bind(&row.description)
            .bind(row.typical_distance_km.min)
            .bind(row.typical_distance_km.max)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} months...", catalog.months.len());
        for row in &catalog.months {
            sqlx::query(
                r#"
                INSERT INTO months (id, name, display_name, numeric_value, season)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.numeric_value)
            .bind(row.season)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} conditions...", catalog.conditions.len());
        for row in &catalog.conditions {
            sqlx::query(
                r#"
                INSERT INTO conditions (id, name, category, is_positive, description)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(row.category)
            .bind(row.is_positive)
            .bind(&row.description)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} content types...", catalog.content_types.len());
        for row in &catalog.content_types {
            sqlx::query(
                r#"
                INSERT INTO content_types (id, name, display_name, description, typical_length)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(&row.description)
            .bind(&row.typical_length)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} severities...", catalog.severities.len());
        for row in &catalog.severities {
            sqlx::query(
                r#"
                INSERT INTO severities (id, name, display_name, numeric_value, color_code, description)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.numeric_value)
            .bind(&row.color_code)
            .bind(&row.description)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} update types...", catalog.update_types.len());
        for row in &catalog.update_types {
            sqlx::query(
                r#"
                INSERT INTO update_types (id, name, display_name, category, description)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.display_name)
            .bind(row.category)
            .bind(&row.description)
            .execute(&self.pool)
            .await?;
        }

        info!("Catalog seeded");
        Ok(())
    }

    /// Seeds the full fixture graph. The catalog must be seeded first.
    pub async fn seed_fixtures(&self, fixtures: &FixtureSet) -> Result<(), SeedError> {
        self.seed_difficulty_profiles(&fixtures.difficulty_profiles).await?;
        self.seed_systems(&fixtures.systems).await?;
        self.seed_trails(&fixtures.trails).await?;
        self.seed_routes(&fixtures.routes).await?;
        self.seed_user_preferences(fixtures).await?;
        self.seed_regional_comparisons(fixtures).await?;
        self.seed_guides(&fixtures.guides).await?;
        self.seed_media(&fixtures.media).await?;
        self.seed_content_records(fixtures).await?;
        Ok(())
    }

    async fn seed_difficulty_profiles(
        &self,
        profiles: &[DifficultyProfile],
    ) -> Result<(), SeedError> {
        info!("Seeding {} difficulty profiles...", profiles.len());
        for profile in profiles {
            sqlx::query(
                r#"
                INSERT INTO difficulty_profiles
                    (id, overall_rating_id, regional_calibration_id, technical_climbing,
                     technical_descending, flow_features, fitness_demand, comparable_to)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&profile.id)
            .bind(&profile.overall_rating_id)
            .bind(&profile.regional_calibration_id)
            .bind(profile.technical_climbing)
            .bind(profile.technical_descending)
            .bind(profile.flow_features)
            .bind(profile.fitness_demand)
            .bind(&profile.comparable_to)
            .execute(&self.pool)
            .await?;

            for tag_id in &profile.character_tag_ids {
                sqlx::query(
                    r#"
                    INSERT INTO difficulty_profile_tags (difficulty_profile_id, character_tag_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&profile.id)
                .bind(tag_id)
                .execute(&self.pool)
                .await?;
            }
        }
        Ok(())
    }

    async fn seed_systems(&self, systems: &[System]) -> Result<(), SeedError> {
        info!("Seeding {} systems...", systems.len());
        for system in systems {
            sqlx::query(
                r#"
                INSERT INTO systems
                    (id, name, region_id, country_id, state_province_id, city, lat, lng,
                     tagline, description, size_id, trail_count_estimate,
                     vertical_min_m, vertical_max_m, difficulty_calibration_id, climbing_style,
                     insider_tips, common_mistakes, hidden_gems,
                     trailforks_url, official_site_url, local_org_url, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                        $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&system.id)
            .bind(&system.name)
            .bind(&system.region_id)
            .bind(&system.country_id)
            .bind(&system.state_province_id)
            .bind(&system.city)
            .bind(system.coordinates.lat)
            .bind(system.coordinates.lng)
            .bind(&system.tagline)
            .bind(&system.description)
            .bind(&system.size_id)
            .bind(system.trail_count_estimate)
            .bind(system.vertical_range_m.min)
            .bind(system.vertical_range_m.max)
            .bind(&system.difficulty_calibration_id)
            .bind(system.climbing_style)
            .bind(&system.insider_tips)
            .bind(&system.common_mistakes)
            .bind(&system.hidden_gems)
            .bind(&system.external_links.trailforks)
            .bind(&system.external_links.official_site)
            .bind(&system.external_links.local_org)
            .bind(system.created_at)
            .bind(system.updated_at)
            .execute(&self.pool)
            .await?;

            for (month_ids, relationship) in [
                (&system.best_month_ids, Affinity::Best),
                (&system.avoid_month_ids, Affinity::Avoid),
            ] {
                for month_id in month_ids {
                    sqlx::query(
                        r#"
                        INSERT INTO system_months (system_id, month_id, relationship)
                        VALUES ($1, $2, $3)
                        ON CONFLICT DO NOTHING
                        "#,
                    )
                    .bind(&system.id)
                    .bind(month_id)
                    .bind(relationship)
                    .execute(&self.pool)
                    .await?;
                }
            }

            for (tag_ids, role) in [
                (&system.known_for_tag_ids, SystemTagRole::KnownFor),
                (&system.typical_feature_tag_ids, SystemTagRole::TypicalFeature),
            ] {
                for tag_id in tag_ids {
                    sqlx::query(
                        r#"
                        INSERT INTO system_character_tags (system_id, character_tag_id, role)
                        VALUES ($1, $2, $3)
                        ON CONFLICT DO NOTHING
                        "#,
                    )
                    .bind(&system.id)
                    .bind(tag_id)
                    .bind(role)
                    .execute(&self.pool)
                    .await?;
                }
            }

            for skill_id in &system.good_for_skill_ids {
                sqlx::query(
                    r#"
                    INSERT INTO system_skill_levels (system_id, skill_level_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&system.id)
                .bind(skill_id)
                .execute(&self.pool)
                .await?;
            }

            for style_id in &system.good_for_style_ids {
                sqlx::query(
                    r#"
                    INSERT INTO system_riding_styles (system_id, riding_style_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&system.id)
                .bind(style_id)
                .execute(&self.pool)
                .await?;
            }
        }
        Ok(())
    }

    async fn seed_trails(&self, trails: &[Trail]) -> Result<(), SeedError> {
        info!("Seeding {} trails...", trails.len());
        for trail in trails {
            sqlx::query(
                r#"
                INSERT INTO trails
                    (id, system_id, name, difficulty_profile_id, direction_id, length_km,
                     personality, signature_features, local_name, condition_notes,
                     trailforks_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&trail.id)
            .bind(&trail.system_id)
            .bind(&trail.name)
            .bind(&trail.difficulty_profile_id)
            .bind(&trail.direction_id)
            .bind(trail.length_km)
            .bind(&trail.personality)
            .bind(&trail.signature_features)
            .bind(&trail.local_name)
            .bind(&trail.condition_notes)
            .bind(&trail.trailforks_id)
            .bind(trail.created_at)
            .bind(trail.updated_at)
            .execute(&self.pool)
            .await?;
        }

        // Pairings reference other trails, so they go in after every trail row
        // exists.
        for trail in trails {
            for pair_id in &trail.pairs_well_with_trail_ids {
                sqlx::query(
                    r#"
                    INSERT INTO trail_pairings (trail_id, pairs_with_trail_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&trail.id)
                .bind(pair_id)
                .execute(&self.pool)
                .await?;
            }
        }
        Ok(())
    }

    async fn seed_routes(&self, routes: &[Route]) -> Result<(), SeedError> {
        info!("Seeding {} routes...", routes.len());
        for route in routes {
            sqlx::query(
                r#"
                INSERT INTO routes
                    (id, system_id, name, tagline, purpose, difficulty_profile_id,
                     route_type_id, distance_km_min, distance_km_max,
                     time_estimate_hours_min, time_estimate_hours_max,
                     highlights, pro_tips, watch_out_for, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&route.id)
            .bind(&route.system_id)
            .bind(&route.name)
            .bind(&route.tagline)
            .bind(&route.purpose)
            .bind(&route.difficulty_profile_id)
            .bind(&route.route_type_id)
            .bind(route.distance_km_min)
            .bind(route.distance_km_max)
            .bind(route.time_estimate_hours_min)
            .bind(route.time_estimate_hours_max)
            .bind(&route.highlights)
            .bind(&route.pro_tips)
            .bind(&route.watch_out_for)
            .bind(route.created_at)
            .bind(route.updated_at)
            .execute(&self.pool)
            .await?;

            for step in &route.trail_sequence {
                sqlx::query(
                    r#"
                    INSERT INTO route_trails (id, route_id, trail_id, sequence_order, purpose, notes)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ON CONFLICT (id) DO NOTHING
                    "#,
                )
                .bind(&step.id)
                .bind(&step.route_id)
                .bind(&step.trail_id)
                .bind(step.sequence_order)
                .bind(&step.purpose)
                .bind(&step.notes)
                .execute(&self.pool)
                .await?;
            }

            for (condition_ids, relationship) in [
                (&route.best_condition_ids, Affinity::Best),
                (&route.avoid_condition_ids, Affinity::Avoid),
            ] {
                for condition_id in condition_ids {
                    sqlx::query(
                        r#"
                        INSERT INTO route_conditions (route_id, condition_id, relationship)
                        VALUES ($1, $2, $3)
                        ON CONFLICT DO NOTHING
                        "#,
                    )
                    .bind(&route.id)
                    .bind(condition_id)
                    .bind(relationship)
                    .execute(&self.pool)
                    .await?;
                }
            }

            for (skill_ids, relationship) in [
                (&route.ideal_for_skill_ids, SkillFit::Ideal),
                (&route.not_recommended_skill_ids, SkillFit::NotRecommended),
            ] {
                for skill_id in skill_ids {
                    sqlx::query(
                        r#"
                        INSERT INTO route_skill_levels (route_id, skill_level_id, relationship)
                        VALUES ($1, $2, $3)
                        ON CONFLICT DO NOTHING
                        "#,
                    )
                    .bind(&route.id)
                    .bind(skill_id)
                    .bind(relationship)
                    .execute(&self.pool)
                    .await?;
                }
            }

            for style_id in &route.ideal_for_style_ids {
                sqlx::query(
                    r#"
                    INSERT INTO route_riding_styles (route_id, riding_style_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&route.id)
                .bind(style_id)
                .execute(&self.pool)
                .await?;
            }
        }
        Ok(())
    }

    async fn seed_user_preferences(&self, fixtures: &FixtureSet) -> Result<(), SeedError> {
        let records = &fixtures.user_preferences;
        info!("Seeding {} user preference records...", records.len());
        for prefs in records {
            sqlx::query(
                r#"
                INSERT INTO user_preferences
                    (user_id, years_riding, home_region_id, preferred_difficulty_profile_id,
                     preferred_skill_level_id, preferred_fitness_level_id,
                     pref_technical_climbing, pref_technical_descending,
                     pref_flow_features, pref_fitness_challenges,
                     trip_style, group_dynamic, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                ON CONFLICT (user_id) DO NOTHING
                "#,
            )
            .bind(&prefs.user_id)
            .bind(prefs.years_riding)
            .bind(&prefs.home_region_id)
            .bind(&prefs.preferred_difficulty_profile_id)
            .bind(&prefs.preferred_skill_level_id)
            .bind(&prefs.preferred_fitness_level_id)
            .bind(prefs.style_preferences.technical_climbing)
            .bind(prefs.style_preferences.technical_descending)
            .bind(prefs.style_preferences.flow_features)
            .bind(prefs.style_preferences.fitness_challenges)
            .bind(prefs.trip_style)
            .bind(prefs.group_dynamic)
            .bind(prefs.updated_at)
            .execute(&self.pool)
            .await?;

            for system_id in &prefs.favorite_system_ids {
                sqlx::query(
                    r#"
                    INSERT INTO user_favorite_systems (user_id, system_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&prefs.user_id)
                .bind(system_id)
                .execute(&self.pool)
                .await?;
            }

            for tag_id in &prefs.avoid_feature_tag_ids {
                sqlx::query(
                    r#"
                    INSERT INTO user_avoid_tags (user_id, character_tag_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&prefs.user_id)
                .bind(tag_id)
                .execute(&self.pool)
                .await?;
            }

            for condition_id in &prefs.avoid_condition_ids {
                sqlx::query(
                    r#"
                    INSERT INTO user_avoid_conditions (user_id, condition_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(&prefs.user_id)
                .bind(condition_id)
                .execute(&self.pool)
                .await?;
            }
        }

        for row in &fixtures.user_preference_styles {
            sqlx::query(
                r#"
                INSERT INTO user_preference_styles (user_id, riding_style_id, preference_strength)
                VALUES ($1, $2, $3)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(&row.user_id)
            .bind(&row.riding_style_id)
            .bind(row.preference_strength)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn seed_regional_comparisons(&self, fixtures: &FixtureSet) -> Result<(), SeedError> {
        info!(
            "Seeding {} regional comparisons...",
            fixtures.regional_comparisons.len()
        );
        for comparison in &fixtures.regional_comparisons {
            sqlx::query(
                r#"
                INSERT INTO regional_comparisons
                    (id, title, region_ids, key_differences, translation_guide)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&comparison.id)
            .bind(&comparison.title)
            .bind(&comparison.region_ids)
            .bind(serde_json::to_value(&comparison.key_differences)?)
            .bind(serde_json::to_value(&comparison.translation_guide)?)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn seed_guides(&self, guides: &[Guide]) -> Result<(), SeedError> {
        info!("Seeding {} guides...", guides.len());
        for guide in guides {
            sqlx::query(
                r#"
                INSERT INTO guides
                    (id, content_type_id, system_id, route_ids, title, summary, sections,
                     key_points, target_skill_level_id, author_user_id, author_display_name,
                     quality_score, editorial_status, version_history,
                     created_at, updated_at, last_verified)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&guide.id)
            .bind(&guide.content_type_id)
            .bind(&guide.system_id)
            .bind(&guide.route_ids)
            .bind(&guide.title)
            .bind(&guide.summary)
            .bind(serde_json::to_value(&guide.sections)?)
            .bind(&guide.key_points)
            .bind(&guide.target_skill_level_id)
            .bind(&guide.author.user_id)
            .bind(&guide.author.display_name)
            .bind(guide.quality_score)
            .bind(guide.editorial_status)
            .bind(serde_json::to_value(&guide.version_history)?)
            .bind(guide.created_at)
            .bind(guide.updated_at)
            .bind(guide.last_verified)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn seed_media(&self, media: &[Media]) -> Result<(), SeedError> {
        info!("Seeding {} media records...", media.len());
        for item in media {
            sqlx::query(
                r#"
                INSERT INTO media
                    (id, kind, subject_kind, system_id, trail_id, route_id, specific_location,
                     url, thumbnail_url, title, caption, showcase_notes, conditions_when_taken,
                     resolution_ok, well_lit, shows_intended_subject, recent,
                     contributor_user_id, contributor_display_name,
                     curation_score, featured, helpful_votes, not_helpful_votes, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                        $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&item.id)
            .bind(item.kind)
            .bind(item.subject.kind)
            .bind(&item.subject.system_id)
            .bind(&item.subject.trail_id)
            .bind(&item.subject.route_id)
            .bind(&item.subject.specific_location)
            .bind(&item.url)
            .bind(&item.thumbnail_url)
            .bind(&item.title)
            .bind(&item.caption)
            .bind(&item.showcase_notes)
            .bind(&item.conditions_when_taken)
            .bind(item.quality_indicators.resolution_ok)
            .bind(item.quality_indicators.well_lit)
            .bind(item.quality_indicators.shows_intended_subject)
            .bind(item.quality_indicators.recent)
            .bind(&item.contributor.user_id)
            .bind(&item.contributor.display_name)
            .bind(item.curation_score)
            .bind(item.featured)
            .bind(item.votes.helpful)
            .bind(item.votes.not_helpful)
            .bind(item.created_at)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn seed_content_records(&self, fixtures: &FixtureSet) -> Result<(), SeedError> {
        info!(
            "Seeding {} credibility records...",
            fixtures.local_credibility.len()
        );
        for credibility in &fixtures.local_credibility {
            sqlx::query(
                r#"
                INSERT INTO local_credibility
                    (user_id, system_id, claimed_local, verified_local, years_riding_here,
                     contributions_count, contribution_quality_avg, expertise_tags,
                     verified_by, reputation_score, trusted_contributor)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ON CONFLICT (user_id, system_id) DO NOTHING
                "#,
            )
            .bind(&credibility.user_id)
            .bind(&credibility.system_id)
            .bind(credibility.indicators.claimed_local)
            .bind(credibility.indicators.verified_local)
            .bind(credibility.indicators.years_riding_here)
            .bind(credibility.indicators.contributions_count)
            .bind(credibility.indicators.contribution_quality_avg)
            .bind(&credibility.expertise_tags)
            .bind(serde_json::to_value(&credibility.verified_by)?)
            .bind(credibility.reputation_score)
            .bind(credibility.trusted_contributor)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} reviews...", fixtures.reviews.len());
        for review in &fixtures.reviews {
            sqlx::query(
                r#"
                INSERT INTO reviews
                    (id, content_kind, content_id, reviewer_user_id, reviewer_display_name,
                     reviewer_credibility, accuracy_rating, completeness_rating, clarity_rating,
                     what_works, needs_improvement, factual_corrections,
                     personally_verified, last_ridden_date, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&review.id)
            .bind(review.content_kind)
            .bind(&review.content_id)
            .bind(&review.reviewer.user_id)
            .bind(&review.reviewer.display_name)
            .bind(
                review
                    .reviewer
                    .credibility
                    .as_ref()
                    .map(serde_json::to_value)
                    .transpose()?,
            )
            .bind(review.accuracy_rating)
            .bind(review.completeness_rating)
            .bind(review.clarity_rating)
            .bind(&review.feedback.what_works)
            .bind(&review.feedback.needs_improvement)
            .bind(&review.feedback.factual_corrections)
            .bind(review.personally_verified)
            .bind(review.last_ridden_date)
            .bind(review.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!(
            "Seeding {} contributor reward records...",
            fixtures.contributor_rewards.len()
        );
        for rewards in &fixtures.contributor_rewards {
            sqlx::query(
                r#"
                INSERT INTO contributor_rewards
                    (user_id, total_contributions, quality_contributions,
                     featured_contributions, recognition_level, achievements, perks)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (user_id) DO NOTHING
                "#,
            )
            .bind(&rewards.user_id)
            .bind(rewards.total_contributions)
            .bind(rewards.quality_contributions)
            .bind(rewards.featured_contributions)
            .bind(rewards.recognition_level)
            .bind(serde_json::to_value(&rewards.achievements)?)
            .bind(serde_json::to_value(&rewards.perks)?)
            .execute(&self.pool)
            .await?;
        }

        info!(
            "Seeding {} moderation items...",
            fixtures.moderation_items.len()
        );
        for item in &fixtures.moderation_items {
            sqlx::query(
                r#"
                INSERT INTO moderation_queue
                    (id, content_kind, content_id, reason, status, assigned_moderator,
                     moderator_notes, community_votes, resolution, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&item.id)
            .bind(item.content_kind)
            .bind(&item.content_id)
            .bind(item.reason)
            .bind(item.status)
            .bind(&item.assigned_moderator)
            .bind(&item.moderator_notes)
            .bind(
                item.community_votes
                    .as_ref()
                    .map(serde_json::to_value)
                    .transpose()?,
            )
            .bind(item.resolution.as_ref().map(serde_json::to_value).transpose()?)
            .bind(item.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding {} fact checks...", fixtures.fact_checks.len());
        for check in &fixtures.fact_checks {
            sqlx::query(
                r#"
                INSERT INTO fact_checks
                    (id, content_kind, content_id, claim, claim_location,
                     checker_user_id, checker_credibility, verification_method,
                     verification_details, result, correct_information, evidence, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&check.id)
            .bind(check.content_kind)
            .bind(&check.content_id)
            .bind(&check.claim)
            .bind(&check.claim_location)
            .bind(&check.checker.user_id)
            .bind(
                check
                    .checker
                    .credibility
                    .as_ref()
                    .map(serde_json::to_value)
                    .transpose()?,
            )
            .bind(check.verification_method)
            .bind(&check.verification_details)
            .bind(check.result)
            .bind(&check.correct_information)
            .bind(check.evidence.as_ref().map(serde_json::to_value).transpose()?)
            .bind(check.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!(
            "Seeding {} seasonal updates...",
            fixtures.seasonal_updates.len()
        );
        for update in &fixtures.seasonal_updates {
            sqlx::query(
                r#"
                INSERT INTO seasonal_updates
                    (id, system_id, update_type_id, severity_id, title, summary,
                     detailed_update, relevant_from, relevant_until,
                     affected_trail_ids, affected_route_ids, affected_areas,
                     reported_by, verified_by, verification_count, media_evidence,
                     created_at, last_confirmed)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                        $13, $14, $15, $16, $17, $18)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&update.id)
            .bind(&update.system_id)
            .bind(&update.update_type_id)
            .bind(&update.severity_id)
            .bind(&update.title)
            .bind(&update.summary)
            .bind(&update.detailed_update)
            .bind(update.relevant_from)
            .bind(update.relevant_until)
            .bind(&update.affects.trail_ids)
            .bind(&update.affects.route_ids)
            .bind(&update.affects.areas)
            .bind(&update.reported_by)
            .bind(&update.verified_by)
            .bind(update.verification_count)
            .bind(&update.media_evidence)
            .bind(update.created_at)
            .bind(update.last_confirmed)
            .execute(&self.pool)
            .await?;
        }

        info!(
            "Seeding {} quality metric records...",
            fixtures.quality_metrics.len()
        );
        for metrics in &fixtures.quality_metrics {
            sqlx::query(
                r#"
                INSERT INTO quality_metrics
                    (content_id, content_kind, completeness_score, freshness_score,
                     media_quality_score, peer_review_score, community_votes_score,
                     fact_check_score, author_credibility_score, moderator_boost,
                     total_quality_score, quality_tier, last_calculated)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                ON CONFLICT (content_id) DO NOTHING
                "#,
            )
            .bind(&metrics.content_id)
            .bind(&metrics.content_kind)
            .bind(metrics.completeness_score)
            .bind(metrics.freshness_score)
            .bind(metrics.media_quality_score)
            .bind(metrics.peer_review_score)
            .bind(metrics.community_votes_score)
            .bind(metrics.fact_check_score)
            .bind(metrics.author_credibility_score)
            .bind(metrics.moderator_boost)
            .bind(metrics.total_quality_score)
            .bind(metrics.quality_tier)
            .bind(metrics.last_calculated)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeding content standards...");
        let standards = &fixtures.content_standards;
        sqlx::query(
            r#"
            INSERT INTO content_standards
                (id, guide_requirements, photo_requirements, video_requirements,
                 auto_approve_threshold, feature_threshold, trust_threshold)
            VALUES (1, $1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(serde_json::to_value(&standards.guide_requirements)?)
        .bind(serde_json::to_value(&standards.photo_requirements)?)
        .bind(serde_json::to_value(&standards.video_requirements)?)
        .bind(standards.auto_approve_threshold)
        .bind(standards.feature_threshold)
        .bind(standards.trust_threshold)
        .execute(&self.pool)
        .await?;

        info!("Content records seeded");
        Ok(())
    }
}
