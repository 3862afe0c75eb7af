//! Structural validation for the catalog and entity records.
//!
//! Nothing here touches a database. The checks mirror what the relational
//! schema enforces with constraints - unique ids, contiguous orderings,
//! foreign keys resolving - so bad data is caught before an insert is ever
//! attempted, with errors that name the offending field instead of a
//! constraint violation.

use std::collections::HashSet;

use thiserror::Error;
use validator::Validate;

use crate::catalog::SeedCatalog;
use crate::models::{
    CharacterTag, Condition, ContentType, Country, DifficultyProfile, DifficultyRating,
    FitnessLevel, Guide, Month, Region, RegionalCalibration, RegionalComparison, RidingStyle,
    Route, RouteCondition, RouteRidingStyle, RouteSkillLevel, RouteType, SeasonalUpdate, Severity,
    SkillLevel, StateProvince, System, SystemCharacterTag, SystemMonth, SystemRidingStyle,
    SystemSize, SystemSkillLevel, Trail, TrailDirection, UpdateType, UserPreferenceStyle,
    UserPreferences,
};
use crate::types::DiscoveryRequest;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("duplicate id `{id}` in {table}")]
    DuplicateId { table: &'static str, id: String },

    #[error(
        "{table} ordering is not contiguous: expected numeric_value {expected}, found {found} on `{id}`"
    )]
    NonContiguousOrdering {
        table: &'static str,
        id: String,
        expected: i32,
        found: i32,
    },

    #[error("{entity}.{field} references unknown {table} id `{id}`")]
    UnknownReference {
        entity: &'static str,
        field: &'static str,
        table: &'static str,
        id: String,
    },

    #[error("bounds violation: {0}")]
    Bounds(#[from] validator::ValidationErrors),
}

/// A row in one of the enumeration tables.
pub trait CatalogRow {
    const TABLE: &'static str;

    fn id(&self) -> &str;
}

macro_rules! impl_catalog_row {
    ($($ty:ty => $table:literal),+ $(,)?) => {
        $(impl CatalogRow for $ty {
            const TABLE: &'static str = $table;

            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_catalog_row! {
    Country => "countries",
    StateProvince => "state_provinces",
    Region => "regions",
    DifficultyRating => "difficulty_ratings",
    RegionalCalibration => "regional_calibrations",
    CharacterTag => "character_tags",
    SystemSize => "system_sizes",
    TrailDirection => "trail_directions",
    RouteType => "route_types",
    RidingStyle => "riding_styles",
    SkillLevel => "skill_levels",
    FitnessLevel => "fitness_levels",
    Month => "months",
    Condition => "conditions",
    ContentType => "content_types",
    Severity => "severities",
    UpdateType => "update_types",
}

fn check_unique<R: CatalogRow>(rows: &[R]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.id()) {
            return Err(ValidationError::DuplicateId {
                table: R::TABLE,
                id: row.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that `numeric_value`s form the exact sequence 1..=n once sorted.
fn check_contiguous<R: CatalogRow>(
    rows: &[R],
    numeric_value: impl Fn(&R) -> i32,
) -> Result<(), ValidationError> {
    let mut ordered: Vec<&R> = rows.iter().collect();
    ordered.sort_by_key(|r| numeric_value(r));

    for (i, row) in ordered.iter().enumerate() {
        let expected = i as i32 + 1;
        let found = numeric_value(row);
        if found != expected {
            return Err(ValidationError::NonContiguousOrdering {
                table: R::TABLE,
                id: row.id().to_string(),
                expected,
                found,
            });
        }
    }
    Ok(())
}

fn ids<R: CatalogRow>(rows: &[R]) -> HashSet<&str> {
    rows.iter().map(CatalogRow::id).collect()
}

/// Id sets for every enumeration table, borrowed from a catalog.
///
/// Build one with [`SeedCatalog::index`] and reuse it across many
/// [`VerifyReferences`] calls.
pub struct CatalogIndex<'a> {
    pub countries: HashSet<&'a str>,
    pub state_provinces: HashSet<&'a str>,
    pub regions: HashSet<&'a str>,
    pub difficulty_ratings: HashSet<&'a str>,
    pub regional_calibrations: HashSet<&'a str>,
    pub character_tags: HashSet<&'a str>,
    pub system_sizes: HashSet<&'a str>,
    pub trail_directions: HashSet<&'a str>,
    pub route_types: HashSet<&'a str>,
    pub riding_styles: HashSet<&'a str>,
    pub skill_levels: HashSet<&'a str>,
    pub fitness_levels: HashSet<&'a str>,
    pub months: HashSet<&'a str>,
    pub conditions: HashSet<&'a str>,
    pub content_types: HashSet<&'a str>,
    pub severities: HashSet<&'a str>,
    pub update_types: HashSet<&'a str>,
}

impl SeedCatalog {
    /// Validates the catalog itself: per-table id uniqueness, contiguous
    /// orderings, and internal foreign keys.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_unique(&self.countries)?;
        check_unique(&self.state_provinces)?;
        check_unique(&self.regions)?;
        check_unique(&self.difficulty_ratings)?;
        check_unique(&self.regional_calibrations)?;
        check_unique(&self.character_tags)?;
        check_unique(&self.system_sizes)?;
        check_unique(&self.trail_directions)?;
        check_unique(&self.route_types)?;
        check_unique(&self.riding_styles)?;
        check_unique(&self.skill_levels)?;
        check_unique(&self.fitness_levels)?;
        check_unique(&self.months)?;
        check_unique(&self.conditions)?;
        check_unique(&self.content_types)?;
        check_unique(&self.severities)?;
        check_unique(&self.update_types)?;

        check_contiguous(&self.difficulty_ratings, |r| r.numeric_value)?;
        check_contiguous(&self.skill_levels, |r| r.numeric_value)?;
        check_contiguous(&self.fitness_levels, |r| r.numeric_value)?;
        check_contiguous(&self.months, |r| r.numeric_value)?;
        check_contiguous(&self.severities, |r| r.numeric_value)?;

        let countries = ids(&self.countries);
        for sp in &self.state_provinces {
            check_id(
                &countries,
                "countries",
                "StateProvince",
                "country_id",
                &sp.country_id,
            )?;
        }

        Ok(())
    }

    /// Builds the id index used for referential checks.
    pub fn index(&self) -> CatalogIndex<'_> {
        CatalogIndex {
            countries: ids(&self.countries),
            state_provinces: ids(&self.state_provinces),
            regions: ids(&self.regions),
            difficulty_ratings: ids(&self.difficulty_ratings),
            regional_calibrations: ids(&self.regional_calibrations),
            character_tags: ids(&self.character_tags),
            system_sizes: ids(&self.system_sizes),
            trail_directions: ids(&self.trail_directions),
            route_types: ids(&self.route_types),
            riding_styles: ids(&self.riding_styles),
            skill_levels: ids(&self.skill_levels),
            fitness_levels: ids(&self.fitness_levels),
            months: ids(&self.months),
            conditions: ids(&self.conditions),
            content_types: ids(&self.content_types),
            severities: ids(&self.severities),
            update_types: ids(&self.update_types),
        }
    }
}

fn check_id(
    set: &HashSet<&str>,
    table: &'static str,
    entity: &'static str,
    field: &'static str,
    id: &str,
) -> Result<(), ValidationError> {
    if set.contains(id) {
        Ok(())
    } else {
        Err(ValidationError::UnknownReference {
            entity,
            field,
            table,
            id: id.to_string(),
        })
    }
}

fn check_ids(
    set: &HashSet<&str>,
    table: &'static str,
    entity: &'static str,
    field: &'static str,
    ids: &[String],
) -> Result<(), ValidationError> {
    for id in ids {
        check_id(set, table, entity, field, id)?;
    }
    Ok(())
}

/// Referential integrity against the enumeration catalog.
///
/// Covers only catalog-targeted foreign keys; links between entity records
/// (route -> system, media -> trail) are checked by the fixture set that owns
/// both sides.
pub trait VerifyReferences {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError>;
}

impl VerifyReferences for DifficultyProfile {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        const E: &str = "DifficultyProfile";
        check_id(
            &idx.difficulty_ratings,
            "difficulty_ratings",
            E,
            "overall_rating_id",
            &self.overall_rating_id,
        )?;
        check_id(
            &idx.regional_calibrations,
            "regional_calibrations",
            E,
            "regional_calibration_id",
            &self.regional_calibration_id,
        )?;
        check_ids(
            &idx.character_tags,
            "character_tags",
            E,
            "character_tag_ids",
            &self.character_tag_ids,
        )
    }
}

impl VerifyReferences for System {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        const E: &str = "System";
        check_id(&idx.regions, "regions", E, "region_id", &self.region_id)?;
        check_id(&idx.countries, "countries", E, "country_id", &self.country_id)?;
        check_id(
            &idx.state_provinces,
            "state_provinces",
            E,
            "state_province_id",
            &self.state_province_id,
        )?;
        check_id(&idx.system_sizes, "system_sizes", E, "size_id", &self.size_id)?;
        check_ids(&idx.months, "months", E, "best_month_ids", &self.best_month_ids)?;
        check_ids(&idx.months, "months", E, "avoid_month_ids", &self.avoid_month_ids)?;
        check_ids(
            &idx.character_tags,
            "character_tags",
            E,
            "known_for_tag_ids",
            &self.known_for_tag_ids,
        )?;
        check_ids(
            &idx.skill_levels,
            "skill_levels",
            E,
            "good_for_skill_ids",
            &self.good_for_skill_ids,
        )?;
        check_ids(
            &idx.riding_styles,
            "riding_styles",
            E,
            "good_for_style_ids",
            &self.good_for_style_ids,
        )?;
        check_id(
            &idx.regional_calibrations,
            "regional_calibrations",
            E,
            "difficulty_calibration_id",
            &self.difficulty_calibration_id,
        )?;
        check_ids(
            &idx.character_tags,
            "character_tags",
            E,
            "typical_feature_tag_ids",
            &self.typical_feature_tag_ids,
        )
    }
}

impl VerifyReferences for Route {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        const E: &str = "Route";
        check_id(
            &idx.route_types,
            "route_types",
            E,
            "route_type_id",
            &self.route_type_id,
        )?;
        check_ids(
            &idx.conditions,
            "conditions",
            E,
            "best_condition_ids",
            &self.best_condition_ids,
        )?;
        check_ids(
            &idx.conditions,
            "conditions",
            E,
            "avoid_condition_ids",
            &self.avoid_condition_ids,
        )?;
        check_ids(
            &idx.skill_levels,
            "skill_levels",
            E,
            "ideal_for_skill_ids",
            &self.ideal_for_skill_ids,
        )?;
        check_ids(
            &idx.riding_styles,
            "riding_styles",
            E,
            "ideal_for_style_ids",
            &self.ideal_for_style_ids,
        )?;
        check_ids(
            &idx.skill_levels,
            "skill_levels",
            E,
            "not_recommended_skill_ids",
            &self.not_recommended_skill_ids,
        )
    }
}

impl VerifyReferences for Trail {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.trail_directions,
            "trail_directions",
            "Trail",
            "direction_id",
            &self.direction_id,
        )
    }
}

impl VerifyReferences for UserPreferences {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        const E: &str = "UserPreferences";
        if let Some(region_id) = &self.home_region_id {
            check_id(&idx.regions, "regions", E, "home_region_id", region_id)?;
        }
        check_id(
            &idx.skill_levels,
            "skill_levels",
            E,
            "preferred_skill_level_id",
            &self.preferred_skill_level_id,
        )?;
        check_id(
            &idx.fitness_levels,
            "fitness_levels",
            E,
            "preferred_fitness_level_id",
            &self.preferred_fitness_level_id,
        )?;
        check_ids(
            &idx.riding_styles,
            "riding_styles",
            E,
            "preferred_style_ids",
            &self.preferred_style_ids,
        )?;
        check_ids(
            &idx.character_tags,
            "character_tags",
            E,
            "avoid_feature_tag_ids",
            &self.avoid_feature_tag_ids,
        )?;
        check_ids(
            &idx.conditions,
            "conditions",
            E,
            "avoid_condition_ids",
            &self.avoid_condition_ids,
        )
    }
}

impl VerifyReferences for Guide {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        const E: &str = "Guide";
        check_id(
            &idx.content_types,
            "content_types",
            E,
            "content_type_id",
            &self.content_type_id,
        )?;
        if let Some(skill_id) = &self.target_skill_level_id {
            check_id(
                &idx.skill_levels,
                "skill_levels",
                E,
                "target_skill_level_id",
                skill_id,
            )?;
        }
        Ok(())
    }
}

impl VerifyReferences for SeasonalUpdate {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        const E: &str = "SeasonalUpdate";
        check_id(
            &idx.update_types,
            "update_types",
            E,
            "update_type_id",
            &self.update_type_id,
        )?;
        check_id(&idx.severities, "severities", E, "severity_id", &self.severity_id)
    }
}

impl VerifyReferences for RegionalComparison {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_ids(
            &idx.regions,
            "regions",
            "RegionalComparison",
            "region_ids",
            &self.region_ids,
        )
    }
}

impl VerifyReferences for SystemCharacterTag {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.character_tags,
            "character_tags",
            "SystemCharacterTag",
            "character_tag_id",
            &self.character_tag_id,
        )
    }
}

impl VerifyReferences for SystemMonth {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(&idx.months, "months", "SystemMonth", "month_id", &self.month_id)
    }
}

impl VerifyReferences for SystemSkillLevel {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.skill_levels,
            "skill_levels",
            "SystemSkillLevel",
            "skill_level_id",
            &self.skill_level_id,
        )
    }
}

impl VerifyReferences for SystemRidingStyle {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.riding_styles,
            "riding_styles",
            "SystemRidingStyle",
            "riding_style_id",
            &self.riding_style_id,
        )
    }
}

impl VerifyReferences for RouteCondition {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.conditions,
            "conditions",
            "RouteCondition",
            "condition_id",
            &self.condition_id,
        )
    }
}

impl VerifyReferences for RouteSkillLevel {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.skill_levels,
            "skill_levels",
            "RouteSkillLevel",
            "skill_level_id",
            &self.skill_level_id,
        )
    }
}

impl VerifyReferences for RouteRidingStyle {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.riding_styles,
            "riding_styles",
            "RouteRidingStyle",
            "riding_style_id",
            &self.riding_style_id,
        )
    }
}

impl VerifyReferences for UserPreferenceStyle {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        check_id(
            &idx.riding_styles,
            "riding_styles",
            "UserPreferenceStyle",
            "riding_style_id",
            &self.riding_style_id,
        )
    }
}

impl VerifyReferences for DiscoveryRequest {
    fn verify_references(&self, idx: &CatalogIndex<'_>) -> Result<(), ValidationError> {
        const E: &str = "DiscoveryRequest";
        if let Some(location) = &self.location {
            check_ids(&idx.regions, "regions", E, "region_ids", &location.region_ids)?;
        }
        if let Some(month_id) = &self.travel_month_id {
            check_id(&idx.months, "months", E, "travel_month_id", month_id)?;
        }
        if let Some(prefs) = &self.preferences {
            if let Some(skill_id) = &prefs.skill_level_id {
                check_id(&idx.skill_levels, "skill_levels", E, "skill_level_id", skill_id)?;
            }
            if let Some(fitness_id) = &prefs.fitness_level_id {
                check_id(
                    &idx.fitness_levels,
                    "fitness_levels",
                    E,
                    "fitness_level_id",
                    fitness_id,
                )?;
            }
            check_ids(
                &idx.riding_styles,
                "riding_styles",
                E,
                "riding_style_ids",
                &prefs.riding_style_ids,
            )?;
            check_ids(
                &idx.character_tags,
                "character_tags",
                E,
                "must_have_tag_ids",
                &prefs.must_have_tag_ids,
            )?;
            check_ids(
                &idx.character_tags,
                "character_tags",
                E,
                "avoid_tag_ids",
                &prefs.avoid_tag_ids,
            )?;
        }
        Ok(())
    }
}

/// Runs the `validator` bounds checks and folds the result into
/// [`ValidationError`].
pub fn check_bounds<T: Validate>(value: &T) -> Result<(), ValidationError> {
    value.validate().map_err(ValidationError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = SeedCatalog::builtin();
        let dup = catalog.countries[0].clone();
        catalog.countries.push(dup);

        match catalog.validate() {
            Err(ValidationError::DuplicateId { table, id }) => {
                assert_eq!(table, "countries");
                assert_eq!(id, "usa");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_gap_in_ordering_rejected() {
        let mut catalog = SeedCatalog::builtin();
        catalog.severities[2].numeric_value = 5;

        match catalog.validate() {
            Err(ValidationError::NonContiguousOrdering { table, found, .. }) => {
                assert_eq!(table, "severities");
                assert_eq!(found, 5);
            }
            other => panic!("expected ordering error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_reference_reported() {
        let catalog = SeedCatalog::builtin();
        let idx = catalog.index();

        let profile = crate::models::DifficultyProfile {
            id: "dp_test".to_string(),
            overall_rating_id: "blue".to_string(),
            regional_calibration_id: "typical".to_string(),
            technical_climbing: 1,
            technical_descending: 2,
            flow_features: 1,
            fitness_demand: 1,
            comparable_to: None,
            character_tag_ids: vec!["rooty".to_string(), "moon-dust".to_string()],
        };

        match profile.verify_references(&idx) {
            Err(ValidationError::UnknownReference { field, id, .. }) => {
                assert_eq!(field, "character_tag_ids");
                assert_eq!(id, "moon-dust");
            }
            other => panic!("expected unknown reference error, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_index_covers_all_tables() {
        let catalog = SeedCatalog::builtin();
        let idx = catalog.index();

        assert!(idx.countries.contains("canada"));
        assert!(idx.difficulty_ratings.contains("double-black"));
        assert!(idx.conditions.contains("tacky"));
        assert!(idx.update_types.contains("access-changes"));
        assert_eq!(idx.months.len(), catalog::months().len());
    }
}
