//! Core entity records: systems, routes, trails, difficulty profiles, and
//! rider preferences.
//!
//! Every categorical field is a slug id into one of the
//! [`enumerations`](super::enumerations) vocabularies. Free text is reserved
//! for the narrative fields (taglines, tips, beta) where local voice is the
//! point. Junction row types mirror the relational layout one-to-one so a
//! record can be decomposed for storage without guesswork.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use super::{GeoPoint, IntRange};

/// Multi-axis difficulty descriptor.
///
/// A single nominal grade hides too much: a trail can be an easy spin up and a
/// deeply technical ride down. The four sub-scores split that out, and the
/// regional calibration records how the local grading culture skews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DifficultyProfile {
    pub id: String,

    /// -> DifficultyRating
    pub overall_rating_id: String,
    /// -> RegionalCalibration
    pub regional_calibration_id: String,

    #[validate(range(min = 0, max = 3))]
    pub technical_climbing: i16,
    #[validate(range(min = 0, max = 3))]
    pub technical_descending: i16,
    #[validate(range(min = 0, max = 3))]
    pub flow_features: i16,
    #[validate(range(min = 0, max = 3))]
    pub fitness_demand: i16,

    /// Calibration aid: "Like a black diamond at most bike parks".
    pub comparable_to: Option<String>,

    /// -> CharacterTag
    pub character_tag_ids: Vec<String>,
}

/// How the climbing at a system is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "climbing_style", rename_all = "snake_case")]
pub enum ClimbingStyle {
    Sustained,
    Punchy,
    Mixed,
    LiftAssisted,
}

/// Outbound references for a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExternalLinks {
    pub trailforks: Option<String>,
    pub official_site: Option<String>,
    pub local_org: Option<String>,
}

/// A riding destination: a bike park or regional trail network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct System {
    pub id: String,
    pub name: String,

    /// -> Region
    pub region_id: String,
    /// -> Country
    pub country_id: String,
    /// -> StateProvince
    pub state_province_id: String,
    /// Free text; cities are too numerous to enumerate.
    pub city: String,
    #[validate(nested)]
    pub coordinates: GeoPoint,

    pub tagline: String,
    pub description: String,

    /// -> SystemSize
    pub size_id: String,

    pub trail_count_estimate: i32,
    pub vertical_range_m: IntRange,

    /// -> Month
    pub best_month_ids: Vec<String>,
    /// -> Month
    pub avoid_month_ids: Vec<String>,
    /// -> CharacterTag
    pub known_for_tag_ids: Vec<String>,
    /// -> SkillLevel
    pub good_for_skill_ids: Vec<String>,
    /// -> RidingStyle
    pub good_for_style_ids: Vec<String>,

    /// -> RegionalCalibration
    pub difficulty_calibration_id: String,
    /// -> CharacterTag
    pub typical_feature_tag_ids: Vec<String>,
    pub climbing_style: ClimbingStyle,

    pub insider_tips: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub hidden_gems: Vec<String>,

    pub external_links: ExternalLinks,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A named, curated sequence of trails forming one ride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    /// -> System
    pub system_id: String,

    pub name: String,
    pub tagline: String,
    /// Why ride this particular combination.
    pub purpose: String,

    /// -> DifficultyProfile
    pub difficulty_profile_id: String,
    /// -> RouteType
    pub route_type_id: String,

    pub distance_km_min: f64,
    pub distance_km_max: f64,
    pub time_estimate_hours_min: f64,
    pub time_estimate_hours_max: f64,

    /// Ordered trail sequence; each element is a stored junction row.
    pub trail_sequence: Vec<RouteTrail>,

    /// -> Condition
    pub best_condition_ids: Vec<String>,
    /// -> Condition
    pub avoid_condition_ids: Vec<String>,
    /// -> SkillLevel
    pub ideal_for_skill_ids: Vec<String>,
    /// -> RidingStyle
    pub ideal_for_style_ids: Vec<String>,
    /// -> SkillLevel
    pub not_recommended_skill_ids: Vec<String>,

    pub highlights: Vec<String>,
    pub pro_tips: Vec<String>,
    pub watch_out_for: Vec<String>,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Junction row: one step of a route's trail sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTrail {
    pub id: String,
    /// -> Route
    pub route_id: String,
    /// -> Trail
    pub trail_id: String,
    /// Position within the route, starting at 1.
    pub sequence_order: i32,
    /// "Warm-up climb", "Main descent" - free text by design.
    pub purpose: String,
    pub notes: Option<String>,
}

/// A single physical trail segment within a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: String,
    /// -> System
    pub system_id: String,
    pub name: String,

    /// -> DifficultyProfile
    pub difficulty_profile_id: String,
    /// -> TrailDirection
    pub direction_id: String,

    pub length_km: Option<f64>,

    /// "Relentless tech fest" or "machine-built perfection".
    pub personality: String,
    pub signature_features: Vec<String>,
    pub local_name: Option<String>,
    pub condition_notes: Option<String>,

    /// -> Trail
    pub pairs_well_with_trail_ids: Vec<String>,

    pub trailforks_id: Option<String>,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// How a rider plans trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "trip_style", rename_all = "snake_case")]
pub enum TripStyle {
    Sampling,
    DeepDive,
    Progression,
    Social,
}

/// Who a rider usually rides with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "group_dynamic", rename_all = "snake_case")]
pub enum GroupDynamic {
    Solo,
    Partner,
    Group,
    Varies,
}

/// Per-axis enjoyment weights, each 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct StylePreferences {
    #[validate(range(min = 0.0, max = 1.0))]
    pub technical_climbing: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub technical_descending: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub flow_features: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub fitness_challenges: f64,
}

/// Learned rider preference record, built up by the consuming application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserPreferences {
    pub user_id: String,

    pub years_riding: i32,
    /// -> Region
    pub home_region_id: Option<String>,
    /// -> System
    pub favorite_system_ids: Vec<String>,

    /// -> DifficultyProfile
    pub preferred_difficulty_profile_id: String,
    /// -> SkillLevel
    pub preferred_skill_level_id: String,
    /// -> FitnessLevel
    pub preferred_fitness_level_id: String,
    /// -> RidingStyle
    pub preferred_style_ids: Vec<String>,

    #[validate(nested)]
    pub style_preferences: StylePreferences,

    pub trip_style: TripStyle,
    pub group_dynamic: GroupDynamic,

    /// -> CharacterTag
    pub avoid_feature_tag_ids: Vec<String>,
    /// -> Condition
    pub avoid_condition_ids: Vec<String>,

    pub updated_at: OffsetDateTime,
}

/// Side-by-side explanation of how two riding regions differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalComparison {
    pub id: String,
    pub title: String,
    /// -> Region
    pub region_ids: Vec<String>,
    pub key_differences: Vec<KeyDifference>,
    pub translation_guide: Vec<TranslationRow>,
}

/// One axis of a regional comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDifference {
    pub category: String,
    pub comparison: String,
}

/// Grade translation between regions ("a Squamish blue is a Sedona black").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRow {
    pub feature: String,
    pub equivalent: String,
    pub explanation: String,
}

// Junction rows. Entity records carry id vectors for ergonomic consumption;
// these types are the stored decomposition of those vectors.

/// best/avoid relationship used by month and condition junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "affinity", rename_all = "snake_case")]
pub enum Affinity {
    Best,
    Avoid,
}

/// ideal/not_recommended relationship used by skill-level junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "skill_fit", rename_all = "snake_case")]
pub enum SkillFit {
    Ideal,
    NotRecommended,
}

/// Which of a system's two tag lists a junction row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "system_tag_role", rename_all = "snake_case")]
pub enum SystemTagRole {
    KnownFor,
    TypicalFeature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemCharacterTag {
    pub system_id: String,
    pub character_tag_id: String,
    pub role: SystemTagRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMonth {
    pub system_id: String,
    pub month_id: String,
    pub relationship: Affinity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSkillLevel {
    pub system_id: String,
    pub skill_level_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRidingStyle {
    pub system_id: String,
    pub riding_style_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCondition {
    pub route_id: String,
    pub condition_id: String,
    pub relationship: Affinity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSkillLevel {
    pub route_id: String,
    pub skill_level_id: String,
    pub relationship: SkillFit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRidingStyle {
    pub route_id: String,
    pub riding_style_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailPairing {
    pub trail_id: String,
    pub pairs_with_trail_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserPreferenceStyle {
    pub user_id: String,
    pub riding_style_id: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub preference_strength: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_scores_bounded() {
        let mut profile = DifficultyProfile {
            id: "dp_test".to_string(),
            overall_rating_id: "blue".to_string(),
            regional_calibration_id: "typical".to_string(),
            technical_climbing: 2,
            technical_descending: 3,
            flow_features: 0,
            fitness_demand: 1,
            comparable_to: None,
            character_tag_ids: vec![],
        };
        assert!(profile.validate().is_ok());

        profile.technical_descending = 4;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_relationship_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&SkillFit::NotRecommended).unwrap(),
            "\"not_recommended\""
        );
        assert_eq!(serde_json::to_string(&Affinity::Best).unwrap(), "\"best\"");
        assert_eq!(
            serde_json::to_string(&ClimbingStyle::LiftAssisted).unwrap(),
            "\"lift_assisted\""
        );
    }

    #[test]
    fn test_style_preferences_bounded() {
        let prefs = StylePreferences {
            technical_climbing: 0.2,
            technical_descending: 0.9,
            flow_features: 0.8,
            fitness_challenges: 0.5,
        };
        assert!(prefs.validate().is_ok());

        let out_of_range = StylePreferences {
            technical_climbing: 1.2,
            ..prefs
        };
        assert!(out_of_range.validate().is_err());
    }
}
