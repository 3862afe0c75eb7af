//! Enumeration table rows.
//!
//! Every categorical value in the knowledge base lives in one of these closed
//! vocabularies. Each row carries a stable slug `id` that entity records
//! reference instead of free text; rows with a `numeric_value` form a
//! contiguous ordering usable for sorting.

use serde::{Deserialize, Serialize};

use super::IntRange;

/// Country a trail system is located in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
}

/// First-level administrative division within a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateProvince {
    pub id: String,
    pub country_id: String,
    pub name: String,
    pub code: String,
}

/// Broad climate zone of a riding region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "climate_type", rename_all = "snake_case")]
pub enum ClimateType {
    TemperateRainforest,
    Desert,
    Alpine,
    TemperateDeciduous,
    Mediterranean,
}

/// Riding region with a shared terrain character (e.g. Pacific Northwest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub description: String,
    pub typical_features: Vec<String>,
    pub climate_type: ClimateType,
}

/// Nominal trail grade (green through double black).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRating {
    pub id: String,
    pub name: String,
    pub display_name: String,
    /// 1..=4, ordered from easiest to hardest.
    pub numeric_value: i32,
    pub description: String,
}

/// How a region's nominal grades compare to the global baseline.
///
/// The same "blue" means very different things in Squamish and in a midwestern
/// flow park; systems carry one of these to calibrate expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalCalibration {
    pub id: String,
    pub name: String,
    pub display_name: String,
    /// Grade adjustment relative to typical: -0.5, 0.0, or +0.5.
    pub adjustment_factor: f64,
    pub description: String,
}

/// Grouping for character tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "tag_category", rename_all = "snake_case")]
pub enum TagCategory {
    Surface,
    Terrain,
    Features,
    Exposure,
    Scenery,
}

/// Descriptive tag for trail or system character ("rooty", "flowy", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterTag {
    pub id: String,
    pub name: String,
    pub category: TagCategory,
    pub description: String,
    pub icon: Option<String>,
}

/// How big a destination a system is, from after-work laps to trip-of-a-year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSize {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub typical_trail_count: IntRange,
    pub typical_days_needed: IntRange,
    pub description: String,
}

/// Which way a trail is meant to be ridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailDirection {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
}

/// Route shape: loop, shuttle, lift laps, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteType {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub typical_logistics: Vec<String>,
}

/// Riding discipline (XC, trail, enduro, DH, flow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidingStyle {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub typical_features: Vec<String>,
}

/// Rider technical skill tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub id: String,
    pub name: String,
    pub display_name: String,
    /// 1..=4, ordered from learning to expert.
    pub numeric_value: i32,
    pub description: String,
    pub typical_experience: String,
}

/// Rider fitness tier, with the ride distances it typically supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessLevel {
    pub id: String,
    pub name: String,
    pub display_name: String,
    /// 1..=4, ordered from casual to athlete.
    pub numeric_value: i32,
    pub description: String,
    pub typical_distance_km: IntRange,
}

/// Meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "season", rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

/// Calendar month, enumerated so seasonal windows are foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Month {
    pub id: String,
    pub name: String,
    pub display_name: String,
    /// 1..=12.
    pub numeric_value: i32,
    pub season: Season,
}

/// Grouping for trail conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "condition_category", rename_all = "snake_case")]
pub enum ConditionCategory {
    Weather,
    TrailSurface,
    Seasonal,
}

/// Trail condition ("tacky", "muddy", ...), flagged good or bad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub category: ConditionCategory,
    pub is_positive: bool,
    pub description: String,
}

/// Kind of long-form guide content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentType {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub typical_length: String,
}

/// How urgent a seasonal update is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Severity {
    pub id: String,
    pub name: String,
    pub display_name: String,
    /// 1..=3, info through critical.
    pub numeric_value: i32,
    /// Hex color for UI badges.
    pub color_code: String,
    pub description: String,
}

/// Grouping for update types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "update_category", rename_all = "snake_case")]
pub enum UpdateCategory {
    TrailStatus,
    Access,
    Infrastructure,
    Community,
}

/// What a seasonal update is about (conditions, closures, events, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateType {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub category: UpdateCategory,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_enums_serialize_snake_case() {
        let json = serde_json::to_string(&ClimateType::TemperateRainforest).unwrap();
        assert_eq!(json, "\"temperate_rainforest\"");

        let json = serde_json::to_string(&ConditionCategory::TrailSurface).unwrap();
        assert_eq!(json, "\"trail_surface\"");

        let cat: TagCategory = serde_json::from_str("\"exposure\"").unwrap();
        assert_eq!(cat, TagCategory::Exposure);
    }

    #[test]
    fn test_month_round_trip() {
        let month = Month {
            id: "june".to_string(),
            name: "june".to_string(),
            display_name: "June".to_string(),
            numeric_value: 6,
            season: Season::Summer,
        };
        let json = serde_json::to_string(&month).unwrap();
        let back: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }
}
