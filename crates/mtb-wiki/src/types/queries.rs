//! Query parameter types for trail-system discovery.

use serde::Deserialize;

/// Who is coming on the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    Solo,
    Couple,
    Friends,
    Family,
    MixedSkills,
}

/// Proximity filter around a point.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NearFilter {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

/// Geographic narrowing for a discovery request.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationFilter {
    pub near: Option<NearFilter>,
    /// Filter to specific regions
    #[serde(default)]
    pub region_ids: Vec<String>,
    /// Filter to specific systems
    #[serde(default)]
    pub system_ids: Vec<String>,
}

/// Rider preference block, all foreign keys into the enumeration layer.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryPreferences {
    pub skill_level_id: Option<String>,
    pub fitness_level_id: Option<String>,
    #[serde(default)]
    pub riding_style_ids: Vec<String>,
    #[serde(default)]
    pub must_have_tag_ids: Vec<String>,
    #[serde(default)]
    pub avoid_tag_ids: Vec<String>,
}

/// A "where should I ride" request.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryRequest {
    pub location: Option<LocationFilter>,

    /// -> Month
    pub travel_month_id: Option<String>,
    #[serde(default)]
    pub flexible_timing: bool,

    pub preferences: Option<DiscoveryPreferences>,

    /// Days available for the trip.
    pub trip_length_days: Option<i32>,
    pub group_type: GroupType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_deserializes() {
        let request: DiscoveryRequest =
            serde_json::from_str(r#"{"group_type": "mixed_skills"}"#).unwrap();
        assert_eq!(request.group_type, GroupType::MixedSkills);
        assert!(!request.flexible_timing);
        assert!(request.location.is_none());
    }

    #[test]
    fn test_full_request_deserializes() {
        let json = r#"{
            "location": {
                "near": {"lat": 49.7, "lng": -123.15, "radius_km": 200.0},
                "region_ids": ["pacific-northwest"],
                "system_ids": []
            },
            "travel_month_id": "september",
            "flexible_timing": true,
            "preferences": {
                "skill_level_id": "challenging",
                "fitness_level_id": "fit",
                "riding_style_ids": ["enduro", "trail"],
                "avoid_tag_ids": ["exposed"]
            },
            "trip_length_days": 5,
            "group_type": "friends"
        }"#;
        let request: DiscoveryRequest = serde_json::from_str(json).unwrap();

        let prefs = request.preferences.unwrap();
        assert_eq!(prefs.riding_style_ids, vec!["enduro", "trail"]);
        assert!(prefs.must_have_tag_ids.is_empty());
        assert_eq!(request.travel_month_id.as_deref(), Some("september"));
    }
}
