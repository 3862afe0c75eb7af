//! Builtin enumeration catalog.
//!
//! The closed vocabularies every entity record references, bundled as plain
//! data for one-time insertion into the database. Each table function returns
//! the full builtin row set; [`SeedCatalog::builtin`] collects all of them.
//!
//! Ids are stable slugs and must never be renamed once published - entity
//! records in the wild reference them.

use serde::{Deserialize, Serialize};

use crate::models::{
    CharacterTag, ClimateType, Condition, ConditionCategory, ContentType, Country,
    DifficultyRating, FitnessLevel, IntRange, Month, Region, RegionalCalibration, RidingStyle,
    RouteType, Season, Severity, SkillLevel, StateProvince, SystemSize, TagCategory,
    TrailDirection, UpdateCategory, UpdateType,
};

/// The complete enumeration layer, one vector per table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub countries: Vec<Country>,
    pub state_provinces: Vec<StateProvince>,
    pub regions: Vec<Region>,
    pub difficulty_ratings: Vec<DifficultyRating>,
    pub regional_calibrations: Vec<RegionalCalibration>,
    pub character_tags: Vec<CharacterTag>,
    pub system_sizes: Vec<SystemSize>,
    pub trail_directions: Vec<TrailDirection>,
    pub route_types: Vec<RouteType>,
    pub riding_styles: Vec<RidingStyle>,
    pub skill_levels: Vec<SkillLevel>,
    pub fitness_levels: Vec<FitnessLevel>,
    pub months: Vec<Month>,
    pub conditions: Vec<Condition>,
    pub content_types: Vec<ContentType>,
    pub severities: Vec<Severity>,
    pub update_types: Vec<UpdateType>,
}

impl SeedCatalog {
    /// Assembles the builtin vocabulary.
    pub fn builtin() -> Self {
        Self {
            countries: countries(),
            state_provinces: state_provinces(),
            regions: regions(),
            difficulty_ratings: difficulty_ratings(),
            regional_calibrations: regional_calibrations(),
            character_tags: character_tags(),
            system_sizes: system_sizes(),
            trail_directions: trail_directions(),
            route_types: route_types(),
            riding_styles: riding_styles(),
            skill_levels: skill_levels(),
            fitness_levels: fitness_levels(),
            months: months(),
            conditions: conditions(),
            content_types: content_types(),
            severities: severities(),
            update_types: update_types(),
        }
    }
}

fn country(id: &str, name: &str, code: &str) -> Country {
    Country {
        id: id.into(),
        name: name.into(),
        code: code.into(),
    }
}

pub fn countries() -> Vec<Country> {
    vec![
        country("usa", "United States", "US"),
        country("canada", "Canada", "CA"),
        country("uk", "United Kingdom", "GB"),
        country("france", "France", "FR"),
        country("switzerland", "Switzerland", "CH"),
        country("austria", "Austria", "AT"),
        country("australia", "Australia", "AU"),
        country("new-zealand", "New Zealand", "NZ"),
        country("chile", "Chile", "CL"),
    ]
}

fn province(id: &str, country_id: &str, name: &str, code: &str) -> StateProvince {
    StateProvince {
        id: id.into(),
        country_id: country_id.into(),
        name: name.into(),
        code: code.into(),
    }
}

pub fn state_provinces() -> Vec<StateProvince> {
    vec![
        // USA
        province("california", "usa", "California", "CA"),
        province("washington", "usa", "Washington", "WA"),
        province("oregon", "usa", "Oregon", "OR"),
        province("colorado", "usa", "Colorado", "CO"),
        province("utah", "usa", "Utah", "UT"),
        province("arizona", "usa", "Arizona", "AZ"),
        province("north-carolina", "usa", "North Carolina", "NC"),
        province("vermont", "usa", "Vermont", "VT"),
        province("montana", "usa", "Montana", "MT"),
        province("idaho", "usa", "Idaho", "ID"),
        // Canada
        province("british-columbia", "canada", "British Columbia", "BC"),
        province("alberta", "canada", "Alberta", "AB"),
        province("quebec", "canada", "Quebec", "QC"),
        province("ontario", "canada", "Ontario", "ON"),
    ]
}

fn region(
    id: &str,
    name: &str,
    description: &str,
    typical_features: &[&str],
    climate_type: ClimateType,
) -> Region {
    Region {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        typical_features: typical_features.iter().map(|f| (*f).into()).collect(),
        climate_type,
    }
}

pub fn regions() -> Vec<Region> {
    vec![
        region(
            "pacific-northwest",
            "Pacific Northwest",
            "Wet climate, technical terrain, old growth forests",
            &["roots", "rocks", "steep", "wet", "technical"],
            ClimateType::TemperateRainforest,
        ),
        region(
            "southwest-desert",
            "Southwest Desert",
            "Dry climate, slickrock, exposure, big views",
            &["slickrock", "exposure", "dry", "scenic", "technical"],
            ClimateType::Desert,
        ),
        region(
            "rocky-mountains",
            "Rocky Mountains",
            "High altitude, alpine terrain, seasonal access",
            &["alpine", "rocks", "exposure", "seasonal", "scenic"],
            ClimateType::Alpine,
        ),
        region(
            "appalachian",
            "Appalachian",
            "Eastern mountains, hardwood forests, technical climbing",
            &["roots", "rocks", "steep", "humid", "technical"],
            ClimateType::TemperateDeciduous,
        ),
        region(
            "california-coastal",
            "California Coastal",
            "Mediterranean climate, diverse terrain, year-round riding",
            &["diverse", "dry_summers", "fire_roads", "singletrack"],
            ClimateType::Mediterranean,
        ),
    ]
}

pub fn difficulty_ratings() -> Vec<DifficultyRating> {
    vec![
        DifficultyRating {
            id: "green".into(),
            name: "green".into(),
            display_name: "Green Circle".into(),
            numeric_value: 1,
            description: "Beginner friendly, wide trails, gentle grades".into(),
        },
        DifficultyRating {
            id: "blue".into(),
            name: "blue".into(),
            display_name: "Blue Square".into(),
            numeric_value: 2,
            description: "Intermediate, some technical features, moderate grades".into(),
        },
        DifficultyRating {
            id: "black".into(),
            name: "black".into(),
            display_name: "Black Diamond".into(),
            numeric_value: 3,
            description: "Advanced, technical features, steep grades".into(),
        },
        DifficultyRating {
            id: "double-black".into(),
            name: "double_black".into(),
            display_name: "Double Black Diamond".into(),
            numeric_value: 4,
            description: "Expert only, very technical, severe consequences".into(),
        },
    ]
}

pub fn regional_calibrations() -> Vec<RegionalCalibration> {
    vec![
        RegionalCalibration {
            id: "softer".into(),
            name: "softer_than_typical".into(),
            display_name: "Softer than Typical".into(),
            adjustment_factor: -0.5,
            description: "Easier than the rating suggests for this region".into(),
        },
        RegionalCalibration {
            id: "typical".into(),
            name: "typical".into(),
            display_name: "Typical".into(),
            adjustment_factor: 0.0,
            description: "Standard difficulty for the rating".into(),
        },
        RegionalCalibration {
            id: "harder".into(),
            name: "harder_than_typical".into(),
            display_name: "Harder than Typical".into(),
            adjustment_factor: 0.5,
            description: "More difficult than the rating suggests for this region".into(),
        },
    ]
}

fn tag(id: &str, name: &str, category: TagCategory, description: &str, icon: &str) -> CharacterTag {
    CharacterTag {
        id: id.into(),
        name: name.into(),
        category,
        description: description.into(),
        icon: Some(icon.into()),
    }
}

pub fn character_tags() -> Vec<CharacterTag> {
    use TagCategory::*;
    vec![
        // Surface
        tag("rooty", "rooty", Surface, "Lots of tree roots", "🌳"),
        tag("rocky", "rocky", Surface, "Rock gardens and stone features", "🪨"),
        tag("loamy", "loamy", Surface, "Soft, grippy dirt", "🏔️"),
        tag("sandy", "sandy", Surface, "Sand and loose dirt", "🏖️"),
        tag("slickrock", "slickrock", Surface, "Smooth sandstone", "🏜️"),
        // Terrain
        tag("steep", "steep", Terrain, "Significant grades", "⛰️"),
        tag("rolling", "rolling", Terrain, "Gentle ups and downs", "🌊"),
        tag("flat", "flat", Terrain, "Minimal elevation change", "➡️"),
        tag(
            "switchbacks",
            "switchbacks",
            Terrain,
            "Tight turns on climbs/descents",
            "🔄",
        ),
        // Features
        tag("flowy", "flowy", Features, "Smooth, continuous riding", "🌊"),
        tag(
            "technical",
            "technical",
            Features,
            "Requires advanced bike handling",
            "⚙️",
        ),
        tag("jumps", "jumps", Features, "Built jump features", "🚀"),
        tag("drops", "drops", Features, "Vertical drop features", "⬇️"),
        tag("berms", "berms", Features, "Banked turns", "🏁"),
        tag(
            "wooden-features",
            "wooden_features",
            Features,
            "Bridges, skinnies, etc.",
            "🌉",
        ),
        // Exposure
        tag(
            "exposed",
            "exposed",
            Exposure,
            "Significant fall consequences",
            "⚠️",
        ),
        tag(
            "sheltered",
            "sheltered",
            Exposure,
            "Protected from weather/falls",
            "🏠",
        ),
        // Scenery
        tag("scenic", "scenic", Scenery, "Outstanding views", "🏞️"),
        tag("forest", "forest", Scenery, "Dense tree cover", "🌲"),
        tag("desert", "desert", Scenery, "Arid landscape", "🌵"),
        tag("alpine", "alpine", Scenery, "High mountain environment", "🏔️"),
    ]
}

pub fn system_sizes() -> Vec<SystemSize> {
    vec![
        SystemSize {
            id: "local-gem".into(),
            name: "local_gem".into(),
            display_name: "Local Gem".into(),
            typical_trail_count: IntRange::new(5, 20),
            typical_days_needed: IntRange::new(1, 1),
            description: "Small local network, half-day to full-day riding".into(),
        },
        SystemSize {
            id: "weekend-trip".into(),
            name: "weekend_trip".into(),
            display_name: "Weekend Trip".into(),
            typical_trail_count: IntRange::new(15, 50),
            typical_days_needed: IntRange::new(2, 3),
            description: "Worth a weekend trip, multiple days of riding".into(),
        },
        SystemSize {
            id: "destination".into(),
            name: "destination".into(),
            display_name: "Destination".into(),
            typical_trail_count: IntRange::new(40, 150),
            typical_days_needed: IntRange::new(4, 7),
            description: "Major destination, week-long trips possible".into(),
        },
        SystemSize {
            id: "world-class".into(),
            name: "world_class".into(),
            display_name: "World Class".into(),
            typical_trail_count: IntRange::new(100, 500),
            typical_days_needed: IntRange::new(7, 14),
            description: "World-renowned, multiple weeks of riding".into(),
        },
    ]
}

pub fn trail_directions() -> Vec<TrailDirection> {
    vec![
        TrailDirection {
            id: "both".into(),
            name: "both".into(),
            display_name: "Both Directions".into(),
            description: "Can be ridden up or down comfortably".into(),
        },
        TrailDirection {
            id: "up-preferred".into(),
            name: "up_preferred".into(),
            display_name: "Up Preferred".into(),
            description: "Better as a climb, but can be descended".into(),
        },
        TrailDirection {
            id: "down-only".into(),
            name: "down_only".into(),
            display_name: "Down Only".into(),
            description: "Designed for descending only".into(),
        },
        TrailDirection {
            id: "one-way".into(),
            name: "one_way".into(),
            display_name: "One Way".into(),
            description: "Traffic flows in one direction only".into(),
        },
    ]
}

fn route_type(
    id: &str,
    name: &str,
    display_name: &str,
    description: &str,
    typical_logistics: &[&str],
) -> RouteType {
    RouteType {
        id: id.into(),
        name: name.into(),
        display_name: display_name.into(),
        description: description.into(),
        typical_logistics: typical_logistics.iter().map(|l| (*l).into()).collect(),
    }
}

pub fn route_types() -> Vec<RouteType> {
    vec![
        route_type(
            "loop",
            "loop",
            "Loop",
            "Returns to starting point",
            &["Single parking area", "No shuttle needed"],
        ),
        route_type(
            "out-back",
            "out_back",
            "Out and Back",
            "Ride out, turn around, ride back",
            &["Single parking area", "Retrace route"],
        ),
        route_type(
            "point-to-point",
            "point_to_point",
            "Point to Point",
            "Start and end at different locations",
            &["Two vehicles or shuttle", "Different start/end"],
        ),
        route_type(
            "shuttle",
            "shuttle",
            "Shuttle",
            "Vehicle shuttle to top, ride down",
            &["Shuttle service or second vehicle", "Mostly descending"],
        ),
        route_type(
            "lift-laps",
            "lift_laps",
            "Lift Laps",
            "Use chairlift for uphill",
            &["Bike park with lift", "Day pass required"],
        ),
    ]
}

fn riding_style(
    id: &str,
    name: &str,
    display_name: &str,
    description: &str,
    typical_features: &[&str],
) -> RidingStyle {
    RidingStyle {
        id: id.into(),
        name: name.into(),
        display_name: display_name.into(),
        description: description.into(),
        typical_features: typical_features.iter().map(|f| (*f).into()).collect(),
    }
}

pub fn riding_styles() -> Vec<RidingStyle> {
    vec![
        riding_style(
            "xc",
            "xc",
            "Cross Country",
            "Emphasis on climbing and endurance",
            &["climbing", "endurance", "efficiency"],
        ),
        riding_style(
            "trail",
            "trail",
            "Trail",
            "Balanced climbing and descending",
            &["balanced", "versatile", "moderate_technical"],
        ),
        riding_style(
            "enduro",
            "enduro",
            "Enduro",
            "Emphasis on technical descending",
            &["descending", "technical", "aggressive"],
        ),
        riding_style(
            "dh",
            "dh",
            "Downhill",
            "Pure descending, lift or shuttle access",
            &["descending_only", "very_technical", "speed"],
        ),
        riding_style(
            "flow",
            "flow",
            "Flow",
            "Smooth, continuous riding with rhythm",
            &["smooth", "berms", "jumps", "rhythm"],
        ),
    ]
}

pub fn skill_levels() -> Vec<SkillLevel> {
    vec![
        SkillLevel {
            id: "learning".into(),
            name: "learning".into(),
            display_name: "Learning".into(),
            numeric_value: 1,
            description: "New to mountain biking or building basic skills".into(),
            typical_experience: "Less than 1 year, green trails comfortable".into(),
        },
        SkillLevel {
            id: "comfortable".into(),
            name: "comfortable".into(),
            display_name: "Comfortable".into(),
            numeric_value: 2,
            description: "Solid fundamentals, ready for new challenges".into(),
            typical_experience: "1-3 years, blue trails comfortable".into(),
        },
        SkillLevel {
            id: "challenging".into(),
            name: "challenging".into(),
            display_name: "Challenging".into(),
            numeric_value: 3,
            description: "Advanced skills, seeking technical challenges".into(),
            typical_experience: "3+ years, black trails comfortable".into(),
        },
        SkillLevel {
            id: "expert".into(),
            name: "expert".into(),
            display_name: "Expert".into(),
            numeric_value: 4,
            description: "Exceptional skills, riding the most difficult terrain".into(),
            typical_experience: "5+ years, double black comfortable".into(),
        },
    ]
}

pub fn fitness_levels() -> Vec<FitnessLevel> {
    vec![
        FitnessLevel {
            id: "casual".into(),
            name: "casual".into(),
            display_name: "Casual".into(),
            numeric_value: 1,
            description: "Recreational fitness, prefer shorter rides".into(),
            typical_distance_km: IntRange::new(5, 15),
        },
        FitnessLevel {
            id: "fit".into(),
            name: "fit".into(),
            display_name: "Fit".into(),
            numeric_value: 2,
            description: "Good cardiovascular fitness, moderate distances".into(),
            typical_distance_km: IntRange::new(15, 30),
        },
        FitnessLevel {
            id: "very-fit".into(),
            name: "very_fit".into(),
            display_name: "Very Fit".into(),
            numeric_value: 3,
            description: "High fitness level, long rides comfortable".into(),
            typical_distance_km: IntRange::new(25, 50),
        },
        FitnessLevel {
            id: "athlete".into(),
            name: "athlete".into(),
            display_name: "Athlete".into(),
            numeric_value: 4,
            description: "Exceptional fitness, ultra-distance capable".into(),
            typical_distance_km: IntRange::new(40, 100),
        },
    ]
}

fn month(id: &str, display_name: &str, numeric_value: i32, season: Season) -> Month {
    Month {
        id: id.into(),
        name: id.into(),
        display_name: display_name.into(),
        numeric_value,
        season,
    }
}

pub fn months() -> Vec<Month> {
    use Season::*;
    vec![
        month("january", "January", 1, Winter),
        month("february", "February", 2, Winter),
        month("march", "March", 3, Spring),
        month("april", "April", 4, Spring),
        month("may", "May", 5, Spring),
        month("june", "June", 6, Summer),
        month("july", "July", 7, Summer),
        month("august", "August", 8, Summer),
        month("september", "September", 9, Fall),
        month("october", "October", 10, Fall),
        month("november", "November", 11, Fall),
        month("december", "December", 12, Winter),
    ]
}

fn condition(
    id: &str,
    name: &str,
    category: ConditionCategory,
    is_positive: bool,
    description: &str,
) -> Condition {
    Condition {
        id: id.into(),
        name: name.into(),
        category,
        is_positive,
        description: description.into(),
    }
}

pub fn conditions() -> Vec<Condition> {
    use ConditionCategory::*;
    vec![
        // Weather
        condition("dry", "dry", Weather, true, "Dry conditions, good traction"),
        condition("wet", "wet", Weather, false, "Wet conditions, slippery"),
        condition("muddy", "muddy", Weather, false, "Muddy trails, poor traction"),
        condition("icy", "icy", Weather, false, "Ice on trails, dangerous"),
        condition("snowy", "snowy", Weather, false, "Snow covered trails"),
        // Trail surface
        condition(
            "tacky",
            "tacky",
            TrailSurface,
            true,
            "Perfect grip, slightly moist",
        ),
        condition("dusty", "dusty", TrailSurface, false, "Dusty, loose surface"),
        condition("hardpack", "hardpack", TrailSurface, true, "Firm, fast surface"),
        condition(
            "loose",
            "loose",
            TrailSurface,
            false,
            "Loose surface, poor traction",
        ),
        // Seasonal
        condition(
            "spring-conditions",
            "spring_conditions",
            Seasonal,
            true,
            "Fresh spring conditions",
        ),
        condition(
            "summer-heat",
            "summer_heat",
            Seasonal,
            false,
            "Hot summer conditions",
        ),
        condition(
            "fall-colors",
            "fall_colors",
            Seasonal,
            true,
            "Beautiful fall foliage",
        ),
        condition(
            "winter-closure",
            "winter_closure",
            Seasonal,
            false,
            "Closed for winter",
        ),
    ]
}

pub fn content_types() -> Vec<ContentType> {
    vec![
        ContentType {
            id: "system-overview".into(),
            name: "system_overview".into(),
            display_name: "System Overview".into(),
            description: "General information about a trail system".into(),
            typical_length: "500-1000 words".into(),
        },
        ContentType {
            id: "route-guide".into(),
            name: "route_guide".into(),
            display_name: "Route Guide".into(),
            description: "Detailed guide for a specific route".into(),
            typical_length: "300-800 words".into(),
        },
        ContentType {
            id: "skills-progression".into(),
            name: "skills_progression".into(),
            display_name: "Skills Progression".into(),
            description: "How to progress skills at this location".into(),
            typical_length: "400-600 words".into(),
        },
        ContentType {
            id: "seasonal-tips".into(),
            name: "seasonal_tips".into(),
            display_name: "Seasonal Tips".into(),
            description: "Best practices for different seasons".into(),
            typical_length: "200-400 words".into(),
        },
    ]
}

pub fn severities() -> Vec<Severity> {
    vec![
        Severity {
            id: "info".into(),
            name: "info".into(),
            display_name: "Info".into(),
            numeric_value: 1,
            color_code: "#3B82F6".into(),
            description: "General information, nice to know".into(),
        },
        Severity {
            id: "important".into(),
            name: "important".into(),
            display_name: "Important".into(),
            numeric_value: 2,
            color_code: "#F59E0B".into(),
            description: "Important information, affects trip planning".into(),
        },
        Severity {
            id: "critical".into(),
            name: "critical".into(),
            display_name: "Critical".into(),
            numeric_value: 3,
            color_code: "#EF4444".into(),
            description: "Critical information, safety or access concerns".into(),
        },
    ]
}

pub fn update_types() -> Vec<UpdateType> {
    use UpdateCategory::*;
    vec![
        UpdateType {
            id: "conditions".into(),
            name: "conditions".into(),
            display_name: "Trail Conditions".into(),
            category: TrailStatus,
            description: "Current trail conditions and surface quality".into(),
        },
        UpdateType {
            id: "closures".into(),
            name: "closures".into(),
            display_name: "Closures".into(),
            category: Access,
            description: "Trail or area closures".into(),
        },
        UpdateType {
            id: "new-trails".into(),
            name: "new_trails".into(),
            display_name: "New Trails".into(),
            category: Infrastructure,
            description: "New trail openings or construction".into(),
        },
        UpdateType {
            id: "events".into(),
            name: "events".into(),
            display_name: "Events".into(),
            category: Community,
            description: "Races, group rides, or other events".into(),
        },
        UpdateType {
            id: "access-changes".into(),
            name: "access_changes".into(),
            display_name: "Access Changes".into(),
            category: Access,
            description: "Changes to parking, permits, or access rules".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        SeedCatalog::builtin().validate().expect("builtin catalog");
    }

    #[test]
    fn test_table_sizes() {
        let catalog = SeedCatalog::builtin();
        assert_eq!(catalog.countries.len(), 9);
        assert_eq!(catalog.state_provinces.len(), 14);
        assert_eq!(catalog.regions.len(), 5);
        assert_eq!(catalog.difficulty_ratings.len(), 4);
        assert_eq!(catalog.regional_calibrations.len(), 3);
        assert_eq!(catalog.character_tags.len(), 20);
        assert_eq!(catalog.months.len(), 12);
        assert_eq!(catalog.conditions.len(), 13);
        assert_eq!(catalog.severities.len(), 3);
        assert_eq!(catalog.update_types.len(), 5);
    }

    #[test]
    fn test_difficulty_ratings_ordered() {
        let ratings = difficulty_ratings();
        let values: Vec<i32> = ratings.iter().map(|r| r.numeric_value).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_months_cover_year_in_order() {
        let months = months();
        for (i, month) in months.iter().enumerate() {
            assert_eq!(month.numeric_value, i as i32 + 1);
        }
        assert_eq!(months[0].season, Season::Winter);
        assert_eq!(months[6].season, Season::Summer);
    }

    #[test]
    fn test_state_provinces_reference_known_countries() {
        let catalog = SeedCatalog::builtin();
        for sp in &catalog.state_provinces {
            assert!(
                catalog.countries.iter().any(|c| c.id == sp.country_id),
                "province {} references unknown country {}",
                sp.id,
                sp.country_id
            );
        }
    }

    #[test]
    fn test_calibration_factors_symmetric() {
        let calibrations = regional_calibrations();
        let sum: f64 = calibrations.iter().map(|c| c.adjustment_factor).sum();
        assert_eq!(sum, 0.0);
    }
}
