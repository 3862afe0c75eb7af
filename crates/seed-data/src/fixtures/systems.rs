//! The four curated destination systems and the region comparison that
//! explains how their gradings relate.

use mtb_wiki::models::{
    ClimbingStyle, ExternalLinks, GeoPoint, IntRange, KeyDifference, RegionalComparison, System,
    TranslationRow,
};
use time::macros::datetime;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).into()).collect()
}

pub fn all() -> Vec<System> {
    vec![
        whistler_system(),
        squamish_system(),
        st_george_system(),
        sedona_system(),
    ]
}

pub fn whistler_system() -> System {
    System {
        id: "sys_whistler_bike_park".into(),
        name: "Whistler Bike Park".into(),
        region_id: "pacific-northwest".into(),
        country_id: "canada".into(),
        state_province_id: "british-columbia".into(),
        city: "Whistler".into(),
        coordinates: GeoPoint::new(50.1163, -122.9574),
        tagline: "The gold standard for lift-accessed mountain biking".into(),
        description: "The world's premier lift-accessed mountain bike park with over 80 \
                      trails and 1,500m of vertical, offering everything from \
                      beginner-friendly greens to world-cup downhill tracks."
            .into(),
        size_id: "world-class".into(),
        trail_count_estimate: 80,
        vertical_range_m: IntRange::new(675, 2175),
        best_month_ids: strings(&["july", "august", "september"]),
        avoid_month_ids: strings(&["november", "december", "january", "february", "march", "april"]),
        known_for_tag_ids: strings(&["berms", "jumps", "flowy", "technical"]),
        good_for_skill_ids: strings(&["learning", "comfortable", "challenging", "expert"]),
        good_for_style_ids: strings(&["trail", "enduro", "dh", "flow"]),
        difficulty_calibration_id: "harder".into(),
        typical_feature_tag_ids: strings(&["berms", "jumps", "drops", "wooden-features"]),
        climbing_style: ClimbingStyle::LiftAssisted,
        insider_tips: strings(&[
            "Download the Whistler app for real-time trail status",
            "Ride Garbanzo zone in the afternoon when Fitzsimmons side gets busy",
            "Book lessons early in your trip to maximize improvement",
        ]),
        common_mistakes: strings(&[
            "Don't jump into black trails on day 1 - the park is more challenging than most",
            "Avoid weekends in July/August if possible",
            "Don't forget arm pump is real - pace yourself",
        ]),
        hidden_gems: strings(&[
            "Top of the World trail offers alpine riding unlike anywhere else in the park",
            "Early season has amazing conditions with fewer crowds",
            "The skills centers are free and perfect for warming up",
        ]),
        external_links: ExternalLinks {
            trailforks: Some(
                "https://www.trailforks.com/region/whistler-mountain-bike-park/".into(),
            ),
            official_site: Some(
                "https://www.whistlerblackcomb.com/explore-the-resort/activities/bike-park".into(),
            ),
            local_org: None,
        },
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-11-05 0:00 UTC),
    }
}

pub fn squamish_system() -> System {
    System {
        id: "sys_squamish".into(),
        name: "Squamish Trail Network".into(),
        region_id: "pacific-northwest".into(),
        country_id: "canada".into(),
        state_province_id: "british-columbia".into(),
        city: "Squamish".into(),
        coordinates: GeoPoint::new(49.7016, -123.1558),
        tagline: "Ancient rainforest meets granite slabs".into(),
        description: "World-class technical descents through mossy forests where a \"blue\" \
                      trail would be double-black anywhere else. Big sustained climbs lead to \
                      rowdy, rooty descents over granite slabs and wet root lattices."
            .into(),
        size_id: "destination".into(),
        trail_count_estimate: 200,
        vertical_range_m: IntRange::new(50, 1500),
        best_month_ids: strings(&["june", "july", "august", "september"]),
        avoid_month_ids: strings(&["november", "december", "january", "february", "march"]),
        known_for_tag_ids: strings(&["rooty", "technical", "steep", "forest"]),
        good_for_skill_ids: strings(&["comfortable", "challenging", "expert"]),
        good_for_style_ids: strings(&["enduro", "trail"]),
        difficulty_calibration_id: "harder".into(),
        typical_feature_tag_ids: strings(&["rooty", "rocky", "steep", "wooden-features"]),
        climbing_style: ClimbingStyle::Sustained,
        insider_tips: strings(&[
            "What locals call \"blue\" will shock riders from other regions",
            "Brakes heat up fast - consider larger rotors",
            "Knee pads are basically mandatory here",
        ]),
        common_mistakes: strings(&[
            "Jumping straight onto Half Nelson thinking it's a normal blue",
            "Not bringing enough brake pads",
            "Underestimating the physical demands of the climbs",
        ]),
        hidden_gems: strings(&[
            "The Diamond Head area has easier trails perfect for building skills",
            "Early morning rides often have perfect tacky conditions",
            "Quest University trails are less crowded but equally good",
        ]),
        external_links: ExternalLinks {
            trailforks: Some("https://www.trailforks.com/region/squamish/".into()),
            official_site: None,
            local_org: Some("https://sorca.ca/".into()),
        },
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-10-18 0:00 UTC),
    }
}

pub fn st_george_system() -> System {
    System {
        id: "sys_stgeorge".into(),
        name: "St. George Trail System".into(),
        region_id: "southwest-desert".into(),
        country_id: "usa".into(),
        state_province_id: "utah".into(),
        city: "St. George".into(),
        coordinates: GeoPoint::new(37.0965, -113.5684),
        tagline: "Red rock desert riding where every climb is a technical puzzle".into(),
        description: "Short, punchy climbs over ledges and through boulder fields define the \
                      experience. What goes up must come down - usually over the same \
                      technical features."
            .into(),
        size_id: "destination".into(),
        trail_count_estimate: 100,
        vertical_range_m: IntRange::new(800, 1400),
        best_month_ids: strings(&["october", "november", "february", "march", "april"]),
        avoid_month_ids: strings(&["june", "july", "august"]),
        known_for_tag_ids: strings(&["slickrock", "rocky", "exposed", "technical"]),
        good_for_skill_ids: strings(&["comfortable", "challenging", "expert"]),
        good_for_style_ids: strings(&["xc", "trail", "enduro"]),
        difficulty_calibration_id: "typical".into(),
        typical_feature_tag_ids: strings(&["rocky", "exposed", "desert"]),
        climbing_style: ClimbingStyle::Punchy,
        insider_tips: strings(&[
            "Start rides by 7am in shoulder season to beat heat",
            "Lower tire pressure helps with traction on slickrock",
            "Many trails are bidirectional but have preferred directions",
        ]),
        common_mistakes: strings(&[
            "Not bringing enough water - desert dehydration is real",
            "Riding Zen Trail as your first ride (it's harder than it looks)",
            "Missing the early morning golden hour light",
        ]),
        hidden_gems: strings(&[
            "Bearclaw Poppy trails are the best introduction to the area",
            "Hurricane Cliffs area stays cooler in shoulder season",
            "Santa Clara River Reserve has the most variety",
        ]),
        external_links: ExternalLinks {
            trailforks: Some("https://www.trailforks.com/region/st-george/".into()),
            official_site: None,
            local_org: Some("https://www.dmbta.org/".into()),
        },
        created_at: datetime!(2024-03-02 0:00 UTC),
        updated_at: datetime!(2024-09-22 0:00 UTC),
    }
}

pub fn sedona_system() -> System {
    System {
        id: "sys_sedona".into(),
        name: "Sedona Trail System".into(),
        region_id: "southwest-desert".into(),
        country_id: "usa".into(),
        state_province_id: "arizona".into(),
        city: "Sedona".into(),
        coordinates: GeoPoint::new(34.8697, -111.7610),
        tagline: "Red rock paradise with year-round riding".into(),
        description: "Sedona combines breathtaking red rock scenery with challenging \
                      technical terrain, making it a bucket-list destination for riders \
                      seeking both beauty and adventure."
            .into(),
        size_id: "destination".into(),
        trail_count_estimate: 200,
        vertical_range_m: IntRange::new(1300, 2100),
        best_month_ids: strings(&["october", "november", "march", "april"]),
        avoid_month_ids: strings(&["june", "july", "august"]),
        known_for_tag_ids: strings(&["slickrock", "scenic", "technical", "desert"]),
        good_for_skill_ids: strings(&["comfortable", "challenging", "expert"]),
        good_for_style_ids: strings(&["xc", "trail"]),
        difficulty_calibration_id: "typical".into(),
        typical_feature_tag_ids: strings(&["rocky", "exposed", "slickrock"]),
        climbing_style: ClimbingStyle::Punchy,
        insider_tips: strings(&[
            "Start early to beat heat and crowds",
            "Tubeless is essential - lots of thorns",
            "Don't miss the views from Highline trail",
        ]),
        common_mistakes: strings(&[
            "Riding in summer midday heat",
            "Underestimating water needs",
            "Wet conditions make rock extremely slippery",
        ]),
        hidden_gems: strings(&[
            "The Hogs trails offer Sedona tech without the crowds",
            "Sunset rides paint the rocks in incredible colors",
            "Link rides with swimming holes in Oak Creek",
        ]),
        external_links: ExternalLinks {
            trailforks: Some("https://www.trailforks.com/region/sedona/".into()),
            official_site: Some("https://www.visitsedona.com/mountain-biking".into()),
            local_org: None,
        },
        created_at: datetime!(2024-03-02 0:00 UTC),
        updated_at: datetime!(2024-10-30 0:00 UTC),
    }
}

/// How PNW and Southwest gradings translate into each other.
pub fn pnw_vs_southwest_comparison() -> RegionalComparison {
    RegionalComparison {
        id: "comp_pnw_vs_southwest".into(),
        title: "PNW vs Southwest: Understanding the Differences".into(),
        region_ids: strings(&["pacific-northwest", "southwest-desert"]),
        key_differences: vec![
            KeyDifference {
                category: "Trail Difficulty Ratings".into(),
                comparison: "PNW rates trails much harder. A Squamish \"blue\" would be black \
                             or double-black in most other regions. Southwest tends to rate \
                             more accurately to global standards."
                    .into(),
            },
            KeyDifference {
                category: "Climbing Style".into(),
                comparison: "PNW features long, sustained climbs on relatively smooth trails. \
                             Southwest has short, punchy, highly technical climbs requiring \
                             trials-like skills."
                    .into(),
            },
            KeyDifference {
                category: "Descending Character".into(),
                comparison: "PNW descents are steep, rooty, and often wet with natural \
                             features. Southwest descents are rocky, ledgy, with exposure but \
                             typically dry."
                    .into(),
            },
            KeyDifference {
                category: "Weather Impact".into(),
                comparison: "PNW trails are designed to handle rain but become very \
                             challenging. Southwest trails become dangerous when wet and \
                             should be avoided after rain."
                    .into(),
            },
            KeyDifference {
                category: "Seasonal Riding".into(),
                comparison: "PNW prime season is summer/early fall. Southwest prime season is \
                             fall/winter/spring, avoiding extreme summer heat."
                    .into(),
            },
        ],
        translation_guide: vec![
            TranslationRow {
                feature: "Squamish Blue Trail".into(),
                equivalent: "Black Diamond in Sedona".into(),
                explanation: "The technical difficulty and exposure on PNW blues exceeds most \
                              black ratings elsewhere"
                    .into(),
            },
            TranslationRow {
                feature: "Utah technical climb rating".into(),
                equivalent: "Add 1-2 levels for PNW".into(),
                explanation: "A rideable technical climb in Utah might be hike-a-bike in the \
                              PNW due to wet roots"
                    .into(),
            },
            TranslationRow {
                feature: "Southwest \"chunky\"".into(),
                equivalent: "PNW \"rooty\"".into(),
                explanation: "Different obstacles but similar technical demands - rocks vs \
                              roots"
                    .into(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_ids_unique() {
        let systems = all();
        let mut ids: Vec<&str> = systems.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), systems.len());
    }

    #[test]
    fn test_seasonal_windows_disjoint() {
        for system in all() {
            for month in &system.best_month_ids {
                assert!(
                    !system.avoid_month_ids.contains(month),
                    "{} lists {} as both best and avoid",
                    system.id,
                    month
                );
            }
        }
    }
}
