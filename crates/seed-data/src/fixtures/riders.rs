//! Rider preference records.

use mtb_wiki::models::{
    GroupDynamic, StylePreferences, TripStyle, UserPreferenceStyle, UserPreferences,
};
use time::macros::datetime;

pub fn all() -> Vec<UserPreferences> {
    vec![mike_thompson_preferences()]
}

/// Per-style weights behind `preferred_style_ids`, stored as junction rows.
pub fn style_strengths() -> Vec<UserPreferenceStyle> {
    vec![
        UserPreferenceStyle {
            user_id: "user_789".into(),
            riding_style_id: "enduro".into(),
            preference_strength: 0.9,
        },
        UserPreferenceStyle {
            user_id: "user_789".into(),
            riding_style_id: "trail".into(),
            preference_strength: 0.7,
        },
    ]
}

/// Mike rides a few seasons of Squamish tech and the app has learned he
/// chases descents, avoids exposure, and travels with a crew.
pub fn mike_thompson_preferences() -> UserPreferences {
    UserPreferences {
        user_id: "user_789".into(),
        years_riding: 8,
        home_region_id: Some("pacific-northwest".into()),
        favorite_system_ids: vec!["sys_squamish".into(), "sys_whistler_bike_park".into()],
        preferred_difficulty_profile_id: "dp_half_nelson".into(),
        preferred_skill_level_id: "challenging".into(),
        preferred_fitness_level_id: "fit".into(),
        preferred_style_ids: vec!["enduro".into(), "trail".into()],
        style_preferences: StylePreferences {
            technical_climbing: 0.4,
            technical_descending: 0.9,
            flow_features: 0.6,
            fitness_challenges: 0.5,
        },
        trip_style: TripStyle::Progression,
        group_dynamic: GroupDynamic::Group,
        avoid_feature_tag_ids: vec!["exposed".into()],
        avoid_condition_ids: vec!["muddy".into(), "icy".into()],
        updated_at: datetime!(2024-10-20 0:00 UTC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_preference_weights_within_bounds() {
        for prefs in all() {
            prefs.validate().expect(&prefs.user_id);
        }
        for row in style_strengths() {
            row.validate().expect(&row.riding_style_id);
        }
    }

    #[test]
    fn test_style_strengths_cover_preferred_styles() {
        let prefs = mike_thompson_preferences();
        let strengths = style_strengths();
        for style_id in &prefs.preferred_style_ids {
            assert!(
                strengths
                    .iter()
                    .any(|s| s.user_id == prefs.user_id && &s.riding_style_id == style_id),
                "missing strength for {style_id}"
            );
        }
    }
}
