//! Difficulty profiles for the curated routes and trails.
//!
//! Profiles are shared wherever two entities genuinely ride the same - the
//! Half Nelson loop and the trail itself carry one profile, not two copies.

use mtb_wiki::models::DifficultyProfile;

fn profile(
    id: &str,
    overall_rating_id: &str,
    regional_calibration_id: &str,
    scores: [i16; 4],
    comparable_to: Option<&str>,
    character_tag_ids: &[&str],
) -> DifficultyProfile {
    DifficultyProfile {
        id: id.into(),
        overall_rating_id: overall_rating_id.into(),
        regional_calibration_id: regional_calibration_id.into(),
        technical_climbing: scores[0],
        technical_descending: scores[1],
        flow_features: scores[2],
        fitness_demand: scores[3],
        comparable_to: comparable_to.map(Into::into),
        character_tag_ids: character_tag_ids.iter().map(|t| (*t).into()).collect(),
    }
}

pub fn all() -> Vec<DifficultyProfile> {
    vec![
        park_green(),
        park_flow_blue(),
        blue_velvet(),
        ninja_cougar(),
        word_of_mouth(),
        half_nelson(),
        angry_midget(),
        credit_line(),
        zen(),
        bearclaw_poppy(),
    ]
}

pub fn park_green() -> DifficultyProfile {
    profile(
        "dp_park_green",
        "green",
        "typical",
        [0, 0, 1, 0],
        None,
        &["flowy", "sheltered"],
    )
}

pub fn park_flow_blue() -> DifficultyProfile {
    profile(
        "dp_park_flow_blue",
        "blue",
        "typical",
        [0, 1, 2, 1],
        Some("Classic machine-built park flow"),
        &["flowy", "berms", "jumps"],
    )
}

pub fn blue_velvet() -> DifficultyProfile {
    profile(
        "dp_blue_velvet",
        "blue",
        "typical",
        [0, 1, 3, 1],
        Some("The benchmark park flow trail"),
        &["flowy", "berms", "jumps"],
    )
}

pub fn ninja_cougar() -> DifficultyProfile {
    profile(
        "dp_ninja_cougar",
        "black",
        "typical",
        [0, 3, 1, 1],
        None,
        &["technical", "rooty", "rocky"],
    )
}

pub fn word_of_mouth() -> DifficultyProfile {
    profile(
        "dp_word_of_mouth",
        "blue",
        "typical",
        [1, 1, 0, 2],
        None,
        &["forest", "switchbacks"],
    )
}

pub fn half_nelson() -> DifficultyProfile {
    profile(
        "dp_half_nelson",
        "blue",
        "harder",
        [1, 3, 1, 2],
        Some("Like a black diamond at most bike parks"),
        &["rooty", "rocky", "technical", "steep"],
    )
}

pub fn angry_midget() -> DifficultyProfile {
    profile(
        "dp_angry_midget",
        "black",
        "harder",
        [1, 3, 0, 2],
        None,
        &["exposed", "technical", "rocky"],
    )
}

pub fn credit_line() -> DifficultyProfile {
    profile(
        "dp_credit_line",
        "blue",
        "harder",
        [1, 2, 1, 2],
        None,
        &["rooty", "steep", "forest"],
    )
}

pub fn zen() -> DifficultyProfile {
    profile(
        "dp_zen",
        "black",
        "typical",
        [3, 3, 0, 2],
        Some("Trials riding meets cross-country"),
        &["rocky", "technical", "exposed", "slickrock"],
    )
}

pub fn bearclaw_poppy() -> DifficultyProfile {
    profile(
        "dp_bearclaw_poppy",
        "blue",
        "typical",
        [1, 2, 1, 1],
        None,
        &["rocky", "desert", "flowy"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_all_profiles_within_bounds() {
        for profile in all() {
            profile.validate().expect(&profile.id);
        }
    }
}
