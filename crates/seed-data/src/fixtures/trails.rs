//! Curated trail records for the four systems.

use mtb_wiki::models::Trail;
use time::macros::datetime;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).into()).collect()
}

pub fn all() -> Vec<Trail> {
    vec![
        // Whistler
        ez_does_it(),
        b_line(),
        crank_it_up(),
        blue_velvet(),
        ninja_cougar(),
        // Squamish
        word_of_mouth(),
        half_nelson(),
        angry_midget(),
        credit_line(),
        // St. George
        zen_trail(),
        bearclaw_poppy(),
    ]
}

pub fn ez_does_it() -> Trail {
    Trail {
        id: "trail_ez_does_it".into(),
        system_id: "sys_whistler_bike_park".into(),
        name: "EZ Does It".into(),
        difficulty_profile_id: "dp_park_green".into(),
        direction_id: "down-only".into(),
        length_km: Some(5.1),
        personality: "The gentle introduction - wide, winding, and confidence-building".into(),
        signature_features: strings(&["Long mellow switchbacks", "First-timer friendly rollers"]),
        local_name: None,
        condition_notes: Some("Rideable in almost any conditions".into()),
        pairs_well_with_trail_ids: strings(&["trail_b_line"]),
        trailforks_id: Some("7601".into()),
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-06-15 0:00 UTC),
    }
}

pub fn b_line() -> Trail {
    Trail {
        id: "trail_b_line".into(),
        system_id: "sys_whistler_bike_park".into(),
        name: "B-Line".into(),
        difficulty_profile_id: "dp_park_flow_blue".into(),
        direction_id: "down-only".into(),
        length_km: Some(3.4),
        personality: "Rolling berms and tables where new park riders find their rhythm".into(),
        signature_features: strings(&["Endless berm trains", "Rollable tabletops"]),
        local_name: None,
        condition_notes: Some("Gets braking bumps by late season".into()),
        pairs_well_with_trail_ids: strings(&["trail_crank_it_up"]),
        trailforks_id: Some("7609".into()),
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-06-15 0:00 UTC),
    }
}

pub fn crank_it_up() -> Trail {
    Trail {
        id: "trail_crank_it_up".into(),
        system_id: "sys_whistler_bike_park".into(),
        name: "Crank It Up".into(),
        difficulty_profile_id: "dp_park_flow_blue".into(),
        direction_id: "down-only".into(),
        length_km: Some(2.6),
        personality: "The jump progression trail - every feature has a ride-around".into(),
        signature_features: strings(&["Step-up jump line", "Hip jump finale"]),
        local_name: None,
        condition_notes: None,
        pairs_well_with_trail_ids: strings(&["trail_blue_velvet"]),
        trailforks_id: Some("7615".into()),
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-06-15 0:00 UTC),
    }
}

pub fn blue_velvet() -> Trail {
    Trail {
        id: "trail_blue_velvet".into(),
        system_id: "sys_whistler_bike_park".into(),
        name: "Blue Velvet".into(),
        difficulty_profile_id: "dp_blue_velvet".into(),
        direction_id: "down-only".into(),
        length_km: Some(3.2),
        personality: "The crown jewel of Whistler's flow trails. Machine-built perfection \
                      with endless berms, rollers, and optional jumps."
            .into(),
        signature_features: strings(&[
            "The \"Blue Velvet\" hip jump at the top",
            "The mega-berm halfway down",
            "Final jump line into the village",
        ]),
        local_name: Some("Blue V".into()),
        condition_notes: Some("Well maintained; best before the afternoon crowds".into()),
        pairs_well_with_trail_ids: strings(&["trail_crank_it_up"]),
        trailforks_id: Some("12345".into()),
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-06-15 0:00 UTC),
    }
}

pub fn ninja_cougar() -> Trail {
    Trail {
        id: "trail_ninja_cougar".into(),
        system_id: "sys_whistler_bike_park".into(),
        name: "Ninja Cougar".into(),
        difficulty_profile_id: "dp_ninja_cougar".into(),
        direction_id: "down-only".into(),
        length_km: Some(1.9),
        personality: "A natural-tech detour off the flow lines - roots and rock rolls".into(),
        signature_features: strings(&["Committing rock roll entrance", "Root web mid-section"]),
        local_name: None,
        condition_notes: Some("Much harder when wet".into()),
        pairs_well_with_trail_ids: vec![],
        trailforks_id: Some("7633".into()),
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-06-15 0:00 UTC),
    }
}

pub fn word_of_mouth() -> Trail {
    Trail {
        id: "trail_word_of_mouth".into(),
        system_id: "sys_squamish".into(),
        name: "Word of Mouth".into(),
        difficulty_profile_id: "dp_word_of_mouth".into(),
        direction_id: "up-preferred".into(),
        length_km: Some(5.0),
        personality: "The standard climbing route - steady, scenic, longer than it seems".into(),
        signature_features: strings(&["Smooth climbing grade", "Old-growth forest corridor"]),
        local_name: None,
        condition_notes: Some("Drains well; climbable year-round outside snow".into()),
        pairs_well_with_trail_ids: strings(&["trail_half_nelson"]),
        trailforks_id: None,
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-10-18 0:00 UTC),
    }
}

pub fn half_nelson() -> Trail {
    Trail {
        id: "trail_half_nelson".into(),
        system_id: "sys_squamish".into(),
        name: "Half Nelson".into(),
        difficulty_profile_id: "dp_half_nelson".into(),
        direction_id: "down-only".into(),
        length_km: Some(3.8),
        personality: "Relentless technical descent that redefines what a \"blue\" trail can \
                      be - continuous roots, rocks, and tight trees with no rest."
            .into(),
        signature_features: strings(&[
            "The root lattice at 1km",
            "Off-camber rock rolls",
            "Steep rolls that have humbled world-cup riders",
        ]),
        local_name: None,
        condition_notes: Some("Roots are ice-slick when wet".into()),
        pairs_well_with_trail_ids: strings(&["trail_word_of_mouth"]),
        trailforks_id: Some("1163".into()),
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-10-18 0:00 UTC),
    }
}

pub fn angry_midget() -> Trail {
    Trail {
        id: "trail_angry_midget".into(),
        system_id: "sys_squamish".into(),
        name: "Angry Midget".into(),
        difficulty_profile_id: "dp_angry_midget".into(),
        direction_id: "down-only".into(),
        length_km: Some(2.2),
        personality: "Granite slab exposure with consequences - a proper Squamish black".into(),
        signature_features: strings(&["Multiple exposure sections", "Slab rolls onto ledges"]),
        local_name: None,
        condition_notes: Some("Avoid entirely when wet".into()),
        pairs_well_with_trail_ids: vec![],
        trailforks_id: None,
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-10-18 0:00 UTC),
    }
}

pub fn credit_line() -> Trail {
    Trail {
        id: "trail_credit_line".into(),
        system_id: "sys_squamish".into(),
        name: "Credit Line".into(),
        difficulty_profile_id: "dp_credit_line".into(),
        direction_id: "down-only".into(),
        length_km: Some(2.7),
        personality: "Fast loamy corners that reward commitment".into(),
        signature_features: strings(&["Loam troughs", "High-speed root sections"]),
        local_name: None,
        condition_notes: Some("Closed periodically for erosion recovery".into()),
        pairs_well_with_trail_ids: vec![],
        trailforks_id: None,
        created_at: datetime!(2024-02-10 0:00 UTC),
        updated_at: datetime!(2024-10-18 0:00 UTC),
    }
}

pub fn zen_trail() -> Trail {
    Trail {
        id: "trail_zen".into(),
        system_id: "sys_stgeorge".into(),
        name: "Zen Trail".into(),
        difficulty_profile_id: "dp_zen".into(),
        direction_id: "both".into(),
        length_km: Some(6.3),
        personality: "Seemingly impossible climbs that require perfect line choice, \
                      momentum, and a bit of trials skills."
            .into(),
        signature_features: strings(&[
            "Repeated ledge punch-ups",
            "Boulder garden crux moves",
            "Mesa-top views",
        ]),
        local_name: None,
        condition_notes: Some("Any moisture makes the rock treacherous".into()),
        pairs_well_with_trail_ids: strings(&["trail_bearclaw_poppy"]),
        trailforks_id: Some("2291".into()),
        created_at: datetime!(2024-03-02 0:00 UTC),
        updated_at: datetime!(2024-09-22 0:00 UTC),
    }
}

pub fn bearclaw_poppy() -> Trail {
    Trail {
        id: "trail_bearclaw_poppy".into(),
        system_id: "sys_stgeorge".into(),
        name: "Bearclaw Poppy".into(),
        difficulty_profile_id: "dp_bearclaw_poppy".into(),
        direction_id: "one-way".into(),
        length_km: Some(4.5),
        personality: "The best introduction to the area - desert flow with just enough \
                      tech to keep you honest."
            .into(),
        signature_features: strings(&["The \"Three Fingers of Death\" rollers", "Fast gully swoops"]),
        local_name: None,
        condition_notes: Some("Stays rideable in heat longer than exposed mesa trails".into()),
        pairs_well_with_trail_ids: strings(&["trail_zen"]),
        trailforks_id: Some("2304".into()),
        created_at: datetime!(2024-03-02 0:00 UTC),
        updated_at: datetime!(2024-09-22 0:00 UTC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_ids_unique() {
        let trails = all();
        let mut ids: Vec<&str> = trails.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), trails.len());
    }

    #[test]
    fn test_pairings_stay_within_fixture_set() {
        let trails = all();
        let ids: Vec<&str> = trails.iter().map(|t| t.id.as_str()).collect();
        for trail in &trails {
            for pair in &trail.pairs_well_with_trail_ids {
                assert!(ids.contains(&pair.as_str()), "{} pairs with unknown {}", trail.id, pair);
            }
        }
    }
}
