//! Curated route records with their ordered trail sequences.

use mtb_wiki::models::{Route, RouteTrail};
use time::macros::datetime;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).into()).collect()
}

fn step(
    id: &str,
    route_id: &str,
    trail_id: &str,
    sequence_order: i32,
    purpose: &str,
    notes: Option<&str>,
) -> RouteTrail {
    RouteTrail {
        id: id.into(),
        route_id: route_id.into(),
        trail_id: trail_id.into(),
        sequence_order,
        purpose: purpose.into(),
        notes: notes.map(Into::into),
    }
}

pub fn all() -> Vec<Route> {
    vec![classic_flow_route(), half_nelson_classic(), zen_trail_experience()]
}

pub fn classic_flow_route() -> Route {
    const ID: &str = "route_classic_flow";
    Route {
        id: ID.into(),
        system_id: "sys_whistler_bike_park".into(),
        name: "Classic Whistler Flow".into(),
        tagline: "The perfect introduction to world-class bike park flow".into(),
        purpose: "Combines Whistler's most iconic flow trails for an unforgettable descent. \
                  Perfect for intermediate riders looking to experience what makes Whistler \
                  special."
            .into(),
        difficulty_profile_id: "dp_park_flow_blue".into(),
        route_type_id: "lift-laps".into(),
        distance_km_min: 10.0,
        distance_km_max: 12.0,
        time_estimate_hours_min: 2.5,
        time_estimate_hours_max: 3.5,
        trail_sequence: vec![
            step(
                "rt_classic_flow_1",
                ID,
                "trail_ez_does_it",
                1,
                "Warm-up lap",
                Some("Warm up on this gentle green"),
            ),
            step(
                "rt_classic_flow_2",
                ID,
                "trail_b_line",
                2,
                "Building rhythm",
                Some("Start getting into the flow"),
            ),
            step(
                "rt_classic_flow_3",
                ID,
                "trail_crank_it_up",
                3,
                "Jump progression",
                Some("Time to start jumping (or rolling)"),
            ),
            step(
                "rt_classic_flow_4",
                ID,
                "trail_blue_velvet",
                4,
                "The main event",
                Some("The quintessential Whistler flow trail"),
            ),
            step(
                "rt_classic_flow_5",
                ID,
                "trail_ninja_cougar",
                5,
                "Technical option",
                Some("Take it if you want variety"),
            ),
        ],
        best_condition_ids: strings(&["dry", "hardpack"]),
        avoid_condition_ids: strings(&["wet"]),
        ideal_for_skill_ids: strings(&["comfortable", "challenging"]),
        ideal_for_style_ids: strings(&["flow", "trail"]),
        not_recommended_skill_ids: strings(&["learning"]),
        highlights: strings(&[
            "Endless berms and rollers",
            "Multiple jump lines (all with ride-arounds)",
            "Stunning mountain views",
            "Variety of trail characters",
        ]),
        pro_tips: strings(&[
            "Ride in the morning for the shortest lift lines",
            "Session the jump lines on Crank It Up before committing on Blue Velvet",
        ]),
        watch_out_for: strings(&[
            "Braking bumps late in the day",
            "Crowds on summer weekends",
        ]),
        created_at: datetime!(2024-02-12 0:00 UTC),
        updated_at: datetime!(2024-06-15 0:00 UTC),
    }
}

pub fn half_nelson_classic() -> Route {
    const ID: &str = "route_half_nelson_classic";
    Route {
        id: ID.into(),
        system_id: "sys_squamish".into(),
        name: "Half Nelson Classic".into(),
        tagline: "The PNW technical descent that defines Squamish".into(),
        purpose: "This isn't just a trail, it's a rite of passage. The climb up Word of \
                  Mouth builds anticipation (and leg burn) before dropping into Half Nelson \
                  - a relentless technical descent that will redefine your understanding of \
                  what a \"blue\" trail can be."
            .into(),
        difficulty_profile_id: "dp_half_nelson".into(),
        route_type_id: "loop".into(),
        distance_km_min: 12.0,
        distance_km_max: 14.0,
        time_estimate_hours_min: 2.0,
        time_estimate_hours_max: 3.0,
        trail_sequence: vec![
            step(
                "rt_half_nelson_1",
                ID,
                "trail_word_of_mouth",
                1,
                "The standard climbing route - steady and scenic",
                Some("Pace yourself, it's longer than it seems"),
            ),
            step(
                "rt_half_nelson_2",
                ID,
                "trail_half_nelson",
                2,
                "THE classic Squamish descent",
                Some("Commit to the lines - hesitation makes it harder"),
            ),
        ],
        best_condition_ids: strings(&["tacky", "dry"]),
        avoid_condition_ids: strings(&["wet", "muddy"]),
        ideal_for_skill_ids: strings(&["challenging", "expert"]),
        ideal_for_style_ids: strings(&["enduro", "trail"]),
        not_recommended_skill_ids: strings(&["learning", "comfortable"]),
        highlights: strings(&[
            "The climb is a grind but saves the best for last",
            "Continuous technical descending with no filler",
        ]),
        pro_tips: strings(&[
            "First-timers often walk multiple sections - that's normal",
            "Sweet spot is tacky dirt after 1-2 dry days",
        ]),
        watch_out_for: strings(&[
            "Gets significantly harder when wet",
            "Brake fade on the long descent",
        ]),
        created_at: datetime!(2024-02-12 0:00 UTC),
        updated_at: datetime!(2024-10-18 0:00 UTC),
    }
}

pub fn zen_trail_experience() -> Route {
    const ID: &str = "route_zen_experience";
    Route {
        id: ID.into(),
        system_id: "sys_stgeorge".into(),
        name: "Zen Trail Experience".into(),
        tagline: "Technical climbing meditation in the desert".into(),
        purpose: "Zen Trail embodies St. George riding - seemingly impossible climbs that \
                  require perfect line choice, momentum, and a bit of trials skills. What \
                  looks unrideable becomes possible with practice and determination."
            .into(),
        difficulty_profile_id: "dp_zen".into(),
        route_type_id: "loop".into(),
        distance_km_min: 8.0,
        distance_km_max: 10.0,
        time_estimate_hours_min: 2.0,
        time_estimate_hours_max: 3.0,
        trail_sequence: vec![
            step(
                "rt_zen_1",
                ID,
                "trail_zen",
                1,
                "The main event - technical climbing at its finest",
                Some("Lower tire pressure to 18-20 PSI for better grip"),
            ),
            step(
                "rt_zen_2",
                ID,
                "trail_bearclaw_poppy",
                2,
                "A more reasonable descent option",
                Some("Still technical but more forgiving than descending Zen"),
            ),
        ],
        best_condition_ids: strings(&["dry"]),
        avoid_condition_ids: strings(&["wet", "summer-heat"]),
        ideal_for_skill_ids: strings(&["challenging", "expert"]),
        ideal_for_style_ids: strings(&["xc", "trail"]),
        not_recommended_skill_ids: strings(&["learning", "comfortable"]),
        highlights: strings(&[
            "The views from the mesa top make the effort worthwhile",
            "Crux moves that reward repeat visits",
        ]),
        pro_tips: strings(&[
            "Don't be discouraged by early hike-a-bikes",
            "Watch locals for line choice through technical sections",
        ]),
        watch_out_for: strings(&[
            "Bone dry only - any moisture makes rock treacherous",
            "Exposure adds to difficulty on the descent",
        ]),
        created_at: datetime!(2024-03-05 0:00 UTC),
        updated_at: datetime!(2024-09-22 0:00 UTC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_ordered_from_one() {
        for route in all() {
            for (i, step) in route.trail_sequence.iter().enumerate() {
                assert_eq!(step.sequence_order, i as i32 + 1, "route {}", route.id);
                assert_eq!(step.route_id, route.id);
            }
        }
    }

    #[test]
    fn test_distance_ranges_ordered() {
        for route in all() {
            assert!(route.distance_km_min <= route.distance_km_max);
            assert!(route.time_estimate_hours_min <= route.time_estimate_hours_max);
        }
    }
}
