//! Long-form guide records.

use mtb_wiki::models::{Attribution, EditorialStatus, Guide, GuideRevision, GuideSection};
use time::macros::datetime;

/// The flagship fixture: a featured first-timer's guide to Squamish written
/// by a verified local.
pub fn squamish_visitor_guide() -> Guide {
    Guide {
        id: "guide_squamish_first_timer".into(),
        content_type_id: "system-overview".into(),
        system_id: "sys_squamish".into(),
        route_ids: vec!["route_half_nelson_classic".into()],

        title: "First Timer's Guide to Squamish: How to Survive and Thrive".into(),
        summary: "Everything you need to know before pointing your bike down a Squamish \
                  trail, from a local who's watched countless visitors learn the hard way."
            .into(),

        sections: vec![
            GuideSection {
                heading: "Understanding Squamish Ratings".into(),
                content: "If there's one thing you need to know, it's this: Squamish ratings \
                          are different. That blue trail you're eyeing? It would be a black \
                          or double-black anywhere else.\n\nThe infamous Half Nelson is rated \
                          blue, but features continuous roots, rocks, tight trees, and steep \
                          rolls that have humbled world-cup riders. Start with green trails \
                          like Meadow of the Grizzly to calibrate your expectations."
                    .into(),
                media_refs: vec!["media_half_nelson_reality_check".into()],
            },
            GuideSection {
                heading: "The Gear You Actually Need".into(),
                content: "Beyond the obvious (full-face for most trails, knee pads are \
                          mandatory):\n- Bigger brake rotors (203mm minimum) - the descents \
                          are long and steep\n- Fresh brake pads - you'll burn through them \
                          faster than expected\n- Tire inserts or tough casings - the rocks \
                          are sharp\n- Clear glasses - for the inevitable face-full of ferns"
                    .into(),
                media_refs: vec!["media_typical_squamish_roots".into()],
            },
            GuideSection {
                heading: "Trail Progression for Your First Week".into(),
                content: "Day 1-2: Start in the Diamond Head area. Jacks Trail and Meadow of \
                          the Grizzly will give you a taste without destroying your \
                          confidence.\n\nDay 3-4: Ready for \"Squamish Blue\"? Try Pseudo \
                          Tsuga - it's challenging but more forgiving than Half Nelson.\n\n\
                          Day 5+: Now you might be ready for the classics like Half Nelson, \
                          Angry Midget, or Rupert."
                    .into(),
                media_refs: vec!["media_progression_map".into()],
            },
            GuideSection {
                heading: "Local Secrets".into(),
                content: "- Early morning rides (before 9am) often have perfect tacky \
                          conditions\n- The Mamquam FSR climb is boring but opens up amazing \
                          high-alpine riding\n- Don't skip Alice Lake trails - less techy but \
                          incredible flow\n- The Exit trails near the gondola are worth the \
                          pedal"
                    .into(),
                media_refs: vec![],
            },
            GuideSection {
                heading: "Common Mistakes to Avoid".into(),
                content: "1. Starting with Half Nelson because \"it's just a blue\"\n2. Not \
                          bringing enough food/water for the long climbs\n3. Riding when \
                          trails are too wet (damages trails and is dangerous)\n4. \
                          Underestimating the physical demands - pace yourself!"
                    .into(),
                media_refs: vec![],
            },
        ],

        key_points: vec![
            "Squamish blues = blacks elsewhere".into(),
            "Knee pads and good brakes essential".into(),
            "Start easier than you think".into(),
            "Respect wet conditions".into(),
        ],
        target_skill_level_id: Some("comfortable".into()),

        author: Attribution {
            user_id: "user_123".into(),
            display_name: "Sarah Chen".into(),
        },

        quality_score: 94,
        editorial_status: EditorialStatus::Featured,

        version_history: vec![
            GuideRevision {
                version: 1,
                edited_by: "Sarah Chen".into(),
                edit_summary: "Initial guide creation".into(),
                timestamp: datetime!(2024-03-15 0:00 UTC),
            },
            GuideRevision {
                version: 2,
                edited_by: "Sarah Chen".into(),
                edit_summary: "Added gear section based on feedback".into(),
                timestamp: datetime!(2024-04-02 0:00 UTC),
            },
        ],

        created_at: datetime!(2024-03-15 0:00 UTC),
        updated_at: datetime!(2024-04-02 0:00 UTC),
        last_verified: datetime!(2024-10-01 0:00 UTC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_history_monotonic() {
        let guide = squamish_visitor_guide();
        for (i, revision) in guide.version_history.iter().enumerate() {
            assert_eq!(revision.version, i as i32 + 1);
        }
        assert!(guide.created_at <= guide.updated_at);
        assert!(guide.updated_at <= guide.last_verified);
    }
}
