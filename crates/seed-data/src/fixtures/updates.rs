//! Seasonal advisory records.

use mtb_wiki::models::{SeasonalUpdate, UpdateImpact};
use time::macros::datetime;

/// The fall 2024 wet-season advisory for Squamish, confirmed by three riders.
pub fn squamish_fall_update() -> SeasonalUpdate {
    SeasonalUpdate {
        id: "update_squamish_fall_2024".into(),
        system_id: "sys_squamish".into(),
        update_type_id: "conditions".into(),
        severity_id: "important".into(),
        title: "Fall 2024 Conditions Update: Wet Season Has Arrived".into(),
        summary: "Annual fall rains have started. Many trails are rideable but use caution. \
                  Some closures in effect."
            .into(),
        detailed_update: "The wet season has officially begun as of October 15th. Here's \
                          what you need to know:\n\n**Currently Riding Well in Wet:**\n- \
                          Alice Lake network (drains well)\n- Most Garibaldi Highlands \
                          trails\n- Lower elevation trails in Diamond Head\n\n**Use Extreme \
                          Caution:**\n- Half Nelson - roots are ice-slick when wet\n- Angry \
                          Midget - multiple exposure sections\n- Any north-facing trails \
                          (stay wet longer)\n\n**Temporarily Closed:**\n- Credit Line - \
                          erosion concerns\n- Some alpine trails due to snow above 1200m\n\n\
                          Remember: Riding wet trails causes damage. If you're leaving ruts, \
                          it's too wet!"
            .into(),
        relevant_from: datetime!(2024-10-15 0:00 UTC),
        relevant_until: Some(datetime!(2025-04-01 0:00 UTC)),
        affects: UpdateImpact {
            trail_ids: vec![
                "trail_half_nelson".into(),
                "trail_angry_midget".into(),
                "trail_credit_line".into(),
            ],
            route_ids: vec!["route_half_nelson_classic".into()],
            areas: vec![
                "Alpine trails above 1200m".into(),
                "North-facing slopes".into(),
            ],
        },
        reported_by: "user_123".into(),
        verified_by: vec![
            "user_456".into(),
            "user_789".into(),
            "user_admin_1".into(),
        ],
        verification_count: 3,
        media_evidence: vec!["media_wet_conditions_2024".into()],
        created_at: datetime!(2024-10-15 0:00 UTC),
        last_confirmed: datetime!(2024-10-18 0:00 UTC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevance_window_ordered() {
        let update = squamish_fall_update();
        assert!(update.relevant_from < update.relevant_until.unwrap());
        assert!(update.created_at <= update.last_confirmed);
    }

    #[test]
    fn test_verification_count_matches_verifiers() {
        let update = squamish_fall_update();
        assert_eq!(update.verification_count as usize, update.verified_by.len());
    }
}
