//! Media records: the videos and photos the guides and updates reference.

use mtb_wiki::models::{
    Attribution, Media, MediaKind, MediaSubject, QualityIndicators, SubjectKind, VoteTally,
};
use time::macros::datetime;

pub fn all() -> Vec<Media> {
    vec![
        half_nelson_reality_check(),
        typical_squamish_roots(),
        progression_map(),
        wet_conditions_2024(),
        route_breakdown_video(),
    ]
}

/// The video every visitor should watch before trusting a Squamish "blue".
pub fn half_nelson_reality_check() -> Media {
    Media {
        id: "media_half_nelson_reality_check".into(),
        kind: MediaKind::Video,
        subject: MediaSubject {
            kind: SubjectKind::TrailFeature,
            system_id: "sys_squamish".into(),
            trail_id: Some("trail_half_nelson".into()),
            route_id: None,
            specific_location: Some("The root lattice section at approximately 1km".into()),
        },
        url: "https://youtube.com/watch?v=example123".into(),
        thumbnail_url: Some("https://img.youtube.com/vi/example123/maxresdefault.jpg".into()),
        title: "Half Nelson's \"Blue\" Rating in Action".into(),
        caption: "This is what a Squamish blue trail actually looks like. Note the \
                  continuous technical features with no rest."
            .into(),
        showcase_notes: Some(
            "Pause at 0:45 to see the least obvious line through the roots - stay left then \
             cut right after the stump"
                .into(),
        ),
        conditions_when_taken: Some("Typical summer conditions - dry but roots still slick".into()),
        quality_indicators: QualityIndicators {
            resolution_ok: true,
            well_lit: true,
            shows_intended_subject: true,
            recent: true,
        },
        contributor: Attribution {
            user_id: "user_123".into(),
            display_name: "Sarah Chen".into(),
        },
        curation_score: 92,
        featured: true,
        votes: VoteTally {
            helpful: 234,
            not_helpful: 3,
        },
        created_at: datetime!(2024-07-20 0:00 UTC),
    }
}

pub fn typical_squamish_roots() -> Media {
    Media {
        id: "media_typical_squamish_roots".into(),
        kind: MediaKind::Photo,
        subject: MediaSubject {
            kind: SubjectKind::TrailFeature,
            system_id: "sys_squamish".into(),
            trail_id: Some("trail_half_nelson".into()),
            route_id: None,
            specific_location: None,
        },
        url: "https://images.mtbwiki.example/squamish/root-lattice.jpg".into(),
        thumbnail_url: None,
        title: "A typical Squamish root lattice".into(),
        caption: "This is \"smooth\" by local standards. Sharp rocks hide under the ferns."
            .into(),
        showcase_notes: None,
        conditions_when_taken: Some("Dry conditions, August".into()),
        quality_indicators: QualityIndicators {
            resolution_ok: true,
            well_lit: false,
            shows_intended_subject: true,
            recent: true,
        },
        contributor: Attribution {
            user_id: "user_123".into(),
            display_name: "Sarah Chen".into(),
        },
        curation_score: 78,
        featured: false,
        votes: VoteTally {
            helpful: 41,
            not_helpful: 2,
        },
        created_at: datetime!(2024-06-18 0:00 UTC),
    }
}

pub fn progression_map() -> Media {
    Media {
        id: "media_progression_map".into(),
        kind: MediaKind::Photo,
        subject: MediaSubject {
            kind: SubjectKind::Overview,
            system_id: "sys_squamish".into(),
            trail_id: None,
            route_id: None,
            specific_location: None,
        },
        url: "https://images.mtbwiki.example/squamish/first-week-progression.png".into(),
        thumbnail_url: None,
        title: "Suggested first-week progression".into(),
        caption: "Annotated map of the Diamond Head starter zone through to the classics."
            .into(),
        showcase_notes: None,
        conditions_when_taken: None,
        quality_indicators: QualityIndicators {
            resolution_ok: true,
            well_lit: true,
            shows_intended_subject: true,
            recent: true,
        },
        contributor: Attribution {
            user_id: "user_123".into(),
            display_name: "Sarah Chen".into(),
        },
        curation_score: 85,
        featured: false,
        votes: VoteTally {
            helpful: 112,
            not_helpful: 5,
        },
        created_at: datetime!(2024-03-20 0:00 UTC),
    }
}

/// Evidence photo attached to the fall conditions update.
pub fn wet_conditions_2024() -> Media {
    Media {
        id: "media_wet_conditions_2024".into(),
        kind: MediaKind::Photo,
        subject: MediaSubject {
            kind: SubjectKind::Conditions,
            system_id: "sys_squamish".into(),
            trail_id: Some("trail_credit_line".into()),
            route_id: None,
            specific_location: Some("Lower third, below the second bridge".into()),
        },
        url: "https://images.mtbwiki.example/squamish/wet-october-2024.jpg".into(),
        thumbnail_url: None,
        title: "Standing water on Credit Line, mid-October".into(),
        caption: "If you're leaving ruts like these, it's too wet to ride.".into(),
        showcase_notes: None,
        conditions_when_taken: Some("After three days of steady rain".into()),
        quality_indicators: QualityIndicators {
            resolution_ok: true,
            well_lit: false,
            shows_intended_subject: true,
            recent: true,
        },
        contributor: Attribution {
            user_id: "user_456".into(),
            display_name: "Dana Kowalski".into(),
        },
        curation_score: 70,
        featured: false,
        votes: VoteTally {
            helpful: 19,
            not_helpful: 0,
        },
        created_at: datetime!(2024-10-16 0:00 UTC),
    }
}

pub fn route_breakdown_video() -> Media {
    Media {
        id: "media_route_breakdown_zen".into(),
        kind: MediaKind::Video,
        subject: MediaSubject {
            kind: SubjectKind::TechniqueDemo,
            system_id: "sys_stgeorge".into(),
            trail_id: None,
            route_id: Some("route_zen_experience".into()),
            specific_location: Some("Multiple crux moves throughout".into()),
        },
        url: "https://youtube.com/watch?v=zentrail456".into(),
        thumbnail_url: Some("https://img.youtube.com/vi/zentrail456/maxresdefault.jpg".into()),
        title: "Zen Trail Line Choice Breakdown - How to Clean the Crux Moves".into(),
        caption: "Local rider breaks down the key moves that make Zen Trail rideable. \
                  Game-changing beta for technical climbing."
            .into(),
        showcase_notes: Some(
            "Pay attention to wheel placement at 2:30, 4:15, and 7:45 - these are the moves \
             most people miss"
                .into(),
        ),
        conditions_when_taken: Some("Perfect conditions - bone dry after 5 days without rain".into()),
        quality_indicators: QualityIndicators {
            resolution_ok: true,
            well_lit: true,
            shows_intended_subject: true,
            recent: true,
        },
        contributor: Attribution {
            user_id: "user_999".into(),
            display_name: "Jordan Martinez".into(),
        },
        curation_score: 96,
        featured: true,
        votes: VoteTally {
            helpful: 567,
            not_helpful: 12,
        },
        created_at: datetime!(2024-09-10 0:00 UTC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_media_passes_quality_checklist() {
        for media in all().into_iter().filter(|m| m.featured) {
            let q = media.quality_indicators;
            assert!(q.resolution_ok && q.shows_intended_subject, "{}", media.id);
        }
    }

    #[test]
    fn test_videos_carry_thumbnails() {
        for media in all() {
            if media.kind == MediaKind::Video {
                assert!(media.thumbnail_url.is_some(), "{}", media.id);
            }
        }
    }
}
