//! Governance records: moderation, fact checking, quality scoring, and the
//! community content standards.

use mtb_wiki::models::{
    ContentStandards, Evidence, EvidenceKind, FactCheck, FactCheckResult, FactCheckedContent,
    FactChecker, GuideRequirements, ModeratedContent, ModerationItem, ModerationReason,
    ModerationResolution, ModerationStatus, PhotoRequirements, QualityMetrics, QualityTier,
    ResolutionAction, VerificationMethod, VideoRequirements,
};
use time::macros::datetime;

use super::community;

/// The Zen Trail breakdown video passing through new-content moderation.
pub fn zen_video_moderation() -> ModerationItem {
    ModerationItem {
        id: "mod_zen_video".into(),
        content_kind: ModeratedContent::Media,
        content_id: "media_route_breakdown_zen".into(),
        reason: ModerationReason::NewContent,
        status: ModerationStatus::Approved,
        assigned_moderator: Some("user_admin_1".into()),
        moderator_notes: Some("High-quality technique breakdown from a known contributor".into()),
        community_votes: None,
        resolution: Some(ModerationResolution {
            action: ResolutionAction::Approved,
            reason: "Clear, relevant, non-promotional".into(),
            resolved_by: "user_admin_1".into(),
            resolved_at: datetime!(2024-09-11 0:00 UTC),
        }),
        created_at: datetime!(2024-09-10 0:00 UTC),
    }
}

/// Fact check of the guide's central claim about Half Nelson's rating.
pub fn half_nelson_rating_fact_check() -> FactCheck {
    FactCheck {
        id: "factcheck_half_nelson_rating".into(),
        content_kind: FactCheckedContent::Guide,
        content_id: "guide_squamish_first_timer".into(),
        claim: "The infamous Half Nelson is rated blue, but features continuous roots, \
                rocks, tight trees, and steep rolls"
            .into(),
        claim_location: "Understanding Squamish Ratings, paragraph 2".into(),
        checker: FactChecker {
            user_id: "user_789".into(),
            credibility: Some(community::mike_thompson_credibility()),
        },
        verification_method: VerificationMethod::PersonalExperience,
        verification_details: "Rode Half Nelson on three separate trips; the trail is signed \
                               blue and the feature description matches."
            .into(),
        result: FactCheckResult::Verified,
        correct_information: None,
        evidence: Some(Evidence {
            kind: EvidenceKind::Photo,
            details: "Trailhead signage photo showing the blue rating, September 2024".into(),
        }),
        created_at: datetime!(2024-10-02 0:00 UTC),
    }
}

/// Computed quality breakdown for the visitor guide.
pub fn visitor_guide_quality_metrics() -> QualityMetrics {
    QualityMetrics {
        content_id: "guide_squamish_first_timer".into(),
        content_kind: "guide".into(),
        completeness_score: 96.0,
        freshness_score: 90.0,
        media_quality_score: 88.0,
        peer_review_score: 100.0,
        community_votes_score: 97.0,
        fact_check_score: 100.0,
        author_credibility_score: 95.0,
        moderator_boost: Some(2.0),
        total_quality_score: 94.0,
        quality_tier: QualityTier::Featured,
        last_calculated: datetime!(2024-10-01 0:00 UTC),
    }
}

/// The community's minimum bar for published content.
pub fn content_standards() -> ContentStandards {
    ContentStandards {
        guide_requirements: GuideRequirements {
            min_sections: 3,
            required_sections: vec![
                "Overview".into(),
                "Key Trails".into(),
                "Local Tips".into(),
            ],
            min_word_count: 400,
            requires_media: true,
            requires_local_verification: true,
        },
        photo_requirements: PhotoRequirements {
            min_resolution: "1920x1080".into(),
            max_age_years: 2,
            must_show_clear_subject: true,
            requires_caption: true,
        },
        video_requirements: VideoRequirements {
            max_length_minutes: 15,
            must_be_relevant: true,
            no_promotional_content: true,
            requires_context: true,
        },
        auto_approve_threshold: 75.0,
        feature_threshold: 90.0,
        trust_threshold: 25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_item_carries_resolution() {
        let item = zen_video_moderation();
        assert_eq!(item.status, ModerationStatus::Approved);
        let resolution = item.resolution.expect("resolved item");
        assert_eq!(resolution.action, ResolutionAction::Approved);
    }

    #[test]
    fn test_verified_claim_needs_no_correction() {
        let check = half_nelson_rating_fact_check();
        assert_eq!(check.result, FactCheckResult::Verified);
        assert!(check.correct_information.is_none());
    }

    #[test]
    fn test_featured_guide_clears_feature_threshold() {
        let metrics = visitor_guide_quality_metrics();
        let standards = content_standards();
        assert!(metrics.total_quality_score >= standards.feature_threshold);
        assert_eq!(metrics.quality_tier, QualityTier::Featured);
    }
}
