//! Community records: credibility, peer review, and contributor rewards.

use mtb_wiki::models::{
    Achievement, AchievementKind, ContributorRewards, CredibilityIndicators,
    CredibilityVerification, LocalCredibility, Perk, PerkKind, RecognitionLevel, Review,
    ReviewFeedback, ReviewedContent, Reviewer,
};
use time::macros::datetime;

/// Sarah Chen: verified Squamish local and the visitor guide's author.
pub fn squamish_local_sarah() -> LocalCredibility {
    LocalCredibility {
        user_id: "user_123".into(),
        system_id: "sys_squamish".into(),
        indicators: CredibilityIndicators {
            claimed_local: true,
            verified_local: true,
            years_riding_here: Some(12),
            contributions_count: 47,
            contribution_quality_avg: 91.0,
        },
        expertise_tags: vec![
            "technical_trails".into(),
            "beginner_progression".into(),
            "seasonal_conditions".into(),
        ],
        verified_by: vec![
            CredibilityVerification {
                user_id: "user_admin_1".into(),
                verification_note: "Confirmed local - works at Tantalus Bike Shop".into(),
                date: datetime!(2023-05-20 0:00 UTC),
            },
            CredibilityVerification {
                user_id: "user_456".into(),
                verification_note: "Ride with Sarah regularly, definitely knows her stuff".into(),
                date: datetime!(2023-06-15 0:00 UTC),
            },
        ],
        reputation_score: 95,
        trusted_contributor: true,
    }
}

/// Mike Thompson's credibility for Squamish - three seasons of visits, not a
/// local.
pub fn mike_thompson_credibility() -> LocalCredibility {
    LocalCredibility {
        user_id: "user_789".into(),
        system_id: "sys_squamish".into(),
        indicators: CredibilityIndicators {
            claimed_local: false,
            verified_local: false,
            years_riding_here: Some(3),
            contributions_count: 12,
            contribution_quality_avg: 88.0,
        },
        expertise_tags: vec!["technical_trails".into()],
        verified_by: vec![],
        reputation_score: 75,
        trusted_contributor: false,
    }
}

/// Mike's peer review of the visitor guide.
pub fn squamish_guide_review() -> Review {
    Review {
        id: "review_001".into(),
        content_kind: ReviewedContent::Guide,
        content_id: "guide_squamish_first_timer".into(),
        reviewer: Reviewer {
            user_id: "user_789".into(),
            display_name: "Mike Thompson".into(),
            credibility: Some(mike_thompson_credibility()),
        },
        accuracy_rating: 5,
        completeness_rating: 5,
        clarity_rating: 5,
        feedback: ReviewFeedback {
            what_works: vec![
                "Perfect progression advice - wish I had this my first visit".into(),
                "The gear recommendations are spot on".into(),
                "Love the honesty about trail ratings".into(),
            ],
            needs_improvement: vec![
                "Could mention parking strategies for busy weekends".into(),
            ],
            factual_corrections: vec![],
        },
        personally_verified: true,
        last_ridden_date: Some(datetime!(2024-09-15 0:00 UTC)),
        created_at: datetime!(2024-04-05 0:00 UTC),
    }
}

/// Sarah's contribution record.
pub fn sarah_rewards() -> ContributorRewards {
    ContributorRewards {
        user_id: "user_123".into(),
        total_contributions: 47,
        quality_contributions: 40,
        featured_contributions: 6,
        recognition_level: RecognitionLevel::Expert,
        achievements: vec![
            Achievement {
                kind: AchievementKind::FirstGuide,
                system_id: Some("sys_squamish".into()),
                earned_date: datetime!(2023-04-02 0:00 UTC),
                details: "Published the Diamond Head starter loop guide".into(),
            },
            Achievement {
                kind: AchievementKind::SystemExpert,
                system_id: Some("sys_squamish".into()),
                earned_date: datetime!(2024-05-10 0:00 UTC),
                details: "Forty verified contributions covering the whole network".into(),
            },
        ],
        perks: vec![
            Perk {
                kind: PerkKind::DirectEdit,
                active: true,
            },
            Perk {
                kind: PerkKind::VerifiedBadge,
                active: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_targets_the_visitor_guide() {
        let review = squamish_guide_review();
        assert_eq!(review.content_kind, ReviewedContent::Guide);
        assert_eq!(review.content_id, "guide_squamish_first_timer");
    }

    #[test]
    fn test_trusted_contributor_is_verified() {
        let sarah = squamish_local_sarah();
        assert!(sarah.trusted_contributor);
        assert!(sarah.indicators.verified_local);
        assert!(!sarah.verified_by.is_empty());
    }

    #[test]
    fn test_reward_totals_consistent() {
        let rewards = sarah_rewards();
        assert!(rewards.quality_contributions <= rewards.total_contributions);
        assert!(rewards.featured_contributions <= rewards.quality_contributions);
    }
}
