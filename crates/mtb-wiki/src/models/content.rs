//! User-generated-content layer: guides, media, peer review, credibility,
//! moderation, fact checking, and seasonal advisories.
//!
//! These records sit on top of the core entities. Claims about trails age
//! badly, so everything here carries authorship, verification state, and a
//! last-confirmed timestamp.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

/// Minimal authorship stamp shared by guides and media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub user_id: String,
    pub display_name: String,
}

/// Publication state of a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "editorial_status", rename_all = "snake_case")]
pub enum EditorialStatus {
    Draft,
    PendingReview,
    Published,
    Featured,
}

/// One section of a structured guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSection {
    pub heading: String,
    /// Markdown.
    pub content: String,
    /// -> Media
    pub media_refs: Vec<String>,
}

/// Wikipedia-style revision record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideRevision {
    pub version: i32,
    pub edited_by: String,
    pub edit_summary: String,
    pub timestamp: OffsetDateTime,
}

/// In-depth written content from experienced locals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Guide {
    pub id: String,
    /// -> ContentType
    pub content_type_id: String,
    /// -> System
    pub system_id: String,
    /// -> Route
    pub route_ids: Vec<String>,

    pub title: String,
    pub summary: String,

    pub sections: Vec<GuideSection>,

    /// Pulled out for easy scanning.
    pub key_points: Vec<String>,
    /// -> SkillLevel; `None` means the guide suits all levels.
    pub target_skill_level_id: Option<String>,

    pub author: Attribution,

    #[validate(range(min = 0, max = 100))]
    pub quality_score: i16,
    pub editorial_status: EditorialStatus,

    pub version_history: Vec<GuideRevision>,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    /// When the content was last confirmed accurate.
    pub last_verified: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "media_kind", rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
}

/// What a piece of media shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "media_subject_kind", rename_all = "snake_case")]
pub enum SubjectKind {
    TrailFeature,
    Viewpoint,
    TechniqueDemo,
    Conditions,
    Overview,
}

/// Where a piece of media was shot and what it depicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSubject {
    pub kind: SubjectKind,
    /// -> System
    pub system_id: String,
    /// -> Trail
    pub trail_id: Option<String>,
    /// -> Route
    pub route_id: Option<String>,
    /// "Rock garden at km 3.2"
    pub specific_location: Option<String>,
}

/// Objective quality checklist for media curation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIndicators {
    pub resolution_ok: bool,
    pub well_lit: bool,
    pub shows_intended_subject: bool,
    /// Taken within the last two years.
    pub recent: bool,
}

/// Helpful / not-helpful community vote counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VoteTally {
    pub helpful: i32,
    pub not_helpful: i32,
}

/// Photo or video with the context that makes it useful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Media {
    pub id: String,
    pub kind: MediaKind,

    pub subject: MediaSubject,

    /// Hosted image URL, or the YouTube URL for videos.
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub title: String,
    pub caption: String,

    /// "Shows the correct line through the crux".
    pub showcase_notes: Option<String>,
    /// "Dry conditions, October".
    pub conditions_when_taken: Option<String>,

    pub quality_indicators: QualityIndicators,

    pub contributor: Attribution,

    #[validate(range(min = 0, max = 100))]
    pub curation_score: i16,
    /// Hand-picked by moderators.
    pub featured: bool,
    pub votes: VoteTally,

    pub created_at: OffsetDateTime,
}

/// Raw signals behind a credibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityIndicators {
    /// Self-identified as local.
    pub claimed_local: bool,
    /// Confirmed by other locals or moderators.
    pub verified_local: bool,
    pub years_riding_here: Option<i32>,
    /// Guides, routes, and updates contributed for this system.
    pub contributions_count: i32,
    pub contribution_quality_avg: f64,
}

/// One endorsement backing a credibility claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityVerification {
    pub user_id: String,
    pub verification_note: String,
    pub date: OffsetDateTime,
}

/// How much to trust a contributor's claims about one system.
///
/// Credibility is per-system: twelve seasons in Squamish says nothing about
/// Sedona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocalCredibility {
    pub user_id: String,
    /// -> System
    pub system_id: String,

    pub indicators: CredibilityIndicators,

    pub expertise_tags: Vec<String>,

    pub verified_by: Vec<CredibilityVerification>,

    #[validate(range(min = 0, max = 100))]
    pub reputation_score: i16,
    /// Trusted contributors may edit without review.
    pub trusted_contributor: bool,
}

/// What kind of content a review targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "reviewed_content", rename_all = "snake_case")]
pub enum ReviewedContent {
    Guide,
    Route,
    Media,
    TrailInfo,
}

/// Reviewer identity, with their credibility for the relevant system when
/// known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reviewer {
    pub user_id: String,
    pub display_name: String,
    pub credibility: Option<LocalCredibility>,
}

/// Structured review feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewFeedback {
    pub what_works: Vec<String>,
    pub needs_improvement: Vec<String>,
    pub factual_corrections: Vec<String>,
}

/// Peer review of a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Review {
    pub id: String,
    pub content_kind: ReviewedContent,
    pub content_id: String,

    pub reviewer: Reviewer,

    #[validate(range(min = 1, max = 5))]
    pub accuracy_rating: i16,
    #[validate(range(min = 1, max = 5))]
    pub completeness_rating: i16,
    #[validate(range(min = 1, max = 5))]
    pub clarity_rating: i16,

    pub feedback: ReviewFeedback,

    /// "I've ridden this and can confirm."
    pub personally_verified: bool,
    pub last_ridden_date: Option<OffsetDateTime>,

    pub created_at: OffsetDateTime,
}

/// Contributor recognition tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "recognition_level", rename_all = "snake_case")]
pub enum RecognitionLevel {
    Contributor,
    TrustedContributor,
    Expert,
    Ambassador,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    FirstGuide,
    SystemExpert,
    VideoCreator,
    FactChecker,
    TrailPhotographer,
}

/// A specific earned achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    /// -> System, for system-scoped achievements.
    pub system_id: Option<String>,
    pub earned_date: OffsetDateTime,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerkKind {
    EarlyAccess,
    DirectEdit,
    ModeratorTools,
    VerifiedBadge,
}

/// A perk a contributor has unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub kind: PerkKind,
    pub active: bool,
}

/// Running contribution totals and recognition for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorRewards {
    pub user_id: String,

    pub total_contributions: i32,
    /// Contributions above the quality threshold.
    pub quality_contributions: i32,
    pub featured_contributions: i32,

    pub recognition_level: RecognitionLevel,

    pub achievements: Vec<Achievement>,
    pub perks: Vec<Perk>,
}

/// What kind of content sits in the moderation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "moderated_content", rename_all = "snake_case")]
pub enum ModeratedContent {
    Guide,
    Route,
    Media,
    Edit,
}

/// Why an item entered moderation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "moderation_reason", rename_all = "snake_case")]
pub enum ModerationReason {
    NewContent,
    Flagged,
    MajorEdit,
    Dispute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "moderation_status", rename_all = "snake_case")]
pub enum ModerationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    NeedsRevision,
}

/// Community votes on a moderation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommunityVotes {
    pub approve: i32,
    pub reject: i32,
    pub needs_work: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionAction {
    Approved,
    Rejected,
    Revised,
}

/// Final outcome of a moderation item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResolution {
    pub action: ResolutionAction,
    pub reason: String,
    pub resolved_by: String,
    pub resolved_at: OffsetDateTime,
}

/// One entry in the moderation queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationItem {
    pub id: String,
    pub content_kind: ModeratedContent,
    pub content_id: String,

    pub reason: ModerationReason,
    pub status: ModerationStatus,

    pub assigned_moderator: Option<String>,
    pub moderator_notes: Option<String>,
    pub community_votes: Option<CommunityVotes>,

    pub resolution: Option<ModerationResolution>,

    pub created_at: OffsetDateTime,
}

/// What kind of content a fact check targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "fact_checked_content", rename_all = "snake_case")]
pub enum FactCheckedContent {
    Guide,
    Route,
    TrailInfo,
}

/// How a claim was verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "verification_method", rename_all = "snake_case")]
pub enum VerificationMethod {
    PersonalExperience,
    LocalKnowledge,
    OfficialSource,
    CommunityConsensus,
}

/// Outcome of a fact check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "fact_check_result", rename_all = "snake_case")]
pub enum FactCheckResult {
    Verified,
    Incorrect,
    PartiallyCorrect,
    Outdated,
    CannotVerify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Photo,
    OfficialLink,
    PersonalTestimony,
}

/// Evidence backing a fact-check verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub kind: EvidenceKind,
    pub details: String,
}

/// Who performed a fact check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactChecker {
    pub user_id: String,
    pub credibility: Option<LocalCredibility>,
}

/// Verification record for one specific claim inside a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheck {
    pub id: String,
    pub content_kind: FactCheckedContent,
    pub content_id: String,

    /// The claim being verified, quoted.
    pub claim: String,
    /// Where in the content the claim appears.
    pub claim_location: String,

    pub checker: FactChecker,

    pub verification_method: VerificationMethod,
    pub verification_details: String,

    pub result: FactCheckResult,
    /// Supplied when the claim is incorrect or outdated.
    pub correct_information: Option<String>,

    pub evidence: Option<Evidence>,

    pub created_at: OffsetDateTime,
}

/// Which trails, routes, and general areas an update touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateImpact {
    /// -> Trail
    pub trail_ids: Vec<String>,
    /// -> Route
    pub route_ids: Vec<String>,
    /// Free-text areas like "North Shore trails".
    pub areas: Vec<String>,
}

/// Time-bounded advisory: conditions, closures, events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalUpdate {
    pub id: String,
    /// -> System
    pub system_id: String,

    /// -> UpdateType
    pub update_type_id: String,
    /// -> Severity
    pub severity_id: String,

    pub title: String,
    pub summary: String,
    /// Markdown.
    pub detailed_update: String,

    pub relevant_from: OffsetDateTime,
    pub relevant_until: Option<OffsetDateTime>,

    pub affects: UpdateImpact,

    pub reported_by: String,
    /// Multiple confirmations increase trust.
    pub verified_by: Vec<String>,
    pub verification_count: i32,

    /// -> Media
    pub media_evidence: Vec<String>,

    pub created_at: OffsetDateTime,
    pub last_confirmed: OffsetDateTime,
}

/// Quality tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "quality_tier", rename_all = "snake_case")]
pub enum QualityTier {
    NeedsWork,
    Good,
    Excellent,
    Featured,
}

/// Computed quality breakdown for one piece of content.
///
/// All sub-scores are 0..=100; the total is a weighted combination computed
/// by the consuming application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub content_id: String,
    pub content_kind: String,

    pub completeness_score: f64,
    pub freshness_score: f64,
    pub media_quality_score: f64,

    pub peer_review_score: f64,
    pub community_votes_score: f64,
    pub fact_check_score: f64,

    pub author_credibility_score: f64,
    pub moderator_boost: Option<f64>,

    pub total_quality_score: f64,
    pub quality_tier: QualityTier,

    pub last_calculated: OffsetDateTime,
}

/// Minimum requirements for guides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideRequirements {
    pub min_sections: i32,
    pub required_sections: Vec<String>,
    pub min_word_count: i32,
    pub requires_media: bool,
    pub requires_local_verification: bool,
}

/// Minimum requirements for photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRequirements {
    /// "1920x1080"
    pub min_resolution: String,
    /// Older photos need re-verification.
    pub max_age_years: i32,
    pub must_show_clear_subject: bool,
    pub requires_caption: bool,
}

/// Minimum requirements for videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRequirements {
    pub max_length_minutes: i32,
    pub must_be_relevant: bool,
    pub no_promotional_content: bool,
    pub requires_context: bool,
}

/// Community content standards and quality thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStandards {
    pub guide_requirements: GuideRequirements,
    pub photo_requirements: PhotoRequirements,
    pub video_requirements: VideoRequirements,

    /// Quality score for automatic approval.
    pub auto_approve_threshold: f64,
    /// Quality score for featuring.
    pub feature_threshold: f64,
    /// Contributions needed for trusted status.
    pub trust_threshold: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&EditorialStatus::PendingReview).unwrap(),
            "\"pending_review\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewedContent::TrailInfo).unwrap(),
            "\"trail_info\""
        );
        assert_eq!(
            serde_json::to_string(&FactCheckResult::PartiallyCorrect).unwrap(),
            "\"partially_correct\""
        );
        assert_eq!(
            serde_json::to_string(&VerificationMethod::CommunityConsensus).unwrap(),
            "\"community_consensus\""
        );
    }

    #[test]
    fn test_review_ratings_bounded() {
        let mut review = Review {
            id: "review_test".to_string(),
            content_kind: ReviewedContent::Guide,
            content_id: "guide_test".to_string(),
            reviewer: Reviewer {
                user_id: "user_1".to_string(),
                display_name: "Test Reviewer".to_string(),
                credibility: None,
            },
            accuracy_rating: 4,
            completeness_rating: 5,
            clarity_rating: 3,
            feedback: ReviewFeedback {
                what_works: vec![],
                needs_improvement: vec![],
                factual_corrections: vec![],
            },
            personally_verified: false,
            last_ridden_date: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        assert!(review.validate().is_ok());

        review.accuracy_rating = 0;
        assert!(review.validate().is_err());
        review.accuracy_rating = 6;
        assert!(review.validate().is_err());
    }
}
