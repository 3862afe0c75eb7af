//! Domain models for the knowledge base.
//!
//! Split by concern:
//! - [`enumerations`]: closed-vocabulary rows that everything else references
//!   by slug id
//! - [`entities`]: systems, routes, trails, difficulty profiles, and rider
//!   preference records
//! - [`content`]: the user-generated-content layer (guides, media, reviews,
//!   credibility, moderation)

pub mod content;
pub mod entities;
pub mod enumerations;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use content::{
    Achievement, AchievementKind, Attribution, CommunityVotes, ContentStandards,
    ContributorRewards, CredibilityIndicators, CredibilityVerification, EditorialStatus, Evidence,
    EvidenceKind, FactCheck, FactCheckResult, FactCheckedContent, FactChecker, Guide,
    GuideRequirements, GuideRevision, GuideSection, LocalCredibility, Media, MediaKind,
    MediaSubject, ModeratedContent, ModerationItem, ModerationReason, ModerationResolution,
    ModerationStatus, Perk, PerkKind, PhotoRequirements, QualityIndicators, QualityMetrics,
    QualityTier, RecognitionLevel, ResolutionAction, Review, ReviewFeedback, ReviewedContent,
    Reviewer, SeasonalUpdate, SubjectKind, UpdateImpact, VerificationMethod, VideoRequirements,
    VoteTally,
};
pub use entities::{
    Affinity, ClimbingStyle, DifficultyProfile, ExternalLinks, GroupDynamic, KeyDifference,
    RegionalComparison, Route, RouteCondition, RouteRidingStyle, RouteSkillLevel, RouteTrail,
    SkillFit, StylePreferences, System, SystemCharacterTag, SystemMonth, SystemRidingStyle,
    SystemSkillLevel, SystemTagRole, Trail, TrailPairing, TranslationRow, TripStyle,
    UserPreferenceStyle, UserPreferences,
};
pub use enumerations::{
    CharacterTag, ClimateType, Condition, ConditionCategory, ContentType, Country,
    DifficultyRating, FitnessLevel, Month, Region, RegionalCalibration, RidingStyle, RouteType,
    Season, Severity, SkillLevel, StateProvince, SystemSize, TagCategory, TrailDirection,
    UpdateCategory, UpdateType,
};

/// Closed integer interval, used for trail counts, day counts, and distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// WGS84 coordinates of a system's trailhead or center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_geo_point_bounds() {
        assert!(GeoPoint::new(49.7016, -123.1558).validate().is_ok());
        assert!(GeoPoint::new(91.0, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -181.0).validate().is_err());
    }
}
