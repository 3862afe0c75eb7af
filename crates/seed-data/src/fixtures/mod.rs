//! Curated example records.
//!
//! Four real destinations (Whistler, Squamish, St. George, Sedona), the
//! routes and trails that define them, and a content layer around the
//! Squamish first-timer guide. Every record uses fixed timestamps so the set
//! is deterministic, and [`FixtureSet::verify`] proves the whole graph is
//! internally consistent before anything touches a database.

pub mod community;
pub mod governance;
pub mod guides;
pub mod media;
pub mod profiles;
pub mod riders;
pub mod routes;
pub mod systems;
pub mod trails;
pub mod updates;

use std::collections::HashSet;

use mtb_wiki::SeedCatalog;
use mtb_wiki::models::{
    ContentStandards, ContributorRewards, DifficultyProfile, FactCheck, FactCheckedContent, Guide,
    LocalCredibility, Media, ModeratedContent, ModerationItem, QualityMetrics,
    RegionalComparison, Review, ReviewedContent, Route, SeasonalUpdate, System, Trail,
    UserPreferenceStyle, UserPreferences,
};
use mtb_wiki::validate::{ValidationError, VerifyReferences, check_bounds};

/// The full curated record graph, grouped per table.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub difficulty_profiles: Vec<DifficultyProfile>,
    pub systems: Vec<System>,
    pub trails: Vec<Trail>,
    pub routes: Vec<Route>,
    pub user_preferences: Vec<UserPreferences>,
    pub user_preference_styles: Vec<UserPreferenceStyle>,
    pub regional_comparisons: Vec<RegionalComparison>,
    pub guides: Vec<Guide>,
    pub media: Vec<Media>,
    pub local_credibility: Vec<LocalCredibility>,
    pub reviews: Vec<Review>,
    pub contributor_rewards: Vec<ContributorRewards>,
    pub moderation_items: Vec<ModerationItem>,
    pub fact_checks: Vec<FactCheck>,
    pub seasonal_updates: Vec<SeasonalUpdate>,
    pub quality_metrics: Vec<QualityMetrics>,
    pub content_standards: ContentStandards,
}

impl FixtureSet {
    /// Assembles every curated record.
    pub fn curated() -> Self {
        Self {
            difficulty_profiles: profiles::all(),
            systems: systems::all(),
            trails: trails::all(),
            routes: routes::all(),
            user_preferences: riders::all(),
            user_preference_styles: riders::style_strengths(),
            regional_comparisons: vec![systems::pnw_vs_southwest_comparison()],
            guides: vec![guides::squamish_visitor_guide()],
            media: media::all(),
            local_credibility: vec![community::squamish_local_sarah()],
            reviews: vec![community::squamish_guide_review()],
            contributor_rewards: vec![community::sarah_rewards()],
            moderation_items: vec![governance::zen_video_moderation()],
            fact_checks: vec![governance::half_nelson_rating_fact_check()],
            seasonal_updates: vec![updates::squamish_fall_update()],
            quality_metrics: vec![governance::visitor_guide_quality_metrics()],
            content_standards: governance::content_standards(),
        }
    }

    /// Verifies the whole set: catalog integrity, scalar bounds, enumeration
    /// foreign keys, and every link between fixture records.
    pub fn verify(&self, catalog: &SeedCatalog) -> Result<(), ValidationError> {
        catalog.validate()?;
        let idx = catalog.index();

        for profile in &self.difficulty_profiles {
            check_bounds(profile)?;
            profile.verify_references(&idx)?;
        }
        for system in &self.systems {
            check_bounds(system)?;
            system.verify_references(&idx)?;
        }
        for trail in &self.trails {
            trail.verify_references(&idx)?;
        }
        for route in &self.routes {
            route.verify_references(&idx)?;
        }
        for prefs in &self.user_preferences {
            check_bounds(prefs)?;
            prefs.verify_references(&idx)?;
        }
        for row in &self.user_preference_styles {
            check_bounds(row)?;
            row.verify_references(&idx)?;
        }
        for comparison in &self.regional_comparisons {
            comparison.verify_references(&idx)?;
        }
        for guide in &self.guides {
            check_bounds(guide)?;
            guide.verify_references(&idx)?;
        }
        for media in &self.media {
            check_bounds(media)?;
        }
        for credibility in &self.local_credibility {
            check_bounds(credibility)?;
        }
        for review in &self.reviews {
            check_bounds(review)?;
        }
        for update in &self.seasonal_updates {
            update.verify_references(&idx)?;
        }

        self.verify_links()
    }

    /// Checks the links between fixture records (the relationships the
    /// relational schema would enforce with entity-table foreign keys).
    fn verify_links(&self) -> Result<(), ValidationError> {
        let profiles = unique_ids("difficulty_profiles", self.difficulty_profiles.iter().map(|p| p.id.as_str()))?;
        let systems = unique_ids("systems", self.systems.iter().map(|s| s.id.as_str()))?;
        let trails = unique_ids("trails", self.trails.iter().map(|t| t.id.as_str()))?;
        let routes = unique_ids("routes", self.routes.iter().map(|r| r.id.as_str()))?;
        let guides = unique_ids("guides", self.guides.iter().map(|g| g.id.as_str()))?;
        let media = unique_ids("media", self.media.iter().map(|m| m.id.as_str()))?;

        for trail in &self.trails {
            require(&systems, "systems", "Trail", "system_id", &trail.system_id)?;
            require(
                &profiles,
                "difficulty_profiles",
                "Trail",
                "difficulty_profile_id",
                &trail.difficulty_profile_id,
            )?;
            require_all(
                &trails,
                "trails",
                "Trail",
                "pairs_well_with_trail_ids",
                &trail.pairs_well_with_trail_ids,
            )?;
        }

        for route in &self.routes {
            require(&systems, "systems", "Route", "system_id", &route.system_id)?;
            require(
                &profiles,
                "difficulty_profiles",
                "Route",
                "difficulty_profile_id",
                &route.difficulty_profile_id,
            )?;
            for (i, step) in route.trail_sequence.iter().enumerate() {
                require(&trails, "trails", "RouteTrail", "trail_id", &step.trail_id)?;
                if step.route_id != route.id {
                    return Err(ValidationError::UnknownReference {
                        entity: "RouteTrail",
                        field: "route_id",
                        table: "routes",
                        id: step.route_id.clone(),
                    });
                }
                // Sequence must be 1..=n in listed order.
                if step.sequence_order != i as i32 + 1 {
                    return Err(ValidationError::NonContiguousOrdering {
                        table: "route_trails",
                        id: step.id.clone(),
                        expected: i as i32 + 1,
                        found: step.sequence_order,
                    });
                }
            }
        }

        for prefs in &self.user_preferences {
            require_all(
                &systems,
                "systems",
                "UserPreferences",
                "favorite_system_ids",
                &prefs.favorite_system_ids,
            )?;
            require(
                &profiles,
                "difficulty_profiles",
                "UserPreferences",
                "preferred_difficulty_profile_id",
                &prefs.preferred_difficulty_profile_id,
            )?;
        }

        let users = unique_ids(
            "user_preferences",
            self.user_preferences.iter().map(|p| p.user_id.as_str()),
        )?;
        for row in &self.user_preference_styles {
            require(&users, "user_preferences", "UserPreferenceStyle", "user_id", &row.user_id)?;
        }

        for guide in &self.guides {
            require(&systems, "systems", "Guide", "system_id", &guide.system_id)?;
            require_all(&routes, "routes", "Guide", "route_ids", &guide.route_ids)?;
            for section in &guide.sections {
                require_all(&media, "media", "Guide", "sections.media_refs", &section.media_refs)?;
            }
        }

        for item in &self.media {
            require(&systems, "systems", "Media", "subject.system_id", &item.subject.system_id)?;
            if let Some(trail_id) = &item.subject.trail_id {
                require(&trails, "trails", "Media", "subject.trail_id", trail_id)?;
            }
            if let Some(route_id) = &item.subject.route_id {
                require(&routes, "routes", "Media", "subject.route_id", route_id)?;
            }
        }

        for credibility in &self.local_credibility {
            require(
                &systems,
                "systems",
                "LocalCredibility",
                "system_id",
                &credibility.system_id,
            )?;
        }

        for review in &self.reviews {
            let (set, table) = match review.content_kind {
                ReviewedContent::Guide => (&guides, "guides"),
                ReviewedContent::Route => (&routes, "routes"),
                ReviewedContent::Media => (&media, "media"),
                ReviewedContent::TrailInfo => (&trails, "trails"),
            };
            require(set, table, "Review", "content_id", &review.content_id)?;
            if let Some(credibility) = &review.reviewer.credibility {
                require(&systems, "systems", "Review", "reviewer.credibility.system_id", &credibility.system_id)?;
            }
        }

        for rewards in &self.contributor_rewards {
            for achievement in &rewards.achievements {
                if let Some(system_id) = &achievement.system_id {
                    require(
                        &systems,
                        "systems",
                        "ContributorRewards",
                        "achievements.system_id",
                        system_id,
                    )?;
                }
            }
        }

        for item in &self.moderation_items {
            let (set, table) = match item.content_kind {
                ModeratedContent::Guide => (&guides, "guides"),
                ModeratedContent::Route => (&routes, "routes"),
                ModeratedContent::Media => (&media, "media"),
                // Edits reference a revision, not a stored record.
                ModeratedContent::Edit => continue,
            };
            require(set, table, "ModerationItem", "content_id", &item.content_id)?;
        }

        for check in &self.fact_checks {
            let (set, table) = match check.content_kind {
                FactCheckedContent::Guide => (&guides, "guides"),
                FactCheckedContent::Route => (&routes, "routes"),
                FactCheckedContent::TrailInfo => (&trails, "trails"),
            };
            require(set, table, "FactCheck", "content_id", &check.content_id)?;
            if let Some(credibility) = &check.checker.credibility {
                require(&systems, "systems", "FactCheck", "checker.credibility.system_id", &credibility.system_id)?;
            }
        }

        for update in &self.seasonal_updates {
            require(&systems, "systems", "SeasonalUpdate", "system_id", &update.system_id)?;
            require_all(&trails, "trails", "SeasonalUpdate", "affects.trail_ids", &update.affects.trail_ids)?;
            require_all(&routes, "routes", "SeasonalUpdate", "affects.route_ids", &update.affects.route_ids)?;
            require_all(&media, "media", "SeasonalUpdate", "media_evidence", &update.media_evidence)?;
        }

        for metrics in &self.quality_metrics {
            let (set, table) = match metrics.content_kind.as_str() {
                "guide" => (&guides, "guides"),
                "media" => (&media, "media"),
                "route" => (&routes, "routes"),
                _ => continue,
            };
            require(set, table, "QualityMetrics", "content_id", &metrics.content_id)?;
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, ValidationError> {
    let mut set = HashSet::new();
    for id in ids {
        if !set.insert(id) {
            return Err(ValidationError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(set)
}

fn require(
    set: &HashSet<&str>,
    table: &'static str,
    entity: &'static str,
    field: &'static str,
    id: &str,
) -> Result<(), ValidationError> {
    if set.contains(id) {
        Ok(())
    } else {
        Err(ValidationError::UnknownReference {
            entity,
            field,
            table,
            id: id.to_string(),
        })
    }
}

fn require_all(
    set: &HashSet<&str>,
    table: &'static str,
    entity: &'static str,
    field: &'static str,
    ids: &[String],
) -> Result<(), ValidationError> {
    for id in ids {
        require(set, table, entity, field, id)?;
    }
    Ok(())
}
