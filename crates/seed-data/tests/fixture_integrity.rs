//! Structural integrity tests for the curated fixture set.
//!
//! These run without a database: they prove the fixture graph is closed over
//! the builtin catalog, that the published cross-record ids line up, and that
//! records survive a JSON round trip unchanged.

use mtb_wiki::SeedCatalog;
use mtb_wiki::models::{Guide, System};
use mtb_wiki::validate::ValidationError;
use seed_data::fixtures::{FixtureSet, community, guides, systems};

#[test]
fn curated_fixtures_verify_against_builtin_catalog() {
    let catalog = SeedCatalog::builtin();
    let fixtures = FixtureSet::curated();
    fixtures.verify(&catalog).expect("fixture set should verify");
}

#[test]
fn guide_author_is_the_credited_local() {
    let guide = guides::squamish_visitor_guide();
    let sarah = community::squamish_local_sarah();

    assert_eq!(guide.author.user_id, "user_123");
    assert_eq!(guide.author.user_id, sarah.user_id);
    assert_eq!(guide.system_id, sarah.system_id);
}

#[test]
fn review_targets_the_published_guide() {
    let review = community::squamish_guide_review();
    let guide = guides::squamish_visitor_guide();

    assert_eq!(guide.id, "guide_squamish_first_timer");
    assert_eq!(review.content_id, guide.id);
}

#[test]
fn whistler_system_round_trips_through_json() {
    let system = systems::whistler_system();
    let json = serde_json::to_string(&system).expect("serialize");
    let back: System = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, system);
}

#[test]
fn visitor_guide_round_trips_through_json() {
    let guide = guides::squamish_visitor_guide();
    let json = serde_json::to_string(&guide).expect("serialize");
    let back: Guide = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, guide);
}

#[test]
fn builtin_catalog_round_trips_through_json() {
    let catalog = SeedCatalog::builtin();
    let json = serde_json::to_string(&catalog).expect("serialize");
    let back: SeedCatalog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, catalog);
}

#[test]
fn broken_enumeration_reference_is_caught() {
    let catalog = SeedCatalog::builtin();
    let mut fixtures = FixtureSet::curated();
    fixtures.systems[0].region_id = "atlantis".to_string();

    match fixtures.verify(&catalog) {
        Err(ValidationError::UnknownReference { table, id, .. }) => {
            assert_eq!(table, "regions");
            assert_eq!(id, "atlantis");
        }
        other => panic!("expected unknown reference, got {other:?}"),
    }
}

#[test]
fn broken_entity_link_is_caught() {
    let catalog = SeedCatalog::builtin();
    let mut fixtures = FixtureSet::curated();
    fixtures.seasonal_updates[0]
        .affects
        .trail_ids
        .push("trail_does_not_exist".to_string());

    match fixtures.verify(&catalog) {
        Err(ValidationError::UnknownReference { table, id, .. }) => {
            assert_eq!(table, "trails");
            assert_eq!(id, "trail_does_not_exist");
        }
        other => panic!("expected unknown reference, got {other:?}"),
    }
}

#[test]
fn duplicate_fixture_id_is_caught() {
    let catalog = SeedCatalog::builtin();
    let mut fixtures = FixtureSet::curated();
    let dup = fixtures.trails[0].clone();
    fixtures.trails.push(dup);

    match fixtures.verify(&catalog) {
        Err(ValidationError::DuplicateId { table, .. }) => assert_eq!(table, "trails"),
        other => panic!("expected duplicate id, got {other:?}"),
    }
}

#[test]
fn out_of_bounds_score_is_caught() {
    let catalog = SeedCatalog::builtin();
    let mut fixtures = FixtureSet::curated();
    fixtures.difficulty_profiles[0].flow_features = 7;

    assert!(matches!(
        fixtures.verify(&catalog),
        Err(ValidationError::Bounds(_))
    ));
}

#[test]
fn every_route_trail_resolves_within_fixture_set() {
    let fixtures = FixtureSet::curated();
    let trail_ids: Vec<&str> = fixtures.trails.iter().map(|t| t.id.as_str()).collect();

    for route in &fixtures.routes {
        assert!(!route.trail_sequence.is_empty(), "{} has no trails", route.id);
        for step in &route.trail_sequence {
            assert!(
                trail_ids.contains(&step.trail_id.as_str()),
                "{} step {} references unknown trail {}",
                route.id,
                step.sequence_order,
                step.trail_id
            );
        }
    }
}

#[test]
fn guide_media_references_resolve() {
    let fixtures = FixtureSet::curated();
    let media_ids: Vec<&str> = fixtures.media.iter().map(|m| m.id.as_str()).collect();

    for guide in &fixtures.guides {
        for section in &guide.sections {
            for media_ref in &section.media_refs {
                assert!(
                    media_ids.contains(&media_ref.as_str()),
                    "{} references unknown media {}",
                    guide.id,
                    media_ref
                );
            }
        }
    }
}
