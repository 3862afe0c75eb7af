//! Response types for trail-system discovery.

use serde::Serialize;

use crate::models::{Route, System};

/// One route recommendation inside a discovery result.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedRoute {
    pub route: Route,
    pub why_suggested: String,
    /// Which day of the trip to ride it.
    pub day_recommendation: Option<i32>,
}

/// Practical trip advice attached to a match.
#[derive(Debug, Clone, Serialize)]
pub struct TripPlanning {
    pub recommended_days: i32,
    pub best_base_location: Option<String>,
    pub key_logistics: Vec<String>,
}

/// A matched system with the reasoning behind the match.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResult {
    pub system: System,
    /// 0..=100.
    pub match_score: f64,

    pub match_reasons: Vec<String>,
    pub potential_concerns: Vec<String>,

    pub suggested_routes: Vec<SuggestedRoute>,

    pub trip_planning: TripPlanning,

    pub local_advice: String,
    pub timing_notes: Option<String>,
}
