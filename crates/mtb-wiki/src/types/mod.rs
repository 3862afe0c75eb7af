//! Wire types consumed by a discovery front end.
//!
//! The matching engine itself lives in the consuming application; these are
//! the request and response shapes it exchanges.

pub mod queries;
pub mod responses;

pub use queries::{
    DiscoveryPreferences, DiscoveryRequest, GroupType, LocationFilter, NearFilter,
};
pub use responses::{DiscoveryResult, SuggestedRoute, TripPlanning};
