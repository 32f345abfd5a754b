//! Causa Match - matching and discovery engine for the Conecta Causa
//! volunteer platform.
//!
//! The core is a set of pure functions that score volunteers against
//! opportunities (skill overlap + geodistance + availability), filter
//! and paginate the opportunity collection, and produce per-volunteer
//! ranked match lists. Storage and HTTP layers are thin collaborators
//! around that engine.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_match_score, discover_opportunities, haversine_distance, paginate,
    rank_opportunities, DiscoveryFilters, GeoFilter, MatchScore, Page, Pagination,
};
pub use crate::models::{
    DiscoveredOpportunity, Opportunity, OpportunityMatch, OpportunityStatus, Organization,
    VolunteerProfile,
};
pub use crate::services::{InMemoryStore, Repository};
