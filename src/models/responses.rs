use serde::{Deserialize, Serialize};

use crate::core::Pagination;
use crate::models::domain::{Application, DiscoveredOpportunity, OpportunityMatch};

/// Response for the discovery endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub opportunities: Vec<DiscoveredOpportunity>,
    pub pagination: Pagination,
}

/// Response for the personalized ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListResponse {
    pub matches: Vec<OpportunityMatch>,
    pub total_matches: usize,
}

/// A volunteer's application enriched with display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
    #[serde(flatten)]
    pub application: Application,
    pub opportunity_title: String,
    pub organization_name: String,
}

/// Response listing a volunteer's applications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationView>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
