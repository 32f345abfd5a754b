use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::{DiscoveryFilters, GeoFilter};

/// Query parameters for opportunity discovery.
///
/// Numeric parameters arrive as raw strings so malformed values can be
/// treated as absent (filter skipped) instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryQuery {
    /// Comma-separated skill labels
    pub skills: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl DiscoveryQuery {
    /// Normalize the raw query into engine filters.
    pub fn filters(&self) -> DiscoveryFilters {
        let skills = self.skills.as_deref().map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let geo = match (parse_f64(&self.latitude), parse_f64(&self.longitude)) {
            (Some(lat), Some(lon)) => Some(GeoFilter::new(lat, lon, parse_f64(&self.radius))),
            _ => None,
        };

        DiscoveryFilters { skills, geo }
    }

    pub fn page(&self) -> Option<i64> {
        parse_i64(&self.page)
    }

    pub fn limit(&self) -> Option<i64> {
        parse_i64(&self.limit)
    }
}

fn parse_f64(raw: &Option<String>) -> Option<f64> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

fn parse_i64(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

/// Query identifying the requesting volunteer's user
#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    pub user_id: u64,
}

/// Request to publish an opportunity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOpportunityRequest {
    pub organization_id: u64,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub vacancies: Option<u32>,
}

/// Request to create a volunteer profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVolunteerRequest {
    pub user_id: u64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub phone: String,
}

/// Request to create an organization profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    pub user_id: u64,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Enumerated organization update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrganizationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Request body for applying to an opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub user_id: u64,
    #[serde(default)]
    pub message: String,
}
