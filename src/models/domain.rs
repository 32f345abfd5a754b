use serde::{Deserialize, Serialize};

/// Volunteer profile used as scoring input.
///
/// Latitude/longitude default to 0.0 for profiles that never set a
/// location, mirroring the platform's registration defaults. Scoring
/// treats those as real coordinates and simply yields a large distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerProfile {
    pub id: u64,
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

/// Organization that publishes opportunities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub user_id: u64,
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

/// Lifecycle status of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityStatus {
    Active,
    Closed,
}

/// A published, time-bound volunteering offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u64,
    pub organization_id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default = "default_vacancies")]
    pub vacancies: u32,
    pub status: OpportunityStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Opportunity {
    /// Whether the opportunity is open for discovery and matching
    pub fn is_active(&self) -> bool {
        self.status == OpportunityStatus::Active
    }
}

fn default_vacancies() -> u32 {
    1
}

/// Status of a volunteer's application to an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A volunteer's application to an opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: u64,
    pub opportunity_id: u64,
    pub volunteer_id: u64,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub message: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// Sub-scores of a (volunteer, opportunity) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetails {
    pub skill_compatibility: u8,
    pub distance_km: f64,
    pub common_skills: Vec<String>,
}

/// Ranked match produced for one volunteer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityMatch {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub match_score: u8,
    pub match_details: MatchDetails,
    pub organization: String,
    pub location: String,
    pub vacancies: u32,
}

/// Opportunity view returned by discovery, enriched with the organization
/// name and, when a geo filter was applied, the distance from the query origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredOpportunity {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub organization_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}
