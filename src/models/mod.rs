// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Application, ApplicationStatus, BoundingBox, DiscoveredOpportunity, MatchDetails,
    Opportunity, OpportunityMatch, OpportunityStatus, Organization, VolunteerProfile,
};
pub use requests::{
    ApplyRequest, CreateOpportunityRequest, CreateOrganizationRequest, CreateVolunteerRequest,
    DiscoveryQuery, UpdateOrganizationRequest, UserQuery,
};
pub use responses::{
    ApplicationListResponse, ApplicationView, DiscoveryResponse, ErrorResponse, HealthResponse,
    MatchListResponse,
};
