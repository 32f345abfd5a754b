// Service exports
pub mod repository;

pub use repository::{
    InMemoryStore, NewOpportunity, NewOrganization, NewVolunteer, OrganizationUpdate,
    Repository, RepositoryError,
};
