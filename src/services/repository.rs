use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use thiserror::Error;

use crate::models::{
    Application, ApplicationStatus, Opportunity, OpportunityStatus, Organization,
    VolunteerProfile,
};

/// Errors raised at the repository boundary.
///
/// The matching engine itself is total and never produces these; they
/// surface when a caller references an entity that does not exist or
/// repeats a one-shot action.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),
}

/// Fields accepted when publishing an opportunity.
///
/// Latitude/longitude fall back to the organization's coordinates when
/// not provided.
#[derive(Debug, Clone)]
pub struct NewOpportunity {
    pub organization_id: u64,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub vacancies: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct NewVolunteer {
    pub user_id: u64,
    pub skills: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub bio: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub user_id: u64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    pub website: Option<String>,
}

/// Enumerated update for an organization profile. Only the listed fields
/// can change; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Storage boundary consumed by the HTTP layer.
///
/// Read methods return owned snapshots; the engine operates on those by
/// value and never touches live storage.
pub trait Repository: Send + Sync {
    fn active_opportunities(&self) -> Vec<Opportunity>;
    fn opportunity(&self, id: u64) -> Option<Opportunity>;
    fn insert_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, RepositoryError>;

    fn volunteer_by_user(&self, user_id: u64) -> Option<VolunteerProfile>;
    fn insert_volunteer(&self, new: NewVolunteer) -> VolunteerProfile;

    fn organization(&self, id: u64) -> Option<Organization>;
    fn organization_name(&self, id: u64) -> Option<String>;
    fn insert_organization(&self, new: NewOrganization) -> Organization;
    fn update_organization(
        &self,
        id: u64,
        update: OrganizationUpdate,
    ) -> Result<Organization, RepositoryError>;
    fn opportunity_count(&self, organization_id: u64) -> usize;

    fn insert_application(
        &self,
        opportunity_id: u64,
        volunteer_id: u64,
        message: String,
    ) -> Result<Application, RepositoryError>;
    fn applications_by_volunteer(&self, volunteer_id: u64) -> Vec<Application>;
}

/// In-memory store backing the service.
///
/// Entity vectors behind `RwLock`s with atomic id counters, standing in
/// for a real database. Reads clone the current state so callers get
/// immutable snapshots.
#[derive(Default)]
pub struct InMemoryStore {
    opportunities: RwLock<Vec<Opportunity>>,
    volunteers: RwLock<Vec<VolunteerProfile>>,
    organizations: RwLock<Vec<Organization>>,
    applications: RwLock<Vec<Application>>,
    next_opportunity_id: AtomicU64,
    next_volunteer_id: AtomicU64,
    next_organization_id: AtomicU64,
    next_application_id: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(counter: &AtomicU64) -> u64 {
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn read<T>(lock: &RwLock<Vec<T>>) -> RwLockReadGuard<'_, Vec<T>> {
        lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write<T>(lock: &RwLock<Vec<T>>) -> RwLockWriteGuard<'_, Vec<T>> {
        lock.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Repository for InMemoryStore {
    fn active_opportunities(&self) -> Vec<Opportunity> {
        Self::read(&self.opportunities)
            .iter()
            .filter(|op| op.is_active())
            .cloned()
            .collect()
    }

    fn opportunity(&self, id: u64) -> Option<Opportunity> {
        Self::read(&self.opportunities)
            .iter()
            .find(|op| op.id == id)
            .cloned()
    }

    fn insert_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, RepositoryError> {
        let organization = self.organization(new.organization_id).ok_or_else(|| {
            RepositoryError::NotFound(format!("organization {}", new.organization_id))
        })?;

        let opportunity = Opportunity {
            id: Self::next_id(&self.next_opportunity_id),
            organization_id: organization.id,
            title: new.title,
            description: new.description,
            required_skills: new.required_skills,
            location: new.location,
            latitude: new.latitude.unwrap_or(organization.latitude),
            longitude: new.longitude.unwrap_or(organization.longitude),
            vacancies: new.vacancies.unwrap_or(1),
            status: OpportunityStatus::Active,
            created_at: Utc::now(),
        };

        Self::write(&self.opportunities).push(opportunity.clone());
        Ok(opportunity)
    }

    fn volunteer_by_user(&self, user_id: u64) -> Option<VolunteerProfile> {
        Self::read(&self.volunteers)
            .iter()
            .find(|v| v.user_id == user_id)
            .cloned()
    }

    fn insert_volunteer(&self, new: NewVolunteer) -> VolunteerProfile {
        let volunteer = VolunteerProfile {
            id: Self::next_id(&self.next_volunteer_id),
            user_id: new.user_id,
            skills: new.skills,
            latitude: new.latitude,
            longitude: new.longitude,
            bio: new.bio,
            phone: new.phone,
        };

        Self::write(&self.volunteers).push(volunteer.clone());
        volunteer
    }

    fn organization(&self, id: u64) -> Option<Organization> {
        Self::read(&self.organizations)
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    fn organization_name(&self, id: u64) -> Option<String> {
        Self::read(&self.organizations)
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.name.clone())
    }

    fn insert_organization(&self, new: NewOrganization) -> Organization {
        let organization = Organization {
            id: Self::next_id(&self.next_organization_id),
            user_id: new.user_id,
            name: new.name,
            description: new.description,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            phone: new.phone,
            website: new.website,
        };

        Self::write(&self.organizations).push(organization.clone());
        organization
    }

    fn update_organization(
        &self,
        id: u64,
        update: OrganizationUpdate,
    ) -> Result<Organization, RepositoryError> {
        let mut organizations = Self::write(&self.organizations);
        let organization = organizations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("organization {}", id)))?;

        if let Some(name) = update.name {
            organization.name = name;
        }
        if let Some(description) = update.description {
            organization.description = description;
        }
        if let Some(address) = update.address {
            organization.address = address;
        }
        if let Some(latitude) = update.latitude {
            organization.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            organization.longitude = longitude;
        }
        if let Some(phone) = update.phone {
            organization.phone = phone;
        }
        if let Some(website) = update.website {
            organization.website = Some(website);
        }

        Ok(organization.clone())
    }

    fn opportunity_count(&self, organization_id: u64) -> usize {
        Self::read(&self.opportunities)
            .iter()
            .filter(|op| op.organization_id == organization_id)
            .count()
    }

    fn insert_application(
        &self,
        opportunity_id: u64,
        volunteer_id: u64,
        message: String,
    ) -> Result<Application, RepositoryError> {
        let mut applications = Self::write(&self.applications);

        if applications
            .iter()
            .any(|a| a.opportunity_id == opportunity_id && a.volunteer_id == volunteer_id)
        {
            return Err(RepositoryError::Duplicate(format!(
                "volunteer {} already applied to opportunity {}",
                volunteer_id, opportunity_id
            )));
        }

        let application = Application {
            id: Self::next_id(&self.next_application_id),
            opportunity_id,
            volunteer_id,
            status: ApplicationStatus::Pending,
            message,
            applied_at: Utc::now(),
        };

        applications.push(application.clone());
        Ok(application)
    }

    fn applications_by_volunteer(&self, volunteer_id: u64) -> Vec<Application> {
        Self::read(&self.applications)
            .iter()
            .filter(|a| a.volunteer_id == volunteer_id)
            .cloned()
            .collect()
    }
}
