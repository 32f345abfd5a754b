use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreateOrganizationRequest, CreateVolunteerRequest, ErrorResponse, UpdateOrganizationRequest,
};
use crate::services::{NewOrganization, NewVolunteer, OrganizationUpdate, RepositoryError};

use super::AppState;

/// Configure volunteer and organization profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/volunteers", web::post().to(create_volunteer))
        .route("/organizations", web::post().to(create_organization))
        .route("/organizations/{id}", web::get().to(get_organization))
        .route("/organizations/{id}", web::put().to(update_organization));
}

/// Create a volunteer profile
///
/// POST /api/volunteers
async fn create_volunteer(
    state: web::Data<AppState>,
    req: web::Json<CreateVolunteerRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let volunteer = state.store.insert_volunteer(NewVolunteer {
        user_id: req.user_id,
        skills: req.skills,
        latitude: req.latitude,
        longitude: req.longitude,
        bio: req.bio,
        phone: req.phone,
    });

    tracing::info!("Created volunteer profile {} for user {}", volunteer.id, volunteer.user_id);
    HttpResponse::Created().json(volunteer)
}

/// Create an organization profile
///
/// POST /api/organizations
async fn create_organization(
    state: web::Data<AppState>,
    req: web::Json<CreateOrganizationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let organization = state.store.insert_organization(NewOrganization {
        user_id: req.user_id,
        name: req.name,
        description: req.description,
        address: req.address,
        latitude: req.latitude,
        longitude: req.longitude,
        phone: req.phone,
        website: req.website,
    });

    tracing::info!("Created organization {} ({})", organization.id, organization.name);
    HttpResponse::Created().json(organization)
}

/// Public organization view
///
/// GET /api/organizations/{id}
async fn get_organization(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();

    match state.store.organization(id) {
        Some(organization) => {
            let opportunities_count = state.store.opportunity_count(organization.id);
            let mut body = serde_json::json!(organization);
            body["opportunities_count"] = serde_json::json!(opportunities_count);
            HttpResponse::Ok().json(body)
        }
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Organization not found".to_string(),
            message: format!("No organization {}", id),
            status_code: 404,
        }),
    }
}

/// Update an organization profile (enumerated fields only)
///
/// PUT /api/organizations/{id}
async fn update_organization(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<UpdateOrganizationRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let update = OrganizationUpdate {
        name: req.name,
        description: req.description,
        address: req.address,
        latitude: req.latitude,
        longitude: req.longitude,
        phone: req.phone,
        website: req.website,
    };

    match state.store.update_organization(id, update) {
        Ok(organization) => HttpResponse::Ok().json(organization),
        Err(RepositoryError::NotFound(what)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Organization not found".to_string(),
            message: what,
            status_code: 404,
        }),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Failed to update organization".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}
