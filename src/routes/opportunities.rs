use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{discover_opportunities, paginate, rank_opportunities};
use crate::models::{
    ApplicationListResponse, ApplicationView, ApplyRequest, CreateOpportunityRequest,
    DiscoveryQuery, DiscoveryResponse, ErrorResponse, HealthResponse, MatchListResponse,
    UserQuery,
};
use crate::services::{NewOpportunity, RepositoryError};

use super::AppState;

/// Configure opportunity and application routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/opportunities", web::get().to(discover))
        .route("/opportunities", web::post().to(create_opportunity))
        .route("/opportunities/match", web::get().to(find_matches))
        .route("/opportunities/{id}/apply", web::post().to(apply))
        .route("/applications", web::get().to(my_applications));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Discovery endpoint
///
/// GET /api/opportunities?skills=a,b&latitude=..&longitude=..&radius=..&page=1&limit=20
///
/// All filters are optional; malformed numeric parameters are ignored
/// rather than rejected.
async fn discover(
    state: web::Data<AppState>,
    query: web::Query<DiscoveryQuery>,
) -> impl Responder {
    let snapshot = state.store.active_opportunities();
    let filters = query.filters();

    tracing::debug!(
        "Discovery over {} active opportunities (skills: {}, geo: {})",
        snapshot.len(),
        filters.skills.is_some(),
        filters.geo.is_some()
    );

    let discovered = discover_opportunities(&snapshot, &filters, |org_id| {
        state.store.organization_name(org_id)
    });
    let page = paginate(discovered, query.page(), query.limit());

    HttpResponse::Ok().json(DiscoveryResponse {
        opportunities: page.items,
        pagination: page.pagination,
    })
}

/// Personalized ranking endpoint
///
/// GET /api/opportunities/match?user_id={userId}
///
/// Returns active opportunities scored for the volunteer, best first,
/// with weak matches (score ≤ 30) dropped.
async fn find_matches(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> impl Responder {
    let volunteer = match state.store.volunteer_by_user(query.user_id) {
        Some(v) => v,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Volunteer profile not found".to_string(),
                message: format!("No volunteer profile for user {}", query.user_id),
                status_code: 404,
            });
        }
    };

    let snapshot = state.store.active_opportunities();
    let ranked = rank_opportunities(&volunteer, &snapshot, |org_id| {
        state.store.organization_name(org_id)
    });

    tracing::info!(
        "Ranked {} of {} opportunities for user {}",
        ranked.total_matches,
        snapshot.len(),
        query.user_id
    );

    HttpResponse::Ok().json(MatchListResponse {
        matches: ranked.matches,
        total_matches: ranked.total_matches,
    })
}

/// Publish an opportunity
///
/// POST /api/opportunities
async fn create_opportunity(
    state: web::Data<AppState>,
    req: web::Json<CreateOpportunityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let result = state.store.insert_opportunity(NewOpportunity {
        organization_id: req.organization_id,
        title: req.title,
        description: req.description,
        required_skills: req.required_skills,
        location: req.location,
        latitude: req.latitude,
        longitude: req.longitude,
        vacancies: req.vacancies,
    });

    match result {
        Ok(opportunity) => HttpResponse::Created().json(opportunity),
        Err(RepositoryError::NotFound(what)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Organization not found".to_string(),
            message: what,
            status_code: 404,
        }),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Failed to create opportunity".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}

/// Apply to an opportunity
///
/// POST /api/opportunities/{id}/apply
async fn apply(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<ApplyRequest>,
) -> impl Responder {
    let opportunity_id = path.into_inner();

    let opportunity = match state.store.opportunity(opportunity_id) {
        Some(op) => op,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Opportunity not found".to_string(),
                message: format!("No opportunity {}", opportunity_id),
                status_code: 404,
            });
        }
    };

    if !opportunity.is_active() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Opportunity is not active".to_string(),
            message: format!("Opportunity {} is closed", opportunity_id),
            status_code: 400,
        });
    }

    let volunteer = match state.store.volunteer_by_user(req.user_id) {
        Some(v) => v,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Volunteer profile not found".to_string(),
                message: format!("No volunteer profile for user {}", req.user_id),
                status_code: 404,
            });
        }
    };

    match state
        .store
        .insert_application(opportunity.id, volunteer.id, req.message.clone())
    {
        Ok(application) => HttpResponse::Created().json(application),
        Err(RepositoryError::Duplicate(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Already applied".to_string(),
                message,
                status_code: 400,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Failed to apply".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}

/// List the volunteer's applications
///
/// GET /api/applications?user_id={userId}
async fn my_applications(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> impl Responder {
    let volunteer = match state.store.volunteer_by_user(query.user_id) {
        Some(v) => v,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Volunteer profile not found".to_string(),
                message: format!("No volunteer profile for user {}", query.user_id),
                status_code: 404,
            });
        }
    };

    let applications: Vec<ApplicationView> = state
        .store
        .applications_by_volunteer(volunteer.id)
        .into_iter()
        .map(|application| {
            let opportunity = state.store.opportunity(application.opportunity_id);
            let organization_name = opportunity
                .as_ref()
                .and_then(|op| state.store.organization_name(op.organization_id))
                .unwrap_or_else(|| "unknown".to_string());

            ApplicationView {
                application,
                opportunity_title: opportunity.map(|op| op.title).unwrap_or_default(),
                organization_name,
            }
        })
        .collect();

    let total = applications.len();
    HttpResponse::Ok().json(ApplicationListResponse {
        applications,
        total,
    })
}
