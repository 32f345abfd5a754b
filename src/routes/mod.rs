// Route exports
pub mod opportunities;
pub mod profiles;

use std::sync::Arc;

use actix_web::web;

use crate::services::Repository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Repository>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(opportunities::configure)
            .configure(profiles::configure),
    );
}
