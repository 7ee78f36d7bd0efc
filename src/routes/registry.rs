use super::health::{self, HealthState};
use super::middleware::log_requests;
use crate::modules::checkin::{self, CheckinService};
use crate::modules::enrollment::{self, EnrollmentService};
use crate::modules::jobs::BackgroundWorker;
use crate::modules::plan::{self, PlanService};
use crate::shared::Database;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;

/// Everything the HTTP layer needs, built once at startup
#[derive(Clone)]
pub struct Services {
    pub database: Arc<Database>,
    pub worker: Arc<BackgroundWorker>,
    pub plans: Arc<PlanService>,
    pub enrollments: Arc<EnrollmentService>,
    pub checkins: Arc<CheckinService>,
}

/// Single source of truth for the routes the server exposes
pub fn build_router(services: Services) -> Router {
    Router::new()
        .merge(enrollment::handlers::router(services.enrollments))
        .merge(plan::handlers::router(services.plans))
        .merge(checkin::handlers::router(services.checkins))
        .merge(health::router(HealthState {
            database: services.database,
            worker: services.worker,
        }))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(log_requests)))
}
