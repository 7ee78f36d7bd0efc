use crate::modules::jobs::worker::{BackgroundWorker, WorkerStatistics};
use crate::shared::infrastructure::database::PoolStatus;
use crate::shared::Database;
use crate::log_warn;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct HealthState {
    pub database: Arc<Database>,
    pub worker: Arc<BackgroundWorker>,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: PoolStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<WorkerStatistics>,
}

pub fn router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}

async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthReport>) {
    let database = state.database.pool_status();

    match state.worker.get_statistics().await {
        Ok(worker) => (
            StatusCode::OK,
            Json(HealthReport {
                status: "ok",
                database,
                worker: Some(worker),
            }),
        ),
        Err(e) => {
            log_warn!("Health check could not read the job queue: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport {
                    status: "degraded",
                    database,
                    worker: None,
                }),
            )
        }
    }
}
