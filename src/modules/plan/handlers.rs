use super::application::service::PlanService;
use super::domain::entities::Plan;
use crate::shared::errors::{AppError, HttpError};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

pub fn router(service: Arc<PlanService>) -> Router {
    Router::new()
        .route("/plans", get(list_plans))
        .route("/plans/{id}", get(show_plan))
        .with_state(service)
}

async fn list_plans(
    State(service): State<Arc<PlanService>>,
) -> Result<Json<Vec<Plan>>, HttpError> {
    service
        .list_plans()
        .await
        .map(Json)
        .map_err(|e| HttpError::internal(&e))
}

async fn show_plan(
    State(service): State<Arc<PlanService>>,
    Path(id): Path<i32>,
) -> Result<Json<Plan>, HttpError> {
    match service.find_plan(id).await {
        Ok(plan) => Ok(Json(plan)),
        Err(AppError::NotFound(_)) => Err(HttpError::not_found("Plan not found")),
        Err(e) => Err(HttpError::internal(&e)),
    }
}
