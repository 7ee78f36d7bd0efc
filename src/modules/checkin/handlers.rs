use super::application::service::CheckinService;
use super::domain::{Checkin, CheckinError};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::HttpError;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct ListCheckinsQuery {
    pub page: Option<i64>,
    #[serde(rename = "perPage")]
    pub per_page: Option<i64>,
}

pub fn router(service: Arc<CheckinService>) -> Router {
    Router::new()
        .route(
            "/students/{id}/checkins",
            get(list_checkins).post(create_checkin),
        )
        .with_state(service)
}

impl From<CheckinError> for HttpError {
    fn from(err: CheckinError) -> Self {
        match err {
            CheckinError::Store(e) => HttpError::internal(&e),
            rejected => HttpError::bad_request(rejected.to_string()),
        }
    }
}

async fn list_checkins(
    State(service): State<Arc<CheckinService>>,
    id: Result<Path<i32>, PathRejection>,
    query: Result<Query<ListCheckinsQuery>, QueryRejection>,
) -> Result<Json<PaginatedResult<Checkin>>, HttpError> {
    let Path(student_id) = id?;
    let Query(query) = query?;
    let params = PaginationParams::from_query(query.page, query.per_page, DEFAULT_PER_PAGE);

    Ok(Json(service.list(student_id, params).await?))
}

async fn create_checkin(
    State(service): State<Arc<CheckinService>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<(StatusCode, Json<Checkin>), HttpError> {
    let Path(student_id) = id?;

    let checkin = service.checkin(student_id).await?;
    Ok((StatusCode::CREATED, Json(checkin)))
}
