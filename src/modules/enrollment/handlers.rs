use super::application::service::{CreateEnrollment, EnrollmentService, UpdateEnrollment};
use super::domain::entities::{Enrollment, EnrollmentDetails};
use super::domain::errors::EnrollmentError;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, HttpError};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_PER_PAGE: u32 = 5;

#[derive(Debug, Deserialize)]
pub struct ListEnrollmentsQuery {
    #[serde(default)]
    pub term: String,
    pub page: Option<i64>,
    #[serde(rename = "perPage")]
    pub per_page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEnrollmentRequest {
    pub plan_id: i32,
    pub start_date: String,
    #[serde(default)]
    pub student_id: Option<i32>,
}

pub fn router(service: Arc<EnrollmentService>) -> Router {
    Router::new()
        .route("/enrollments", get(list_enrollments).post(create_enrollment))
        .route(
            "/enrollments/{id}",
            get(show_enrollment)
                .put(update_enrollment)
                .delete(delete_enrollment),
        )
        .with_state(service)
}

/// Precondition failures are 400; storage failures are 500
fn enrollment_error(err: EnrollmentError) -> HttpError {
    match err {
        EnrollmentError::Store(AppError::ValidationError(msg))
        | EnrollmentError::Store(AppError::InvalidInput(msg)) => HttpError::bad_request(msg),
        EnrollmentError::Store(e) => HttpError::internal(&e),
        domain => HttpError::bad_request(domain.to_string()),
    }
}

async fn list_enrollments(
    State(service): State<Arc<EnrollmentService>>,
    query: Result<Query<ListEnrollmentsQuery>, QueryRejection>,
) -> Result<Json<PaginatedResult<EnrollmentDetails>>, HttpError> {
    let Query(query) = query?;
    let params = PaginationParams::from_query(query.page, query.per_page, DEFAULT_PER_PAGE);

    service
        .list(&query.term, params)
        .await
        .map(Json)
        .map_err(enrollment_error)
}

async fn show_enrollment(
    State(service): State<Arc<EnrollmentService>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<EnrollmentDetails>, HttpError> {
    let Path(id) = id?;

    match service.show(id).await {
        Ok(details) => Ok(Json(details)),
        Err(EnrollmentError::NotFound) => Err(HttpError::not_found("Enrollment Not Found")),
        Err(e) => Err(enrollment_error(e)),
    }
}

async fn create_enrollment(
    State(service): State<Arc<EnrollmentService>>,
    body: Result<Json<CreateEnrollmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EnrollmentDetails>), HttpError> {
    let Json(body) = body?;

    let details = service
        .create(CreateEnrollment {
            student_id: body.student_id,
            plan_id: body.plan_id,
            start_date: body.start_date,
        })
        .await
        .map_err(enrollment_error)?;

    Ok((StatusCode::CREATED, Json(details)))
}

async fn update_enrollment(
    State(service): State<Arc<EnrollmentService>>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateEnrollmentRequest>, JsonRejection>,
) -> Result<Json<Enrollment>, HttpError> {
    let Path(id) = id?;
    let Json(body) = body?;

    service
        .update(
            id,
            UpdateEnrollment {
                plan_id: body.plan_id,
                start_date: body.start_date,
                student_id: body.student_id,
            },
        )
        .await
        .map(Json)
        .map_err(enrollment_error)
}

async fn delete_enrollment(
    State(service): State<Arc<EnrollmentService>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let Path(id) = id?;

    service
        .delete(id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(enrollment_error)
}
