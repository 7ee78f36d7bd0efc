use crate::shared::errors::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrollmentError {
    #[error("Enrollment not found")]
    NotFound,

    #[error("Plan not found")]
    PlanNotFound,

    #[error("Student not found")]
    StudentNotFound,

    #[error("Invalid start date: '{0}'")]
    InvalidDate(String),

    #[error("Invalid plan duration: {0} months")]
    InvalidDuration(i32),

    #[error(transparent)]
    Store(#[from] AppError),
}
