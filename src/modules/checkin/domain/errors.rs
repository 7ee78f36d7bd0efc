use crate::shared::errors::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckinError {
    #[error("Student not found")]
    StudentNotFound,

    #[error("Check-in limit reached: {max} check-ins in the last {days} days")]
    LimitReached { max: i64, days: i64 },

    #[error(transparent)]
    Store(#[from] AppError),
}
