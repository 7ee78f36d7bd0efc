pub mod app_error;
pub mod http_error;

pub use app_error::{AppError, AppResult};
pub use http_error::HttpError;
