/// Gym check-ins
///
/// A student may check in a limited number of times within a rolling window.
pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

pub use application::service::CheckinService;
pub use domain::{Checkin, CheckinError, CheckinRepository};
pub use infrastructure::CheckinRepositoryImpl;
