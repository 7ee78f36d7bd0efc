/// Plans are immutable reference data: enrollments look them up, never change them.
pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::PlanService;
pub use domain::{Plan, PlanRepository};
pub use infrastructure::PlanRepositoryImpl;
