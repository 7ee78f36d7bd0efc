/// Enrollment lifecycle
///
/// A student's subscription to a plan. End date and price are derived from the
/// plan on every write; creation queues a confirmation mail.
///
/// Architecture:
/// - Domain: entities, period computation, errors and repository trait
/// - Infrastructure: Diesel-based repository implementation
/// - Application: service orchestrating lookups, writes and notification
/// - Handlers: REST surface under `/enrollments`
pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{
    dispatcher::NotificationDispatcher,
    service::{CreateEnrollment, EnrollmentService, UpdateEnrollment},
};
pub use domain::{
    computator::{compute_end_date, EnrollmentPeriod},
    entities::{Enrollment, EnrollmentDetails, StudentSummary},
    errors::EnrollmentError,
    repository::EnrollmentRepository,
};
pub use infrastructure::EnrollmentRepositoryImpl;
