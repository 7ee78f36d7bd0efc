/// Background job system module
///
/// Provides a PostgreSQL-based job queue for work that must not hold up an
/// HTTP response, such as the enrollment confirmation mail.
///
/// Architecture:
/// - Domain: Entities, repository and handler traits
/// - Infrastructure: Diesel-based repository implementation
/// - Worker: Background worker that processes jobs
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub use domain::{
    entities::{EnrollmentMailPayload, Job, JobRecord, JobStatus, JobType},
    handler::JobHandler,
    repository::{JobRepository, JobStatistics, TaskQueue},
};
pub use infrastructure::JobRepositoryImpl;
pub use worker::{BackgroundWorker, WorkerStatistics};
