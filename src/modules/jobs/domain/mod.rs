pub mod entities;
pub mod handler;
pub mod repository;
pub mod value_objects;

pub use entities::{Job, JobRecord, JobStatus, JobType};
pub use handler::JobHandler;
pub use repository::{JobRepository, JobStatistics, TaskQueue};
pub use value_objects::JobStatusDb;
