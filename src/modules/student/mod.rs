/// Students are owned elsewhere; enrollments and check-ins only reference them.
pub mod domain;
pub mod infrastructure;

pub use domain::{Student, StudentRepository};
pub use infrastructure::StudentRepositoryImpl;
