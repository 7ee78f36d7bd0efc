pub mod computator;
pub mod entities;
pub mod errors;
pub mod repository;

pub use entities::{
    Enrollment, EnrollmentChanges, EnrollmentDetails, NewEnrollment, StudentFields,
    StudentSummary,
};
pub use errors::EnrollmentError;
pub use repository::EnrollmentRepository;
