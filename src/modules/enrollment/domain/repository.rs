/// Repository trait for enrollment persistence
///
/// Joined reads return a fixed shape: the enrollment plus its student and plan.
use crate::modules::enrollment::domain::entities::{
    Enrollment, EnrollmentChanges, EnrollmentDetails, NewEnrollment, StudentFields,
};
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn create(&self, enrollment: NewEnrollment) -> AppResult<Enrollment>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>>;

    async fn find_details(
        &self,
        id: i32,
        student_fields: StudentFields,
    ) -> AppResult<Option<EnrollmentDetails>>;

    /// Returns `None` when the enrollment no longer exists
    async fn update(&self, id: i32, changes: EnrollmentChanges) -> AppResult<Option<Enrollment>>;

    /// Hard delete. Returns whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Case-insensitive substring match on student name OR plan title, ordered
    /// by id. Returns the page of rows and the total match count
    async fn search(
        &self,
        term: &str,
        params: PaginationParams,
    ) -> AppResult<(Vec<EnrollmentDetails>, i64)>;
}
