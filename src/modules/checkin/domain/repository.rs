use crate::modules::checkin::domain::entities::Checkin;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckinRepository: Send + Sync {
    /// Check-ins of `student_id` created at or after `since`
    async fn count_since(&self, student_id: i32, since: DateTime<Utc>) -> AppResult<i64>;

    async fn create(&self, student_id: i32) -> AppResult<Checkin>;

    /// Newest first, with the student's total check-in count
    async fn list_for_student(
        &self,
        student_id: i32,
        params: PaginationParams,
    ) -> AppResult<(Vec<Checkin>, i64)>;
}
