use crate::modules::jobs::domain::entities::{JobRecord, JobType};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Routine run by the worker for every job of one task key
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobHandler: Send + Sync {
    fn job_type(&self) -> JobType;

    async fn handle(&self, job: &JobRecord) -> AppResult<()>;
}
