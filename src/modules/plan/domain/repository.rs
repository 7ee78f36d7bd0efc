/// Read-only access to the plan catalogue
use crate::modules::plan::domain::entities::Plan;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Plan>>;

    /// All plans ordered by id
    async fn find_all(&self) -> AppResult<Vec<Plan>>;
}
