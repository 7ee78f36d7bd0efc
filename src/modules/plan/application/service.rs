use crate::modules::plan::domain::{entities::Plan, repository::PlanRepository};
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

pub struct PlanService {
    plan_repo: Arc<dyn PlanRepository>,
}

impl PlanService {
    pub fn new(plan_repo: Arc<dyn PlanRepository>) -> Self {
        Self { plan_repo }
    }

    /// Look up a plan, failing with `NotFound` when it does not exist
    pub async fn find_plan(&self, id: i32) -> AppResult<Plan> {
        self.plan_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Plan with ID {} not found", id)))
    }

    pub async fn list_plans(&self) -> AppResult<Vec<Plan>> {
        self.plan_repo.find_all().await
    }
}
