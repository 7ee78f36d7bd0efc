use crate::modules::plan::domain::{entities::Plan, repository::PlanRepository};
use crate::modules::plan::infrastructure::models::PlanModel;
use crate::schema::plans;
use crate::shared::errors::AppResult;
use crate::shared::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct PlanRepositoryImpl {
    db: Arc<Database>,
}

impl PlanRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlanRepository for PlanRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Plan>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Plan>> {
            let mut conn = db.get_connection()?;

            let model = plans::table
                .find(id)
                .select(PlanModel::as_select())
                .first(&mut conn)
                .optional()?;

            Ok(model.map(PlanModel::to_plan))
        })
        .await?
    }

    async fn find_all(&self) -> AppResult<Vec<Plan>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Plan>> {
            let mut conn = db.get_connection()?;

            let models = plans::table
                .order(plans::id.asc())
                .select(PlanModel::as_select())
                .load(&mut conn)?;

            Ok(models.into_iter().map(PlanModel::to_plan).collect())
        })
        .await?
    }
}
