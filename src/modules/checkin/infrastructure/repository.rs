use crate::modules::checkin::domain::{entities::Checkin, repository::CheckinRepository};
use crate::modules::checkin::infrastructure::models::{CheckinModel, NewCheckinModel};
use crate::schema::checkins;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct CheckinRepositoryImpl {
    db: Arc<Database>,
}

impl CheckinRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckinRepository for CheckinRepositoryImpl {
    async fn count_since(&self, student_id: i32, since: DateTime<Utc>) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;

            let count = checkins::table
                .filter(checkins::student_id.eq(student_id))
                .filter(checkins::created_at.ge(since))
                .count()
                .get_result(&mut conn)?;

            Ok(count)
        })
        .await?
    }

    async fn create(&self, student_id: i32) -> AppResult<Checkin> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Checkin> {
            let mut conn = db.get_connection()?;
            LogContext::db_operation("insert", "checkins", None);

            let inserted = diesel::insert_into(checkins::table)
                .values(&NewCheckinModel { student_id })
                .returning(CheckinModel::as_returning())
                .get_result(&mut conn)?;

            Ok(inserted.to_checkin())
        })
        .await?
    }

    async fn list_for_student(
        &self,
        student_id: i32,
        params: PaginationParams,
    ) -> AppResult<(Vec<Checkin>, i64)> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<(Vec<Checkin>, i64)> {
            let mut conn = db.get_connection()?;

            let total = checkins::table
                .filter(checkins::student_id.eq(student_id))
                .count()
                .get_result(&mut conn)?;

            let rows = checkins::table
                .filter(checkins::student_id.eq(student_id))
                .order((checkins::created_at.desc(), checkins::id.desc()))
                .limit(params.limit())
                .offset(params.offset())
                .select(CheckinModel::as_select())
                .load(&mut conn)?;

            Ok((rows.into_iter().map(CheckinModel::to_checkin).collect(), total))
        })
        .await?
    }
}
