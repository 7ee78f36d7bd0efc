use crate::modules::student::domain::{entities::Student, repository::StudentRepository};
use crate::modules::student::infrastructure::models::StudentModel;
use crate::schema::students;
use crate::shared::errors::AppResult;
use crate::shared::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct StudentRepositoryImpl {
    db: Arc<Database>,
}

impl StudentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Student>> {
            let mut conn = db.get_connection()?;

            let model = students::table
                .find(id)
                .select(StudentModel::as_select())
                .first(&mut conn)
                .optional()?;

            Ok(model.map(StudentModel::to_student))
        })
        .await?
    }
}
