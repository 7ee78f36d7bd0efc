use crate::modules::enrollment::domain::entities::{
    Enrollment, EnrollmentChanges, EnrollmentDetails, NewEnrollment, StudentFields,
};
use crate::modules::enrollment::domain::repository::EnrollmentRepository;
use crate::modules::enrollment::infrastructure::models::{
    to_details, EnrollmentChangeset, EnrollmentModel, EnrollmentRow, NewEnrollmentModel,
};
use crate::modules::plan::infrastructure::models::PlanModel;
use crate::modules::student::infrastructure::models::StudentModel;
use crate::schema::{enrollments, plans, students};
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::Validator;
use crate::shared::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct EnrollmentRepositoryImpl {
    db: Arc<Database>,
}

impl EnrollmentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn create(&self, enrollment: NewEnrollment) -> AppResult<Enrollment> {
        let db = Arc::clone(&self.db);
        let new_row = NewEnrollmentModel::from(enrollment);

        task::spawn_blocking(move || -> AppResult<Enrollment> {
            let mut conn = db.get_connection()?;
            LogContext::db_operation("insert", "enrollments", None);

            let inserted = diesel::insert_into(enrollments::table)
                .values(&new_row)
                .returning(EnrollmentModel::as_returning())
                .get_result(&mut conn)?;

            Ok(inserted.to_enrollment())
        })
        .await?
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Enrollment>> {
            let mut conn = db.get_connection()?;

            let model = enrollments::table
                .find(id)
                .select(EnrollmentModel::as_select())
                .first(&mut conn)
                .optional()?;

            Ok(model.map(EnrollmentModel::to_enrollment))
        })
        .await?
    }

    async fn find_details(
        &self,
        id: i32,
        student_fields: StudentFields,
    ) -> AppResult<Option<EnrollmentDetails>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<EnrollmentDetails>> {
            let mut conn = db.get_connection()?;

            let row: Option<EnrollmentRow> = enrollments::table
                .inner_join(students::table)
                .inner_join(plans::table)
                .filter(enrollments::id.eq(id))
                .select((
                    EnrollmentModel::as_select(),
                    StudentModel::as_select(),
                    PlanModel::as_select(),
                ))
                .first(&mut conn)
                .optional()?;

            Ok(row.map(|row| to_details(row, student_fields)))
        })
        .await?
    }

    async fn update(&self, id: i32, changes: EnrollmentChanges) -> AppResult<Option<Enrollment>> {
        let db = Arc::clone(&self.db);
        let changeset = EnrollmentChangeset::from(changes);

        task::spawn_blocking(move || -> AppResult<Option<Enrollment>> {
            let mut conn = db.get_connection()?;
            LogContext::db_operation("update", "enrollments", None);

            let updated = diesel::update(enrollments::table.find(id))
                .set(&changeset)
                .returning(EnrollmentModel::as_returning())
                .get_result(&mut conn)
                .optional()?;

            Ok(updated.map(EnrollmentModel::to_enrollment))
        })
        .await?
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            LogContext::db_operation("delete", "enrollments", None);

            let deleted = diesel::delete(enrollments::table.find(id)).execute(&mut conn)?;

            Ok(deleted > 0)
        })
        .await?
    }

    async fn search(
        &self,
        term: &str,
        params: PaginationParams,
    ) -> AppResult<(Vec<EnrollmentDetails>, i64)> {
        Validator::validate_pagination(params.offset(), params.limit())?;

        let db = Arc::clone(&self.db);
        let pattern = Validator::like_pattern(term);

        task::spawn_blocking(move || -> AppResult<(Vec<EnrollmentDetails>, i64)> {
            let timer = TimedOperation::new("enrollment_search");
            let mut conn = db.get_connection()?;

            let total = enrollments::table
                .inner_join(students::table)
                .inner_join(plans::table)
                .filter(
                    students::name
                        .ilike(pattern.clone())
                        .or(plans::title.ilike(pattern.clone())),
                )
                .count()
                .get_result::<i64>(&mut conn)?;

            let rows: Vec<EnrollmentRow> = enrollments::table
                .inner_join(students::table)
                .inner_join(plans::table)
                .filter(
                    students::name
                        .ilike(pattern.clone())
                        .or(plans::title.ilike(pattern)),
                )
                .order(enrollments::id.asc())
                .limit(params.limit())
                .offset(params.offset())
                .select((
                    EnrollmentModel::as_select(),
                    StudentModel::as_select(),
                    PlanModel::as_select(),
                ))
                .load(&mut conn)?;

            timer.finish_with_info(&format!("{} of {} rows", rows.len(), total));

            let data = rows
                .into_iter()
                .map(|row| to_details(row, StudentFields::Summary))
                .collect();

            Ok((data, total))
        })
        .await?
    }
}
