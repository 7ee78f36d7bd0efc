/// Diesel-based implementation of JobRepository
///
/// Uses PostgreSQL with SELECT FOR UPDATE SKIP LOCKED for atomic job dequeuing.
use crate::log_debug;
use crate::modules::jobs::domain::entities::{Job, JobRecord, JobType};
use crate::modules::jobs::domain::repository::{JobRepository, JobStatistics, TaskQueue};
use crate::modules::jobs::infrastructure::models::{BackgroundJobModel, NewJob};
use crate::schema::background_jobs;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;
use uuid::Uuid;

/// Helper struct for COUNT queries
#[derive(QueryableByName)]
struct StatusCount {
    #[diesel(sql_type = diesel::sql_types::Text)]
    status: String,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

pub struct JobRepositoryImpl {
    db: Arc<Database>,
}

impl JobRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryImpl {
    async fn enqueue(&self, job: Job) -> AppResult<JobRecord> {
        let db = Arc::clone(&self.db);
        let new_job = NewJob {
            job_type: job.job_type.to_string(),
            payload: job.payload,
            priority: job.priority,
        };

        task::spawn_blocking(move || -> AppResult<JobRecord> {
            let mut conn = db.get_connection()?;

            let inserted: BackgroundJobModel = diesel::insert_into(background_jobs::table)
                .values(&new_job)
                .returning(BackgroundJobModel::as_returning())
                .get_result(&mut conn)
                .map_err(|e| AppError::QueueError(format!("Failed to enqueue job: {}", e)))?;

            log_debug!("Enqueued {} job {}", inserted.job_type, inserted.id);
            Ok(inserted.to_job_record())
        })
        .await?
    }

    async fn dequeue(&self) -> AppResult<Option<JobRecord>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<JobRecord>> {
            let mut conn = db.get_connection()?;

            // SKIP LOCKED keeps concurrent workers off the same row
            let claimed: Option<BackgroundJobModel> = diesel::sql_query(
                r#"
                UPDATE background_jobs
                SET status = 'running',
                    started_at = NOW(),
                    attempts = attempts + 1
                WHERE id = (
                    SELECT id
                    FROM background_jobs
                    WHERE status = 'pending'
                      AND attempts < max_attempts
                    ORDER BY priority ASC, created_at ASC
                    LIMIT 1
                    FOR UPDATE SKIP LOCKED
                )
                RETURNING id, job_type, payload, priority, status,
                          attempts, max_attempts, created_at,
                          started_at, completed_at, error
                "#,
            )
            .get_result(&mut conn)
            .optional()
            .map_err(|e| AppError::QueueError(format!("Failed to dequeue job: {}", e)))?;

            Ok(claimed.map(BackgroundJobModel::to_job_record))
        })
        .await?
    }

    async fn mark_completed(&self, job_id: Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            diesel::sql_query(
                "UPDATE background_jobs
                 SET status = 'completed', completed_at = NOW(), error = NULL
                 WHERE id = $1",
            )
            .bind::<diesel::sql_types::Uuid, _>(job_id)
            .execute(&mut conn)
            .map_err(|e| AppError::QueueError(format!("Failed to mark job as completed: {}", e)))?;

            Ok(())
        })
        .await?
    }

    async fn mark_failed(&self, job_id: Uuid, error: &str) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let error = error.to_string();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            // Back to pending while attempts remain, failed for good otherwise
            diesel::sql_query(
                "UPDATE background_jobs
                 SET status = CASE
                     WHEN attempts < max_attempts THEN 'pending'::job_status
                     ELSE 'failed'::job_status
                 END,
                 completed_at = CASE
                     WHEN attempts >= max_attempts THEN NOW()
                     ELSE NULL
                 END,
                 started_at = NULL,
                 error = $2
                 WHERE id = $1",
            )
            .bind::<diesel::sql_types::Uuid, _>(job_id)
            .bind::<diesel::sql_types::Text, _>(error)
            .execute(&mut conn)
            .map_err(|e| AppError::QueueError(format!("Failed to mark job as failed: {}", e)))?;

            Ok(())
        })
        .await?
    }

    async fn get_by_id(&self, job_id: Uuid) -> AppResult<Option<JobRecord>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<JobRecord>> {
            let mut conn = db.get_connection()?;

            let job = background_jobs::table
                .find(job_id)
                .select(BackgroundJobModel::as_select())
                .first(&mut conn)
                .optional()?;

            Ok(job.map(BackgroundJobModel::to_job_record))
        })
        .await?
    }

    async fn get_pending_jobs(&self) -> AppResult<Vec<JobRecord>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<JobRecord>> {
            let mut conn = db.get_connection()?;

            let jobs: Vec<BackgroundJobModel> = diesel::sql_query(
                "SELECT id, job_type, payload, priority, status,
                        attempts, max_attempts, created_at,
                        started_at, completed_at, error
                 FROM background_jobs
                 WHERE status = 'pending'
                 ORDER BY priority ASC, created_at ASC",
            )
            .load(&mut conn)?;

            Ok(jobs.into_iter().map(BackgroundJobModel::to_job_record).collect())
        })
        .await?
    }

    async fn delete_old_completed(&self, days: i32) -> AppResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;

            let deleted = diesel::sql_query(
                "DELETE FROM background_jobs
                 WHERE status IN ('completed', 'failed')
                 AND completed_at < NOW() - INTERVAL '1 day' * $1",
            )
            .bind::<diesel::sql_types::Integer, _>(days)
            .execute(&mut conn)?;

            Ok(deleted)
        })
        .await?
    }

    async fn get_statistics(&self) -> AppResult<JobStatistics> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<JobStatistics> {
            let mut conn = db.get_connection()?;

            let counts: Vec<StatusCount> = diesel::sql_query(
                "SELECT status::text AS status, COUNT(*) AS count
                 FROM background_jobs
                 GROUP BY status",
            )
            .load(&mut conn)?;

            let mut stats = JobStatistics {
                pending_count: 0,
                running_count: 0,
                completed_count: 0,
                failed_count: 0,
                total_count: 0,
            };

            for row in counts {
                match row.status.as_str() {
                    "pending" => stats.pending_count = row.count,
                    "running" => stats.running_count = row.count,
                    "completed" => stats.completed_count = row.count,
                    "failed" => stats.failed_count = row.count,
                    _ => {}
                }
                stats.total_count += row.count;
            }

            Ok(stats)
        })
        .await?
    }
}

#[async_trait]
impl TaskQueue for JobRepositoryImpl {
    async fn enqueue(&self, task_key: &str, payload: serde_json::Value) -> AppResult<JobRecord> {
        let job_type: JobType = task_key.parse().map_err(AppError::QueueError)?;
        JobRepository::enqueue(self, Job::new(job_type, payload)).await
    }
}
