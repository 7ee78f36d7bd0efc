/// Background worker for queued jobs
///
/// Polls the job queue and hands each claimed job to the handler registered
/// for its task key. Runs until its cancellation token fires.
use crate::modules::jobs::domain::entities::{JobRecord, JobType};
use crate::modules::jobs::domain::handler::JobHandler;
use crate::modules::jobs::domain::repository::JobRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_error, log_info, log_warn};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);
const COMPLETED_RETENTION_DAYS: i32 = 7;

/// Background worker that processes jobs from the queue
pub struct BackgroundWorker {
    job_repository: Arc<dyn JobRepository>,
    handlers: HashMap<JobType, Arc<dyn JobHandler>>,
    poll_interval: Duration,
    is_running: Arc<tokio::sync::RwLock<bool>>,
}

impl BackgroundWorker {
    pub fn new(job_repository: Arc<dyn JobRepository>, poll_interval: Duration) -> Self {
        Self {
            job_repository,
            handlers: HashMap::new(),
            poll_interval,
            is_running: Arc::new(tokio::sync::RwLock::new(false)),
        }
    }

    /// Register the routine for one task key. A later registration for the same key wins
    pub fn with_handler(mut self, handler: Arc<dyn JobHandler>) -> Self {
        self.handlers.insert(handler.job_type(), handler);
        self
    }

    /// Run the worker loop until `token` is cancelled.
    ///
    /// Spawn it with `tokio::spawn`; a job in progress finishes before the loop exits.
    pub async fn run(self: Arc<Self>, token: CancellationToken) {
        log_info!(
            "Background worker started ({} handler(s), polling every {:?})",
            self.handlers.len(),
            self.poll_interval
        );
        *self.is_running.write().await = true;

        let mut last_cleanup = Instant::now();

        while !token.is_cancelled() {
            let processed = match self.process_next_job().await {
                Ok(processed) => processed,
                Err(e) => {
                    log_error!("Error in worker loop: {}", e);
                    false
                }
            };

            if last_cleanup.elapsed() >= CLEANUP_INTERVAL {
                self.cleanup().await;
                last_cleanup = Instant::now();
            }

            // Drain the queue without sleeping while jobs keep coming
            if !processed {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = tokio::time::sleep(self.poll_interval) => {}
                }
            }
        }

        *self.is_running.write().await = false;
        log_info!("Background worker stopped");
    }

    /// Process the next job in the queue
    ///
    /// Returns true if a job was processed, false if queue was empty
    pub async fn process_next_job(&self) -> AppResult<bool> {
        let job = match self.job_repository.dequeue().await? {
            Some(job) => job,
            None => return Ok(false),
        };

        log_info!(
            "Processing job {} (type: {}, attempts: {}/{})",
            job.id,
            job.job_type,
            job.attempts,
            job.max_attempts
        );

        match self.execute(&job).await {
            Ok(()) => {
                self.job_repository.mark_completed(job.id).await?;
                log_info!("Job {} completed successfully", job.id);
            }
            Err(e) => {
                let error_msg = e.to_string();
                if job.can_retry() {
                    log_warn!(
                        "Job {} failed, will be retried (attempt {}/{}): {}",
                        job.id,
                        job.attempts,
                        job.max_attempts,
                        error_msg
                    );
                } else {
                    log_error!(
                        "Job {} failed permanently after {} attempts: {}",
                        job.id,
                        job.attempts,
                        error_msg
                    );
                }
                self.job_repository.mark_failed(job.id, &error_msg).await?;
            }
        }

        Ok(true)
    }

    async fn execute(&self, job: &JobRecord) -> AppResult<()> {
        let job_type = job.parse_job_type().map_err(AppError::QueueError)?;

        let handler = self.handlers.get(&job_type).ok_or_else(|| {
            AppError::QueueError(format!("No handler registered for task key {}", job_type))
        })?;

        handler.handle(job).await
    }

    async fn cleanup(&self) {
        match self
            .job_repository
            .delete_old_completed(COMPLETED_RETENTION_DAYS)
            .await
        {
            Ok(0) => {}
            Ok(deleted) => log_debug!("Removed {} finished jobs", deleted),
            Err(e) => log_warn!("Failed to clean up finished jobs: {}", e),
        }
    }

    /// Get statistics about the worker and job queue
    pub async fn get_statistics(&self) -> AppResult<WorkerStatistics> {
        let job_stats = self.job_repository.get_statistics().await?;
        let is_running = *self.is_running.read().await;

        Ok(WorkerStatistics {
            is_running,
            pending_jobs: job_stats.pending_count,
            running_jobs: job_stats.running_count,
            completed_jobs: job_stats.completed_count,
            failed_jobs: job_stats.failed_count,
            total_jobs: job_stats.total_count,
        })
    }
}

/// Worker statistics for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct WorkerStatistics {
    pub is_running: bool,
    pub pending_jobs: i64,
    pub running_jobs: i64,
    pub completed_jobs: i64,
    pub failed_jobs: i64,
    pub total_jobs: i64,
}
