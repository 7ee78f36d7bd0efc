use crate::modules::enrollment::domain::entities::EnrollmentDetails;
use crate::modules::jobs::domain::entities::Job;
use crate::modules::jobs::domain::repository::TaskQueue;
use crate::{log_debug, log_warn};
use std::sync::Arc;

/// Queues the confirmation mail for a new enrollment.
///
/// Best-effort: the enrollment is already stored, so a queue failure is
/// logged and dropped instead of failing the request.
pub struct NotificationDispatcher {
    queue: Arc<dyn TaskQueue>,
}

impl NotificationDispatcher {
    pub fn new(queue: Arc<dyn TaskQueue>) -> Self {
        Self { queue }
    }

    pub async fn dispatch(&self, enrollment: &EnrollmentDetails) {
        let job = match Job::enrollment_mail(enrollment) {
            Ok(job) => job,
            Err(e) => {
                log_warn!(
                    "Could not build mail payload for enrollment {}: {}",
                    enrollment.enrollment.id,
                    e
                );
                return;
            }
        };

        match self.queue.enqueue(job.job_type.key(), job.payload).await {
            Ok(record) => log_debug!(
                "Queued {} job {} for enrollment {}",
                record.job_type,
                record.id,
                enrollment.enrollment.id
            ),
            Err(e) => log_warn!(
                "Failed to queue mail for enrollment {}: {}",
                enrollment.enrollment.id,
                e
            ),
        }
    }
}
