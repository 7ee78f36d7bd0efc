/// Test helper functions and service builders
use super::db::test_database;
use async_trait::async_trait;
use gympoint_lib::modules::{
    checkin::{CheckinRepositoryImpl, CheckinService},
    enrollment::{EnrollmentRepositoryImpl, EnrollmentService, NotificationDispatcher},
    jobs::{BackgroundWorker, JobRepositoryImpl},
    notification::{EnrollmentMailJob, MailMessage, Mailer},
    plan::PlanRepositoryImpl,
    student::StudentRepositoryImpl,
};
use gympoint_lib::shared::config::CheckinPolicy;
use gympoint_lib::shared::errors::AppResult;
use gympoint_lib::shared::Database;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mailer that keeps every message for later assertions
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: MailMessage) -> AppResult<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message);
        }
        Ok(())
    }
}

pub struct TestServices {
    pub database: Arc<Database>,
    pub job_repository: Arc<JobRepositoryImpl>,
    pub enrollment_repository: Arc<EnrollmentRepositoryImpl>,
    pub enrollment_service: Arc<EnrollmentService>,
    pub checkin_service: Arc<CheckinService>,
    pub background_worker: Arc<BackgroundWorker>,
    pub mailer: Arc<RecordingMailer>,
}

/// Build all services needed for integration tests
pub fn build_test_services() -> TestServices {
    let database = test_database();

    let job_repository = Arc::new(JobRepositoryImpl::new(Arc::clone(&database)));
    let plan_repo = Arc::new(PlanRepositoryImpl::new(Arc::clone(&database)));
    let student_repo = Arc::new(StudentRepositoryImpl::new(Arc::clone(&database)));
    let enrollment_repository = Arc::new(EnrollmentRepositoryImpl::new(Arc::clone(&database)));
    let checkin_repo = Arc::new(CheckinRepositoryImpl::new(Arc::clone(&database)));

    let enrollment_service = Arc::new(EnrollmentService::new(
        enrollment_repository.clone(),
        plan_repo,
        student_repo.clone(),
        Arc::new(NotificationDispatcher::new(job_repository.clone())),
    ));

    let checkin_service = Arc::new(CheckinService::new(
        checkin_repo,
        student_repo,
        CheckinPolicy::default(),
    ));

    let mailer = Arc::new(RecordingMailer::default());
    let background_worker = Arc::new(
        BackgroundWorker::new(job_repository.clone(), Duration::from_millis(20)).with_handler(
            Arc::new(EnrollmentMailJob::new(mailer.clone(), "Gympoint <test@gympoint.com>")),
        ),
    );

    TestServices {
        database,
        job_repository,
        enrollment_repository,
        enrollment_service,
        checkin_service,
        background_worker,
        mailer,
    }
}
