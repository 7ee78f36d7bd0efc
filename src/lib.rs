pub mod modules;
pub mod routes;
mod schema;
pub mod shared;

use modules::{
    checkin::{CheckinRepositoryImpl, CheckinService},
    enrollment::{EnrollmentRepositoryImpl, EnrollmentService, NotificationDispatcher},
    jobs::{BackgroundWorker, JobRepository, JobRepositoryImpl, TaskQueue},
    notification::{EnrollmentMailJob, LogMailer},
    plan::{PlanRepositoryImpl, PlanService},
    student::StudentRepositoryImpl,
};
use routes::{build_router, Services};
use shared::errors::{AppError, AppResult};
use shared::utils::logger::init_logger;
use shared::{AppConfig, Database};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Wire repositories and services around one database handle.
pub fn build_services(config: &AppConfig, database: Arc<Database>) -> Services {
    let job_repository = Arc::new(JobRepositoryImpl::new(Arc::clone(&database)));
    let task_queue: Arc<dyn TaskQueue> = job_repository.clone();
    let jobs: Arc<dyn JobRepository> = job_repository;

    let plan_repo = Arc::new(PlanRepositoryImpl::new(Arc::clone(&database)));
    let student_repo = Arc::new(StudentRepositoryImpl::new(Arc::clone(&database)));
    let enrollment_repo = Arc::new(EnrollmentRepositoryImpl::new(Arc::clone(&database)));
    let checkin_repo = Arc::new(CheckinRepositoryImpl::new(Arc::clone(&database)));

    let dispatcher = Arc::new(NotificationDispatcher::new(task_queue));

    let worker = BackgroundWorker::new(jobs, config.worker.poll_interval)
        .with_handler(Arc::new(EnrollmentMailJob::new(
            Arc::new(LogMailer::new()),
            config.mail_from.clone(),
        )));

    Services {
        database,
        worker: Arc::new(worker),
        plans: Arc::new(PlanService::new(plan_repo.clone())),
        enrollments: Arc::new(EnrollmentService::new(
            enrollment_repo,
            plan_repo,
            student_repo.clone(),
            dispatcher,
        )),
        checkins: Arc::new(CheckinService::new(
            checkin_repo,
            student_repo,
            config.checkin_policy,
        )),
    }
}

/// Start the HTTP server and the background worker; returns after Ctrl-C.
pub async fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    init_logger();

    let database = Arc::new(Database::new(&config.database)?);
    database.run_migrations()?;

    let services = build_services(&config, database);
    let shutdown = CancellationToken::new();

    let worker_handle = if config.worker.enabled {
        Some(tokio::spawn(
            Arc::clone(&services.worker).run(shutdown.child_token()),
        ))
    } else {
        log_info!("Background worker disabled; queued mails will wait");
        None
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| {
            AppError::ConfigError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;
    log_info!("Listening on http://{}", config.bind_address);

    let server_token = shutdown.clone();
    let served = axum::serve(listener, build_router(services))
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log_error!("Failed to listen for shutdown signal: {}", e);
            }
            log_info!("Shutdown requested");
            server_token.cancel();
        })
        .await;

    shutdown.cancel();
    if let Some(handle) = worker_handle {
        if let Err(e) = handle.await {
            log_error!("Background worker ended abnormally: {}", e);
        }
    }

    served.map_err(|e| AppError::InternalError(format!("HTTP server failed: {}", e)))
}
