use crate::log_info;
use crate::modules::checkin::domain::{Checkin, CheckinError, CheckinRepository};
use crate::modules::student::domain::repository::StudentRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::config::CheckinPolicy;
use crate::shared::errors::AppError;
use chrono::{Duration, Utc};
use std::sync::Arc;

pub struct CheckinService {
    checkin_repo: Arc<dyn CheckinRepository>,
    student_repo: Arc<dyn StudentRepository>,
    policy: CheckinPolicy,
}

impl CheckinService {
    pub fn new(
        checkin_repo: Arc<dyn CheckinRepository>,
        student_repo: Arc<dyn StudentRepository>,
        policy: CheckinPolicy,
    ) -> Self {
        Self {
            checkin_repo,
            student_repo,
            policy,
        }
    }

    /// Record a check-in unless the student already used up the window's allowance.
    pub async fn checkin(&self, student_id: i32) -> Result<Checkin, CheckinError> {
        self.require_student(student_id).await?;

        let window = Duration::try_days(self.policy.window_days).ok_or_else(|| {
            AppError::ConfigError(format!(
                "Check-in window of {} days is out of range",
                self.policy.window_days
            ))
        })?;
        let since = Utc::now() - window;
        let recent = self.checkin_repo.count_since(student_id, since).await?;

        if recent >= self.policy.max_checkins {
            return Err(CheckinError::LimitReached {
                max: self.policy.max_checkins,
                days: self.policy.window_days,
            });
        }

        let checkin = self.checkin_repo.create(student_id).await?;
        log_info!(
            "Student {} checked in ({} of {} in {} days)",
            student_id,
            recent + 1,
            self.policy.max_checkins,
            self.policy.window_days
        );

        Ok(checkin)
    }

    pub async fn list(
        &self,
        student_id: i32,
        params: PaginationParams,
    ) -> Result<PaginatedResult<Checkin>, CheckinError> {
        self.require_student(student_id).await?;

        let (rows, total) = self
            .checkin_repo
            .list_for_student(student_id, params)
            .await?;

        Ok(PaginatedResult::new(rows, total, &params))
    }

    async fn require_student(&self, student_id: i32) -> Result<(), CheckinError> {
        match self.student_repo.find_by_id(student_id).await? {
            Some(_) => Ok(()),
            None => Err(CheckinError::StudentNotFound),
        }
    }
}
