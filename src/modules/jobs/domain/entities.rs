/// Domain entities for background job system
///
/// Jobs represent async tasks, such as the enrollment confirmation mail, that
/// are queued by request handlers and processed by background workers.
use crate::modules::enrollment::domain::entities::EnrollmentDetails;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PRIORITY: i32 = 5;

/// Job status enum matching database type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Job type enum. The task key names the worker routine that handles a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    EnrollmentMail,
}

impl JobType {
    pub fn key(&self) -> &'static str {
        match self {
            JobType::EnrollmentMail => "EnrollmentMail",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EnrollmentMail" => Ok(JobType::EnrollmentMail),
            _ => Err(format!("Unknown task key: {}", s)),
        }
    }
}

/// Job payload for enrollment confirmation mails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentMailPayload {
    pub enrollment: EnrollmentDetails,
}

/// New job to be queued (before insertion to database)
#[derive(Debug, Clone)]
pub struct Job {
    pub job_type: JobType,
    pub payload: serde_json::Value,
    pub priority: i32,
}

impl Job {
    pub fn new(job_type: JobType, payload: serde_json::Value) -> Self {
        Self {
            job_type,
            payload,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Create a new enrollment mail job
    pub fn enrollment_mail(enrollment: &EnrollmentDetails) -> Result<Self, serde_json::Error> {
        let payload = EnrollmentMailPayload {
            enrollment: enrollment.clone(),
        };
        Ok(Self::new(
            JobType::EnrollmentMail,
            serde_json::to_value(payload)?,
        ))
    }
}

/// Job record from database (with metadata)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub job_type: String,
    pub payload: serde_json::Value,
    pub priority: i32,
    pub status: JobStatus,
    pub attempts: i32,
    pub max_attempts: i32,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl JobRecord {
    /// Parse job type
    pub fn parse_job_type(&self) -> Result<JobType, String> {
        self.job_type.parse()
    }

    /// Check if job can be retried
    pub fn can_retry(&self) -> bool {
        self.attempts < self.max_attempts
    }

    pub fn parse_enrollment_mail_payload(
        &self,
    ) -> Result<EnrollmentMailPayload, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
