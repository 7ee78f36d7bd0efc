use crate::modules::plan::domain::entities::Plan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted enrollment. `end_date` and `price` are snapshots derived from the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Enrollment joined with its student and plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentDetails {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub student: StudentSummary,
    pub plan: Plan,
}

/// Which student columns a joined read carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentFields {
    /// id and name
    Summary,
    /// id, name and email
    WithEmail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
}

/// Fields written on update; a `None` student keeps the current one
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentChanges {
    pub student_id: Option<i32>,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
}
