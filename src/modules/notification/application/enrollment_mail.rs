use crate::log_debug;
use crate::modules::enrollment::domain::entities::EnrollmentDetails;
use crate::modules::jobs::domain::entities::{JobRecord, JobType};
use crate::modules::jobs::domain::handler::JobHandler;
use crate::modules::notification::domain::{MailMessage, Mailer};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Worker routine for `EnrollmentMail`: tells the student their enrollment went through.
pub struct EnrollmentMailJob {
    mailer: Arc<dyn Mailer>,
    from: String,
}

impl EnrollmentMailJob {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
        }
    }

    pub fn build_message(&self, details: &EnrollmentDetails) -> AppResult<MailMessage> {
        let email = details.student.email.as_deref().ok_or_else(|| {
            AppError::MailError(format!(
                "Student {} has no email in enrollment {}",
                details.student.id, details.enrollment.id
            ))
        })?;

        let body = format!(
            "Hello {name},\n\n\
             Your enrollment in the {plan} plan is confirmed.\n\n\
             Start date: {start}\n\
             End date: {end}\n\
             Total price: {price:.2}\n\n\
             See you at the gym!",
            name = details.student.name,
            plan = details.plan.title,
            start = details.enrollment.start_date.format(DATE_FORMAT),
            end = details.enrollment.end_date.format(DATE_FORMAT),
            price = details.enrollment.price,
        );

        Ok(MailMessage {
            from: self.from.clone(),
            to: format!("{} <{}>", details.student.name, email),
            subject: "Enrollment confirmed".to_string(),
            body,
        })
    }
}

#[async_trait]
impl JobHandler for EnrollmentMailJob {
    fn job_type(&self) -> JobType {
        JobType::EnrollmentMail
    }

    async fn handle(&self, job: &JobRecord) -> AppResult<()> {
        let payload = job.parse_enrollment_mail_payload().map_err(|e| {
            AppError::SerializationError(format!("Invalid enrollment mail payload: {}", e))
        })?;

        let message = self.build_message(&payload.enrollment)?;
        log_debug!(
            "Sending enrollment mail for enrollment {} to {}",
            payload.enrollment.enrollment.id,
            message.to
        );

        self.mailer.send(message).await
    }
}
