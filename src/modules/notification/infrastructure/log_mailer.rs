use crate::log_info;
use crate::modules::notification::domain::{MailMessage, Mailer};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;

/// Mailer that writes messages to the application log instead of a mail server.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: MailMessage) -> AppResult<()> {
        if message.to.trim().is_empty() {
            return Err(AppError::MailError("Mail has no recipient".to_string()));
        }

        log_info!(
            "Mail from {} to {} | {}\n{}",
            message.from,
            message.to,
            message.subject,
            message.body
        );
        Ok(())
    }
}
