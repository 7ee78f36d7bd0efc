pub mod mailer;

pub use mailer::{MailMessage, Mailer};
