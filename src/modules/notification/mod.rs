/// Outbound mail
///
/// The enrollment confirmation is rendered and sent from the background
/// worker, never from the request that created the enrollment.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::enrollment_mail::EnrollmentMailJob;
pub use domain::{MailMessage, Mailer};
pub use infrastructure::LogMailer;
