pub mod enrollment_mail;
