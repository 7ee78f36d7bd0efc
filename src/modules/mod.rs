pub mod checkin;
pub mod enrollment;
pub mod jobs;
pub mod notification;
pub mod plan;
pub mod student;
