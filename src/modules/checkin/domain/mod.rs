pub mod entities;
pub mod errors;
pub mod repository;

pub use entities::Checkin;
pub use errors::CheckinError;
pub use repository::CheckinRepository;
