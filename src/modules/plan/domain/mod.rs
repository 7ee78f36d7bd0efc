pub mod entities;
pub mod repository;

pub use entities::Plan;
pub use repository::PlanRepository;
