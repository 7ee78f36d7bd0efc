pub mod entities;
pub mod repository;

pub use entities::Student;
pub use repository::StudentRepository;
