/// HTTP surface: every module router mounted on one axum `Router`
pub mod health;
pub mod middleware;
pub mod registry;

pub use registry::{build_router, Services};
