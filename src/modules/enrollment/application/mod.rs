pub mod dispatcher;
pub mod service;
