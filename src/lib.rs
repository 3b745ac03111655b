pub mod config;
pub mod domain;
pub mod models;
pub mod seed;
pub mod services;

// Re-exports for the common entry points
pub use domain::{RegistrarError, Role};
pub use services::registration_service::RegistrationSystem;
