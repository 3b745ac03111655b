//! Services Layer
//!
//! Pure business logic over the in-memory model: the enrollment/GPA engine
//! and the multi-department registration system.

pub mod enrollment_service;
pub mod registration_service;

// Re-export for convenience
pub use enrollment_service::*;
pub use registration_service::RegistrationSystem;
