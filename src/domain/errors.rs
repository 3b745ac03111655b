//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! All of them are recoverable conditions the caller is expected to handle;
//! a failed operation leaves every entity unchanged.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrarError {
    /// Entity not found by id or code
    NotFound,
    /// Validation error with message
    Validation(String),
    /// Course enrollment is at capacity
    Capacity { course: String },
    /// A prerequisite has no recorded grade entry
    Prerequisite { course: String, missing: String },
    /// Student is already enrolled in the course
    DuplicateEnrollment { course: String },
    /// Concurrent enrollment limit reached
    Overload { limit: usize },
    /// Student is not enrolled in the course
    NotEnrolled { course: String },
    /// Grade outside the 0.0-4.0 scale
    InvalidGrade(f64),
    /// Record is locked against mutation
    RecordLocked,
}

impl fmt::Display for RegistrarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrarError::NotFound => write!(f, "Entity not found"),
            RegistrarError::Validation(msg) => write!(f, "Validation error: {}", msg),
            RegistrarError::Capacity { course } => {
                write!(f, "Course {} is full", course)
            }
            RegistrarError::Prerequisite { course, missing } => {
                write!(
                    f,
                    "Course {} requires {} to be completed first",
                    course, missing
                )
            }
            RegistrarError::DuplicateEnrollment { course } => {
                write!(f, "Already enrolled in {}", course)
            }
            RegistrarError::Overload { limit } => {
                write!(f, "Cannot enroll in more than {} courses at once", limit)
            }
            RegistrarError::NotEnrolled { course } => {
                write!(f, "Not enrolled in {}", course)
            }
            RegistrarError::InvalidGrade(grade) => {
                write!(f, "Grade {} is outside the 0.0-4.0 scale", grade)
            }
            RegistrarError::RecordLocked => write!(f, "Student record is locked"),
        }
    }
}

impl std::error::Error for RegistrarError {}
