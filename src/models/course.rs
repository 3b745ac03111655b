use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::RegistrarError;
use crate::models::student::validate_department;

/// A university course with a seat limit and prerequisite chain.
///
/// Enrollment membership is a set of student ids; the enrollment service is
/// the only writer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    name: String,
    department: String,
    credit_hours: u32,
    prerequisites: Vec<String>,
    capacity: usize,
    pub(crate) enrolled_students: BTreeSet<String>,
    pub(crate) instructor: Option<String>,
}

impl Course {
    pub fn new(
        code: &str,
        name: &str,
        department: &str,
        credit_hours: u32,
        prerequisites: Vec<String>,
        capacity: usize,
    ) -> Result<Self, RegistrarError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(RegistrarError::Validation(
                "course code must be a non-empty string".to_string(),
            ));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistrarError::Validation(
                "course name must be a non-empty string".to_string(),
            ));
        }
        if credit_hours == 0 {
            return Err(RegistrarError::Validation(
                "credit hours must be a positive integer".to_string(),
            ));
        }
        if capacity == 0 {
            return Err(RegistrarError::Validation(
                "capacity must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            department: validate_department(department)?,
            credit_hours,
            prerequisites,
            capacity,
            enrolled_students: BTreeSet::new(),
            instructor: None,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn credit_hours(&self) -> u32 {
        self.credit_hours
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Assigned instructor's faculty id, if any.
    pub fn instructor(&self) -> Option<&str> {
        self.instructor.as_deref()
    }

    pub fn enrolled_students(&self) -> &BTreeSet<String> {
        &self.enrolled_students
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled_students.len()
    }

    pub fn available_seats(&self) -> usize {
        self.capacity.saturating_sub(self.enrolled_students.len())
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_students.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_constructor_inputs() {
        assert!(Course::new("CS101", "Intro to Computer Science", "CS", 3, vec![], 30).is_ok());
        assert!(Course::new("", "Intro", "CS", 3, vec![], 30).is_err());
        assert!(Course::new("CS101", "  ", "CS", 3, vec![], 30).is_err());
        assert!(Course::new("CS101", "Intro", "CS", 0, vec![], 30).is_err());
        assert!(Course::new("CS101", "Intro", "CS", 3, vec![], 0).is_err());
    }

    #[test]
    fn seat_accounting_starts_empty() {
        let course = Course::new("CS101", "Intro", "CS", 3, vec![], 2).unwrap();
        assert_eq!(course.enrolled_count(), 0);
        assert_eq!(course.available_seats(), 2);
        assert!(!course.is_full());
    }
}
