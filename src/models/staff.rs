use serde::{Deserialize, Serialize};

use crate::domain::{RegistrarError, Role};
use crate::models::person::Person;
use crate::models::student::validate_department;

/// Non-teaching staff record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub person: Person,
    staff_id: String,
    department: String,
    position: String,
    salary: f64,
}

impl Staff {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        department: &str,
        position: &str,
        salary: f64,
    ) -> Result<Self, RegistrarError> {
        let person = Person::new(name, email, phone)?;
        let department = validate_department(department)?;
        let position = position.trim();
        if position.is_empty() {
            return Err(RegistrarError::Validation(
                "position must be a non-empty string".to_string(),
            ));
        }
        if !salary.is_finite() || salary < 0.0 {
            return Err(RegistrarError::Validation(
                "salary cannot be negative".to_string(),
            ));
        }
        let staff_id = format!("STA{}", person.id());
        Ok(Self {
            person,
            staff_id,
            department,
            position: position.to_string(),
            salary,
        })
    }

    pub fn staff_id(&self) -> &str {
        &self.staff_id
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

impl Role for Staff {
    fn role(&self) -> String {
        format!("Staff ({})", self.position)
    }

    fn responsibilities(&self) -> Vec<String> {
        vec![
            format!("Support the {} department", self.department),
            "Maintain administrative records".to_string(),
            "Assist students and faculty".to_string(),
        ]
    }
}
