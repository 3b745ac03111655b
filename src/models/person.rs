use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::RegistrarError;

/// Shared identity record for every person affiliated with the university.
///
/// The id and creation timestamp are fixed at construction; contact fields
/// stay mutable through validated setters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: String,
    name: String,
    email: String,
    phone: String,
    created_at: DateTime<Utc>,
}

impl Person {
    pub fn new(name: &str, email: &str, phone: &str) -> Result<Self, RegistrarError> {
        Ok(Self {
            id: short_id(),
            name: validate_name(name)?,
            email: validate_email(email)?,
            phone: validate_phone(phone)?,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), RegistrarError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), RegistrarError> {
        self.email = validate_email(email)?;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: &str) -> Result<(), RegistrarError> {
        self.phone = validate_phone(phone)?;
        Ok(())
    }
}

/// 8-character id derived from a v4 UUID.
fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

fn validate_name(name: &str) -> Result<String, RegistrarError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RegistrarError::Validation(
            "name must be a non-empty string".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Minimal local@domain check; the stored form is lowercased.
fn validate_email(email: &str) -> Result<String, RegistrarError> {
    let trimmed = email.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.') && !domain.contains('@')
        }
        None => false,
    };
    if !valid {
        return Err(RegistrarError::Validation(format!(
            "invalid email format: {}",
            trimmed
        )));
    }
    Ok(trimmed.to_lowercase())
}

fn validate_phone(phone: &str) -> Result<String, RegistrarError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(RegistrarError::Validation(
            "phone must be a non-empty string".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_contact_fields() {
        let person = Person::new("Alice Johnson", "Alice.Johnson@university.edu", "555-0101")
            .expect("valid person");
        assert_eq!(person.name(), "Alice Johnson");
        assert_eq!(person.email(), "alice.johnson@university.edu");
        assert_eq!(person.id().len(), 8);
    }

    #[test]
    fn rejects_blank_name() {
        let err = Person::new("   ", "a@b.edu", "555-0101").unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["plainaddress", "@no-local.edu", "no-domain@", "user@nodot"] {
            let err = Person::new("Bob", email, "555-0102").unwrap_err();
            assert!(matches!(err, RegistrarError::Validation(_)), "{}", email);
        }
    }

    #[test]
    fn setters_validate_and_apply() {
        let mut person = Person::new("Bob Smith", "bob@student.edu", "555-0102").unwrap();
        person.set_name("Robert Smith").unwrap();
        assert_eq!(person.name(), "Robert Smith");

        assert!(person.set_email("not-an-email").is_err());
        assert_eq!(person.email(), "bob@student.edu");
    }
}
