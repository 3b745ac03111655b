use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::RegistrarError;
use crate::models::student::Student;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessAction {
    Read,
    Update,
    Lock,
    Unlock,
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccessAction::Read => "read",
            AccessAction::Update => "update",
            AccessAction::Lock => "lock",
            AccessAction::Unlock => "unlock",
        };
        write!(f, "{}", label)
    }
}

/// Contact fields reachable through the secure wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordField {
    Name,
    Email,
    Phone,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordField::Name => "name",
            RecordField::Email => "email",
            RecordField::Phone => "phone",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub action: AccessAction,
    pub field: String,
    pub timestamp: DateTime<Utc>,
}

/// Access-controlled wrapper around one student record.
///
/// Every read and every mutation attempt appends to the log before the
/// operation runs, so rejected updates still leave a trace. The lock flag
/// gates mutation only; reads stay available while locked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecureStudentRecord {
    student: Student,
    access_log: Vec<AccessLogEntry>,
    locked: bool,
}

impl SecureStudentRecord {
    pub fn new(student: Student) -> Self {
        Self {
            student,
            access_log: Vec::new(),
            locked: false,
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Releases the wrapped student, discarding the log and lock state.
    pub fn into_inner(self) -> Student {
        self.student
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn access_log(&self) -> &[AccessLogEntry] {
        &self.access_log
    }

    /// Logged read of a contact field. Permitted in both lock states.
    pub fn access(&mut self, field: RecordField) -> String {
        self.log(AccessAction::Read, &field.to_string());
        match field {
            RecordField::Name => self.student.person.name().to_string(),
            RecordField::Email => self.student.person.email().to_string(),
            RecordField::Phone => self.student.person.phone().to_string(),
        }
    }

    /// Logged mutation of a contact field. The attempt is recorded even
    /// when the record is locked or the value fails validation.
    pub fn update(&mut self, field: RecordField, value: &str) -> Result<(), RegistrarError> {
        self.log(AccessAction::Update, &field.to_string());
        if self.locked {
            return Err(RegistrarError::RecordLocked);
        }
        match field {
            RecordField::Name => self.student.person.set_name(value),
            RecordField::Email => self.student.person.set_email(value),
            RecordField::Phone => self.student.person.set_phone(value),
        }
    }

    pub fn lock(&mut self) {
        self.locked = true;
        self.log(AccessAction::Lock, "record");
    }

    pub fn unlock(&mut self) {
        self.locked = false;
        self.log(AccessAction::Unlock, "record");
    }

    fn log(&mut self, action: AccessAction, field: &str) {
        self.access_log.push(AccessLogEntry {
            action,
            field: field.to_string(),
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::{ClassYear, StudentLevel};

    fn record() -> SecureStudentRecord {
        let student = Student::new(
            "John Doe",
            "john.doe@student.edu",
            "555-0201",
            "MATH",
            StudentLevel::Undergraduate {
                class_year: ClassYear::Junior,
            },
        )
        .unwrap();
        SecureStudentRecord::new(student)
    }

    #[test]
    fn update_is_rejected_while_locked_but_still_logged() {
        let mut record = record();
        record.lock();
        let err = record.update(RecordField::Name, "Jane Doe").unwrap_err();
        assert_eq!(err, RegistrarError::RecordLocked);
        assert_eq!(record.student().person.name(), "John Doe");

        // One entry for the lock, one for the rejected update.
        assert_eq!(record.access_log().len(), 2);
        assert_eq!(record.access_log()[1].action, AccessAction::Update);

        record.unlock();
        record.update(RecordField::Name, "Jane Doe").unwrap();
        assert_eq!(record.student().person.name(), "Jane Doe");
    }

    #[test]
    fn reads_are_permitted_while_locked() {
        let mut record = record();
        record.lock();
        assert_eq!(record.access(RecordField::Email), "john.doe@student.edu");
        assert!(record.is_locked());
    }

    #[test]
    fn failed_validation_keeps_the_log_entry() {
        let mut record = record();
        assert!(record.update(RecordField::Email, "nope").is_err());
        assert_eq!(record.access_log().len(), 1);
        assert_eq!(record.student().person.email(), "john.doe@student.edu");
    }
}
