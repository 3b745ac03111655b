//! Secure record wrapper: lock gating and the append-only access log.

use registrar::RegistrarError;
use registrar::models::secure_record::{AccessAction, RecordField, SecureStudentRecord};
use registrar::models::student::{ClassYear, Student, StudentLevel};

fn create_record() -> SecureStudentRecord {
    let student = Student::new(
        "John Doe",
        "john.doe@student.edu",
        "555-0201",
        "MATH",
        StudentLevel::Undergraduate {
            class_year: ClassYear::Junior,
        },
    )
    .expect("Failed to create student");
    SecureStudentRecord::new(student)
}

#[test]
fn test_locked_update_fails_then_succeeds_after_unlock() {
    let mut record = create_record();
    record.lock();

    let err = record.update(RecordField::Phone, "555-0999").unwrap_err();
    assert_eq!(err, RegistrarError::RecordLocked);
    assert_eq!(record.student().person.phone(), "555-0201");

    record.unlock();
    record
        .update(RecordField::Phone, "555-0999")
        .expect("update after unlock");
    assert_eq!(record.student().person.phone(), "555-0999");
}

#[test]
fn test_every_operation_is_logged_in_order() {
    let mut record = create_record();

    let _ = record.access(RecordField::Name);
    record.lock();
    let _ = record.update(RecordField::Name, "Jane Doe");
    record.unlock();

    let actions: Vec<AccessAction> = record.access_log().iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AccessAction::Read,
            AccessAction::Lock,
            AccessAction::Update,
            AccessAction::Unlock,
        ]
    );

    // Timestamps never go backwards.
    let stamps: Vec<_> = record.access_log().iter().map(|e| e.timestamp).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_update_validates_through_the_person_setters() {
    let mut record = create_record();

    let err = record.update(RecordField::Email, "not-an-email").unwrap_err();
    assert!(matches!(err, RegistrarError::Validation(_)));
    assert_eq!(record.student().person.email(), "john.doe@student.edu");

    // The rejected attempt is still on the log.
    assert_eq!(record.access_log().len(), 1);
}

#[test]
fn test_into_inner_releases_the_student() {
    let mut record = create_record();
    record
        .update(RecordField::Name, "Jane Doe")
        .expect("update");
    let student = record.into_inner();
    assert_eq!(student.person.name(), "Jane Doe");
}
