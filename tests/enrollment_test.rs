//! Enrollment engine rules: duplicates, capacity, prerequisites, load.

use registrar::RegistrarError;
use registrar::models::course::Course;
use registrar::models::student::{ClassYear, Student, StudentLevel};
use registrar::services::enrollment_service::{
    DEFAULT_MAX_CONCURRENT_ENROLLMENTS, add_grade, drop_course, enroll_course,
};

// Helper to create a test student
fn create_student(name: &str) -> Student {
    let email = format!("{}@student.edu", name.to_lowercase().replace(' ', "."));
    Student::new(
        name,
        &email,
        "555-0000",
        "CS",
        StudentLevel::Undergraduate {
            class_year: ClassYear::Freshman,
        },
    )
    .expect("Failed to create student")
}

// Helper to create a test course
fn create_course(code: &str, prerequisites: &[&str], capacity: usize) -> Course {
    let prerequisites = prerequisites.iter().map(|p| p.to_string()).collect();
    Course::new(code, code, "CS", 3, prerequisites, capacity).expect("Failed to create course")
}

fn enroll(student: &mut Student, course: &mut Course) -> Result<(), RegistrarError> {
    enroll_course(student, course, DEFAULT_MAX_CONCURRENT_ENROLLMENTS)
}

#[test]
fn test_enrolling_twice_reports_duplicate_once() {
    let mut student = create_student("Sarah Johnson");
    let mut course = create_course("CS101", &[], 30);

    enroll(&mut student, &mut course).expect("first enrollment");
    let err = enroll(&mut student, &mut course).unwrap_err();

    assert_eq!(
        err,
        RegistrarError::DuplicateEnrollment {
            course: "CS101".to_string()
        }
    );
    // The seat was taken exactly once.
    assert_eq!(course.enrolled_count(), 1);
    assert_eq!(student.current_load(), 1);
}

#[test]
fn test_full_course_rejects_enrollment_until_a_seat_frees() {
    let mut course = create_course("CS101", &[], 2);
    let mut first = create_student("First Student");
    let mut second = create_student("Second Student");
    let mut third = create_student("Third Student");

    enroll(&mut first, &mut course).expect("seat 1");
    enroll(&mut second, &mut course).expect("seat 2");

    let err = enroll(&mut third, &mut course).unwrap_err();
    assert_eq!(
        err,
        RegistrarError::Capacity {
            course: "CS101".to_string()
        }
    );
    assert_eq!(course.enrolled_count(), 2);
    assert_eq!(third.current_load(), 0);

    // Dropping one student frees exactly one seat.
    drop_course(&mut first, &mut course).expect("drop");
    assert_eq!(course.available_seats(), 1);
    enroll(&mut third, &mut course).expect("freed seat");
    assert!(course.is_full());
}

#[test]
fn test_prerequisite_requires_a_recorded_grade_entry() {
    let mut student = create_student("Sarah Johnson");
    let mut course = create_course("CS201", &["CS101"], 30);

    let err = enroll(&mut student, &mut course).unwrap_err();
    assert_eq!(
        err,
        RegistrarError::Prerequisite {
            course: "CS201".to_string(),
            missing: "CS101".to_string(),
        }
    );

    // Any recorded entry satisfies the prerequisite, regardless of grade.
    add_grade(&mut student, "CS101", 1.0, 3).expect("grade");
    enroll(&mut student, &mut course).expect("prerequisite met");
    assert!(student.is_enrolled_in("CS201"));
}

#[test]
fn test_concurrent_enrollment_is_capped() {
    let mut student = create_student("Busy Student");
    let mut courses: Vec<Course> = (0..=DEFAULT_MAX_CONCURRENT_ENROLLMENTS)
        .map(|i| create_course(&format!("CS{}", 100 + i), &[], 30))
        .collect();

    for course in courses.iter_mut().take(DEFAULT_MAX_CONCURRENT_ENROLLMENTS) {
        enroll(&mut student, course).expect("within limit");
    }

    let over = courses.last_mut().expect("course");
    let err = enroll(&mut student, over).unwrap_err();
    assert_eq!(
        err,
        RegistrarError::Overload {
            limit: DEFAULT_MAX_CONCURRENT_ENROLLMENTS
        }
    );
    assert_eq!(student.current_load(), DEFAULT_MAX_CONCURRENT_ENROLLMENTS);
    assert_eq!(over.enrolled_count(), 0);
}

#[test]
fn test_dropping_an_unenrolled_course_fails() {
    let mut student = create_student("Sarah Johnson");
    let mut course = create_course("CS101", &[], 30);

    let err = drop_course(&mut student, &mut course).unwrap_err();
    assert_eq!(
        err,
        RegistrarError::NotEnrolled {
            course: "CS101".to_string()
        }
    );
}

#[test]
fn test_enrollment_does_not_require_same_department() {
    let mut student = create_student("Alex Chen");
    let mut course =
        Course::new("MATH101", "Calculus I", "MATH", 4, vec![], 30).expect("course");

    enroll(&mut student, &mut course).expect("cross-department enrollment");
    assert!(course.enrolled_students().contains(student.student_id()));
}
