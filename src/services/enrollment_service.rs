//! Enrollment Service - Pure business logic for course membership and grades
//!
//! Free functions over a student and a course. Every rule is checked before
//! any state changes, so a rejected operation leaves both sides untouched.

use std::fmt;

use crate::domain::RegistrarError;
use crate::models::course::Course;
use crate::models::student::{GradeEntry, Student};

/// Default cap on concurrent enrollments per student.
pub const DEFAULT_MAX_CONCURRENT_ENROLLMENTS: usize = 6;

const DEANS_LIST_GPA: f64 = 3.5;
const GOOD_STANDING_GPA: f64 = 2.0;

/// Standing derived from the current GPA. Band lower bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcademicStatus {
    DeansList,
    GoodStanding,
    Probation,
}

impl fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AcademicStatus::DeansList => "Dean's List",
            AcademicStatus::GoodStanding => "Good Standing",
            AcademicStatus::Probation => "Probation",
        };
        write!(f, "{}", label)
    }
}

/// Enroll a student in a course.
///
/// Checks run in order: duplicate enrollment, seat capacity, prerequisites,
/// concurrent-load limit. Duplicate comes first so a student who already
/// holds a seat in a full course gets the duplicate error, not the capacity
/// one.
pub fn enroll_course(
    student: &mut Student,
    course: &mut Course,
    max_load: usize,
) -> Result<(), RegistrarError> {
    // 1. Already enrolled?
    if student.is_enrolled_in(course.code()) {
        return Err(RegistrarError::DuplicateEnrollment {
            course: course.code().to_string(),
        });
    }

    // 2. Seats left?
    if course.is_full() {
        return Err(RegistrarError::Capacity {
            course: course.code().to_string(),
        });
    }

    // 3. Prerequisites completed?
    for prerequisite in course.prerequisites() {
        if !student.has_completed(prerequisite) {
            return Err(RegistrarError::Prerequisite {
                course: course.code().to_string(),
                missing: prerequisite.clone(),
            });
        }
    }

    // 4. Concurrent-load limit.
    if student.current_load() >= max_load {
        return Err(RegistrarError::Overload { limit: max_load });
    }

    student.enrolled_courses.push(course.code().to_string());
    course
        .enrolled_students
        .insert(student.student_id().to_string());

    tracing::info!(
        "{} enrolled in {} ({}/{} seats taken)",
        student.student_id(),
        course.code(),
        course.enrolled_count(),
        course.capacity()
    );
    Ok(())
}

/// Drop a course, freeing its seat.
pub fn drop_course(student: &mut Student, course: &mut Course) -> Result<(), RegistrarError> {
    if !student.is_enrolled_in(course.code()) {
        return Err(RegistrarError::NotEnrolled {
            course: course.code().to_string(),
        });
    }

    student.enrolled_courses.retain(|c| c != course.code());
    course.enrolled_students.remove(student.student_id());

    tracing::info!("{} dropped {}", student.student_id(), course.code());
    Ok(())
}

/// Record a grade for a course, creating the history entry if absent.
///
/// Grading neither requires nor clears enrollment; repeated entries for the
/// same course accumulate across semesters.
pub fn add_grade(
    student: &mut Student,
    course_code: &str,
    grade: f64,
    credit_hours: u32,
) -> Result<(), RegistrarError> {
    if !grade.is_finite() || !(0.0..=4.0).contains(&grade) {
        return Err(RegistrarError::InvalidGrade(grade));
    }

    student
        .grade_history
        .entry(course_code.to_string())
        .or_default()
        .push(GradeEntry {
            grade,
            credit_hours,
        });

    tracing::info!(
        "Recorded grade {} ({} credits) for {} in {}",
        grade,
        credit_hours,
        student.student_id(),
        course_code
    );
    Ok(())
}

/// Credit-hour-weighted mean over every recorded grade entry.
/// Returns 0.0 when no history exists.
pub fn calculate_gpa(student: &Student) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0u32;

    for entry in student.grade_history.values().flatten() {
        total_points += entry.grade * f64::from(entry.credit_hours);
        total_credits += entry.credit_hours;
    }

    if total_credits == 0 {
        return 0.0;
    }
    total_points / f64::from(total_credits)
}

/// Standing for the student's current GPA.
pub fn academic_status(student: &Student) -> AcademicStatus {
    let gpa = calculate_gpa(student);
    if gpa >= DEANS_LIST_GPA {
        AcademicStatus::DeansList
    } else if gpa >= GOOD_STANDING_GPA {
        AcademicStatus::GoodStanding
    } else {
        AcademicStatus::Probation
    }
}

/// Whether the student meets the credit and GPA minimums for their level.
pub fn can_graduate(student: &Student) -> bool {
    let requirements = student.level().graduation_requirements();
    student.total_credits() >= requirements.min_credits
        && calculate_gpa(student) >= requirements.min_gpa
}
