use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{RegistrarError, Role};
use crate::models::person::Person;

/// One recorded grade for a course, on the 0.0-4.0 scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub grade: f64,
    pub credit_hours: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl fmt::Display for ClassYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClassYear::Freshman => "Freshman",
            ClassYear::Sophomore => "Sophomore",
            ClassYear::Junior => "Junior",
            ClassYear::Senior => "Senior",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeType {
    Masters,
    PhD,
}

impl fmt::Display for DegreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DegreeType::Masters => "Masters",
            DegreeType::PhD => "PhD",
        };
        write!(f, "{}", label)
    }
}

/// Closed set of student variants replacing the open-ended subclassing of
/// a traditional student hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StudentLevel {
    Undergraduate { class_year: ClassYear },
    Graduate { degree: DegreeType },
}

/// Minimum totals a student must reach before graduating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraduationRequirements {
    pub min_credits: u32,
    pub min_gpa: f64,
}

impl StudentLevel {
    pub fn graduation_requirements(&self) -> GraduationRequirements {
        match self {
            StudentLevel::Undergraduate { .. } => GraduationRequirements {
                min_credits: 120,
                min_gpa: 2.0,
            },
            StudentLevel::Graduate {
                degree: DegreeType::Masters,
            } => GraduationRequirements {
                min_credits: 36,
                min_gpa: 3.0,
            },
            StudentLevel::Graduate {
                degree: DegreeType::PhD,
            } => GraduationRequirements {
                min_credits: 72,
                min_gpa: 3.0,
            },
        }
    }

    fn id_prefix(&self) -> &'static str {
        match self {
            StudentLevel::Undergraduate { .. } => "UG",
            StudentLevel::Graduate { .. } => "GR",
        }
    }
}

/// Student record: identity, department affiliation, current enrollment and
/// the full grade history.
///
/// Enrollment state is only mutated through the enrollment service so the
/// no-duplicate and load-limit invariants hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub person: Person,
    student_id: String,
    department: String,
    level: StudentLevel,
    pub(crate) enrolled_courses: Vec<String>,
    pub(crate) grade_history: BTreeMap<String, Vec<GradeEntry>>,
}

impl Student {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        department: &str,
        level: StudentLevel,
    ) -> Result<Self, RegistrarError> {
        let person = Person::new(name, email, phone)?;
        let department = validate_department(department)?;
        let student_id = format!("{}{}", level.id_prefix(), person.id());
        Ok(Self {
            person,
            student_id,
            department,
            level,
            enrolled_courses: Vec::new(),
            grade_history: BTreeMap::new(),
        })
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn level(&self) -> StudentLevel {
        self.level
    }

    /// Currently enrolled course codes, in enrollment order.
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Recorded grades per course code.
    pub fn grade_history(&self) -> &BTreeMap<String, Vec<GradeEntry>> {
        &self.grade_history
    }

    pub fn is_enrolled_in(&self, course_code: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == course_code)
    }

    /// A course counts as completed once any grade entry exists for it.
    pub fn has_completed(&self, course_code: &str) -> bool {
        self.grade_history.contains_key(course_code)
    }

    /// Number of concurrent enrollments.
    pub fn current_load(&self) -> usize {
        self.enrolled_courses.len()
    }

    /// Total credit hours across all recorded grade entries.
    pub fn total_credits(&self) -> u32 {
        self.grade_history
            .values()
            .flatten()
            .map(|entry| entry.credit_hours)
            .sum()
    }
}

impl Role for Student {
    fn role(&self) -> String {
        match self.level {
            StudentLevel::Undergraduate { class_year } => {
                format!("Undergraduate Student ({})", class_year)
            }
            StudentLevel::Graduate { degree } => format!("Graduate Student ({})", degree),
        }
    }

    fn responsibilities(&self) -> Vec<String> {
        let mut duties = vec![
            "Attend classes regularly".to_string(),
            "Complete assignments and projects".to_string(),
            "Maintain academic standards".to_string(),
            format!("Complete degree requirements in {}", self.department),
        ];
        if let StudentLevel::Graduate { .. } = self.level {
            duties.extend([
                "Conduct original research".to_string(),
                "Work with thesis advisor".to_string(),
                "Complete thesis or dissertation".to_string(),
            ]);
        }
        duties
    }
}

pub(crate) fn validate_department(department: &str) -> Result<String, RegistrarError> {
    let trimmed = department.trim();
    if trimmed.is_empty() {
        return Err(RegistrarError::Validation(
            "department must be a non-empty string".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undergrad() -> Student {
        Student::new(
            "Bob Smith",
            "bob.smith@student.edu",
            "555-0102",
            "CS",
            StudentLevel::Undergraduate {
                class_year: ClassYear::Sophomore,
            },
        )
        .unwrap()
    }

    #[test]
    fn id_is_prefixed_by_level() {
        assert!(undergrad().student_id().starts_with("UG"));

        let grad = Student::new(
            "Carol Davis",
            "carol.davis@student.edu",
            "555-0103",
            "DS",
            StudentLevel::Graduate {
                degree: DegreeType::PhD,
            },
        )
        .unwrap();
        assert!(grad.student_id().starts_with("GR"));
    }

    #[test]
    fn role_strings_carry_the_variant() {
        let student = undergrad();
        assert_eq!(student.role(), "Undergraduate Student (Sophomore)");

        let grad = Student::new(
            "Carol Davis",
            "carol.davis@student.edu",
            "555-0103",
            "DS",
            StudentLevel::Graduate {
                degree: DegreeType::Masters,
            },
        )
        .unwrap();
        assert_eq!(grad.role(), "Graduate Student (Masters)");
        assert!(grad.responsibilities().len() > student.responsibilities().len());
    }

    #[test]
    fn total_credits_sums_all_history_entries() {
        let mut student = undergrad();
        student.grade_history.insert(
            "CS101".to_string(),
            vec![GradeEntry {
                grade: 3.0,
                credit_hours: 3,
            }],
        );
        student.grade_history.insert(
            "MATH101".to_string(),
            vec![
                GradeEntry {
                    grade: 2.0,
                    credit_hours: 4,
                },
                GradeEntry {
                    grade: 3.5,
                    credit_hours: 4,
                },
            ],
        );
        assert_eq!(student.total_credits(), 11);
    }
}
