use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{RegistrarError, Role};
use crate::models::person::Person;
use crate::models::student::validate_department;

/// Load points per taught course for professors.
pub const PROFESSOR_COURSE_WEIGHT: f64 = 4.0;
/// Load points per taught course for lecturers on a full-time contract.
pub const LECTURER_COURSE_WEIGHT: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    FullTime,
    PartTime,
}

impl ContractType {
    fn weight(&self) -> f64 {
        match self {
            ContractType::FullTime => 1.0,
            ContractType::PartTime => 0.5,
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContractType::FullTime => "Full-time",
            ContractType::PartTime => "Part-time",
        };
        write!(f, "{}", label)
    }
}

/// Closed set of teaching-staff variants. Each carries the fields its
/// workload formula needs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FacultyRank {
    Professor { tenured: bool, research_load: f64 },
    Lecturer { contract: ContractType },
    Ta { hours_per_week: f64 },
}

/// Teaching staff record composing the shared [`Person`] identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub person: Person,
    faculty_id: String,
    department: String,
    salary: f64,
    rank: FacultyRank,
    pub(crate) courses_taught: Vec<String>,
}

impl Faculty {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        department: &str,
        salary: f64,
        rank: FacultyRank,
    ) -> Result<Self, RegistrarError> {
        let person = Person::new(name, email, phone)?;
        let department = validate_department(department)?;
        let faculty_id = format!("FAC{}", person.id());
        Ok(Self {
            person,
            faculty_id,
            department,
            salary: validate_salary(salary)?,
            rank,
            courses_taught: Vec::new(),
        })
    }

    pub fn faculty_id(&self) -> &str {
        &self.faculty_id
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_salary(&mut self, salary: f64) -> Result<(), RegistrarError> {
        self.salary = validate_salary(salary)?;
        Ok(())
    }

    pub fn rank(&self) -> FacultyRank {
        self.rank
    }

    /// Course codes currently taught, in assignment order.
    pub fn courses_taught(&self) -> &[String] {
        &self.courses_taught
    }

    /// Variant-specific load figure. Professors accumulate load points per
    /// course plus their research load; lecturers per course scaled by
    /// contract; TAs report weekly hours.
    pub fn calculate_workload(&self) -> f64 {
        let course_count = self.courses_taught.len() as f64;
        match self.rank {
            FacultyRank::Professor { research_load, .. } => {
                course_count * PROFESSOR_COURSE_WEIGHT + research_load
            }
            FacultyRank::Lecturer { contract } => {
                course_count * LECTURER_COURSE_WEIGHT * contract.weight()
            }
            FacultyRank::Ta { hours_per_week } => hours_per_week,
        }
    }
}

impl Role for Faculty {
    fn role(&self) -> String {
        match self.rank {
            FacultyRank::Professor { tenured: true, .. } => "Professor (Tenured)".to_string(),
            FacultyRank::Professor { tenured: false, .. } => "Professor".to_string(),
            FacultyRank::Lecturer { contract } => format!("Lecturer ({})", contract),
            FacultyRank::Ta { .. } => "Teaching Assistant".to_string(),
        }
    }

    fn responsibilities(&self) -> Vec<String> {
        match self.rank {
            FacultyRank::Professor { .. } => vec![
                "Teach assigned courses".to_string(),
                "Conduct and publish research".to_string(),
                "Advise graduate students".to_string(),
                "Serve on department committees".to_string(),
            ],
            FacultyRank::Lecturer { .. } => vec![
                "Teach assigned courses".to_string(),
                "Hold office hours".to_string(),
                "Prepare course materials".to_string(),
            ],
            FacultyRank::Ta { .. } => vec![
                "Supervise lab sessions".to_string(),
                "Grade assignments".to_string(),
                "Tutor students".to_string(),
            ],
        }
    }
}

fn validate_salary(salary: f64) -> Result<f64, RegistrarError> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(RegistrarError::Validation(
            "salary cannot be negative".to_string(),
        ));
    }
    Ok(salary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn professor(research_load: f64) -> Faculty {
        Faculty::new(
            "Dr. David Wilson",
            "david.wilson@university.edu",
            "555-0104",
            "CS",
            85_000.0,
            FacultyRank::Professor {
                tenured: true,
                research_load,
            },
        )
        .unwrap()
    }

    #[test]
    fn professor_workload_adds_research_load() {
        let mut prof = professor(2.5);
        prof.courses_taught = vec!["CS101".to_string(), "CS301".to_string()];
        assert_eq!(prof.calculate_workload(), 2.0 * PROFESSOR_COURSE_WEIGHT + 2.5);
    }

    #[test]
    fn lecturer_workload_scales_with_contract() {
        let mut lecturer = Faculty::new(
            "Emma Brown",
            "emma.brown@university.edu",
            "555-0105",
            "CS",
            60_000.0,
            FacultyRank::Lecturer {
                contract: ContractType::PartTime,
            },
        )
        .unwrap();
        lecturer.courses_taught = vec!["CS201".to_string(), "CS202".to_string()];
        assert_eq!(lecturer.calculate_workload(), 2.0 * LECTURER_COURSE_WEIGHT * 0.5);
    }

    #[test]
    fn ta_workload_is_weekly_hours() {
        let ta = Faculty::new(
            "Frank Garcia",
            "frank.garcia@university.edu",
            "555-0106",
            "CS",
            25_000.0,
            FacultyRank::Ta {
                hours_per_week: 20.0,
            },
        )
        .unwrap();
        assert_eq!(ta.calculate_workload(), 20.0);
    }

    #[test]
    fn negative_salary_is_rejected() {
        let err = Faculty::new(
            "X Y",
            "x@y.edu",
            "1",
            "CS",
            -1.0,
            FacultyRank::Lecturer {
                contract: ContractType::FullTime,
            },
        )
        .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }
}
