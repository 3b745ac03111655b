//! Demo data used by the binary and shared by integration tests.

use crate::config::Config;
use crate::domain::RegistrarError;
use crate::models::course::Course;
use crate::models::department::Department;
use crate::models::faculty::{ContractType, Faculty, FacultyRank};
use crate::models::staff::Staff;
use crate::models::student::{ClassYear, DegreeType, Student, StudentLevel};
use crate::services::registration_service::RegistrationSystem;

/// A seeded registration system plus the ids the demo flow drives.
pub struct DemoData {
    pub system: RegistrationSystem,
    pub cs_student: String,
    pub math_student: String,
    pub grad_student: String,
    pub cs_professor: String,
    pub cs_lecturer: String,
}

/// Three departments with prerequisite chains, faculty and students.
pub fn seed_demo_data(config: &Config) -> Result<DemoData, RegistrarError> {
    let mut system = RegistrationSystem::with_max_load(config.max_concurrent_enrollments);
    let capacity = config.default_course_capacity;

    // 1. Departments
    system.add_department(Department::new("CS", "Computer Science")?)?;
    system.add_department(Department::new("MATH", "Mathematics")?)?;
    system.add_department(Department::new("STAT", "Statistics")?)?;

    // 2. Courses
    let courses = [
        ("CS101", "Intro to Programming", "CS", 3, vec![]),
        ("CS201", "Data Structures", "CS", 3, vec!["CS101"]),
        ("CS301", "Machine Learning", "CS", 3, vec!["CS201", "MATH201"]),
        ("MATH101", "Calculus I", "MATH", 4, vec![]),
        ("MATH201", "Linear Algebra", "MATH", 3, vec!["MATH101"]),
        ("STAT201", "Intro to Statistics", "STAT", 3, vec!["MATH101"]),
        ("STAT301", "Statistical Modeling", "STAT", 3, vec!["STAT201", "MATH201"]),
    ];
    for (code, name, dept, credits, prereqs) in courses {
        let prerequisites = prereqs.into_iter().map(String::from).collect();
        system.add_course(Course::new(code, name, dept, credits, prerequisites, capacity)?)?;
    }

    // 3. Faculty and department heads
    let cs_professor = system.add_faculty(Faculty::new(
        "Dr. John McCarthy",
        "mccarthy@university.edu",
        "555-0601",
        "CS",
        95_000.0,
        FacultyRank::Professor {
            tenured: true,
            research_load: 2.0,
        },
    )?);
    let math_professor = system.add_faculty(Faculty::new(
        "Dr. Emmy Noether",
        "noether@university.edu",
        "555-0602",
        "MATH",
        88_000.0,
        FacultyRank::Professor {
            tenured: true,
            research_load: 3.0,
        },
    )?);
    let stat_professor = system.add_faculty(Faculty::new(
        "Dr. Ronald Fisher",
        "fisher@university.edu",
        "555-0603",
        "STAT",
        85_000.0,
        FacultyRank::Professor {
            tenured: true,
            research_load: 1.5,
        },
    )?);
    let cs_lecturer = system.add_faculty(Faculty::new(
        "Ada Lovelace",
        "ada.lovelace@university.edu",
        "555-0402",
        "CS",
        65_000.0,
        FacultyRank::Lecturer {
            contract: ContractType::FullTime,
        },
    )?);
    system.add_faculty(Faculty::new(
        "Grace Hopper",
        "grace.hopper@university.edu",
        "555-0403",
        "CS",
        22_000.0,
        FacultyRank::Ta {
            hours_per_week: 20.0,
        },
    )?);

    system.set_department_head("CS", &cs_professor)?;
    system.set_department_head("MATH", &math_professor)?;
    system.set_department_head("STAT", &stat_professor)?;

    system.assign_faculty("CS101", &cs_lecturer)?;
    system.assign_faculty("CS201", &cs_professor)?;
    system.assign_faculty("CS301", &cs_professor)?;
    system.assign_faculty("MATH101", &math_professor)?;

    // 4. Staff
    system.add_staff(Staff::new(
        "Alice Johnson",
        "alice.johnson@university.edu",
        "555-0101",
        "CS",
        "Academic Advisor",
        45_000.0,
    )?);

    // 5. Students
    let cs_student = system.add_student(Student::new(
        "Alex Chen",
        "alex.chen@student.edu",
        "555-0701",
        "CS",
        StudentLevel::Undergraduate {
            class_year: ClassYear::Sophomore,
        },
    )?);
    let math_student = system.add_student(Student::new(
        "Maria Rodriguez",
        "maria.rodriguez@student.edu",
        "555-0702",
        "MATH",
        StudentLevel::Undergraduate {
            class_year: ClassYear::Freshman,
        },
    )?);
    let grad_student = system.add_student(Student::new(
        "Carol White",
        "carol.white@student.edu",
        "555-0503",
        "CS",
        StudentLevel::Graduate {
            degree: DegreeType::PhD,
        },
    )?);

    Ok(DemoData {
        system,
        cs_student,
        math_student,
        grad_student,
        cs_professor,
        cs_lecturer,
    })
}
