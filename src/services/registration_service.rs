//! Registration Service - Multi-department registry and reporting
//!
//! Owns every department (and through it every course) plus all people,
//! keyed by id. Registration resolves ids to records and delegates the
//! actual rules to the enrollment service. Cross-department registration
//! is permitted; the departmental boundary is informational only.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{RegistrarError, Role};
use crate::models::course::Course;
use crate::models::department::Department;
use crate::models::faculty::Faculty;
use crate::models::staff::Staff;
use crate::models::student::{GradeEntry, Student};
use crate::services::enrollment_service::{
    self, DEFAULT_MAX_CONCURRENT_ENROLLMENTS, academic_status, calculate_gpa,
};

pub struct RegistrationSystem {
    departments: BTreeMap<String, Department>,
    students: BTreeMap<String, Student>,
    faculty: BTreeMap<String, Faculty>,
    staff: BTreeMap<String, Staff>,
    max_concurrent_enrollments: usize,
    registration_attempts: u64,
    successful_registrations: u64,
}

impl Default for RegistrationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationSystem {
    pub fn new() -> Self {
        Self::with_max_load(DEFAULT_MAX_CONCURRENT_ENROLLMENTS)
    }

    /// Build a system with a custom concurrent-enrollment cap.
    pub fn with_max_load(max_concurrent_enrollments: usize) -> Self {
        Self {
            departments: BTreeMap::new(),
            students: BTreeMap::new(),
            faculty: BTreeMap::new(),
            staff: BTreeMap::new(),
            max_concurrent_enrollments,
            registration_attempts: 0,
            successful_registrations: 0,
        }
    }

    pub fn add_department(&mut self, department: Department) -> Result<(), RegistrarError> {
        if self.departments.contains_key(department.code()) {
            return Err(RegistrarError::Validation(format!(
                "department {} already exists",
                department.code()
            )));
        }
        self.departments
            .insert(department.code().to_string(), department);
        Ok(())
    }

    pub fn department(&self, code: &str) -> Option<&Department> {
        self.departments.get(code)
    }

    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.values()
    }

    /// Add a course to the department named by its code.
    pub fn add_course(&mut self, course: Course) -> Result<(), RegistrarError> {
        let department = self
            .departments
            .get_mut(course.department())
            .ok_or(RegistrarError::NotFound)?;
        department.add_course(course)
    }

    /// Register a student and affiliate them with their department when it
    /// exists. Returns the student id.
    pub fn add_student(&mut self, student: Student) -> String {
        let id = student.student_id().to_string();
        if let Some(department) = self.departments.get_mut(student.department()) {
            department.add_member(&id);
        }
        self.students.insert(id.clone(), student);
        id
    }

    pub fn add_faculty(&mut self, faculty: Faculty) -> String {
        let id = faculty.faculty_id().to_string();
        if let Some(department) = self.departments.get_mut(faculty.department()) {
            department.add_member(&id);
        }
        self.faculty.insert(id.clone(), faculty);
        id
    }

    pub fn add_staff(&mut self, staff: Staff) -> String {
        let id = staff.staff_id().to_string();
        if let Some(department) = self.departments.get_mut(staff.department()) {
            department.add_member(&id);
        }
        self.staff.insert(id.clone(), staff);
        id
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn faculty_member(&self, faculty_id: &str) -> Option<&Faculty> {
        self.faculty.get(faculty_id)
    }

    /// Look up a course in any department.
    pub fn find_course(&self, course_code: &str) -> Option<&Course> {
        self.departments
            .values()
            .find_map(|d| d.course(course_code))
    }

    /// Register a student for a course in any department.
    pub fn register_course(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<(), RegistrarError> {
        self.registration_attempts += 1;

        let max_load = self.max_concurrent_enrollments;
        let student = self
            .students
            .get_mut(student_id)
            .ok_or(RegistrarError::NotFound)?;
        let course = self
            .departments
            .values_mut()
            .find_map(|d| d.course_mut(course_code))
            .ok_or(RegistrarError::NotFound)?;

        enrollment_service::enroll_course(student, course, max_load)?;
        self.successful_registrations += 1;
        Ok(())
    }

    pub fn drop_course(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<(), RegistrarError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or(RegistrarError::NotFound)?;
        let course = self
            .departments
            .values_mut()
            .find_map(|d| d.course_mut(course_code))
            .ok_or(RegistrarError::NotFound)?;

        enrollment_service::drop_course(student, course)
    }

    /// Record a grade, taking the credit hours from the course.
    pub fn add_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        grade: f64,
    ) -> Result<(), RegistrarError> {
        let credit_hours = self
            .find_course(course_code)
            .ok_or(RegistrarError::NotFound)?
            .credit_hours();
        let student = self
            .students
            .get_mut(student_id)
            .ok_or(RegistrarError::NotFound)?;

        enrollment_service::add_grade(student, course_code, grade, credit_hours)
    }

    /// Assign an instructor to a course, overwriting any prior assignment
    /// and reconciling both faculty members' taught lists.
    pub fn assign_faculty(
        &mut self,
        course_code: &str,
        faculty_id: &str,
    ) -> Result<(), RegistrarError> {
        if !self.faculty.contains_key(faculty_id) {
            return Err(RegistrarError::NotFound);
        }
        let course = self
            .departments
            .values_mut()
            .find_map(|d| d.course_mut(course_code))
            .ok_or(RegistrarError::NotFound)?;
        let previous = course.instructor.replace(faculty_id.to_string());

        if let Some(previous) = previous {
            if previous != faculty_id {
                if let Some(prior) = self.faculty.get_mut(&previous) {
                    prior.courses_taught.retain(|c| c != course_code);
                }
            }
        }

        let faculty = self
            .faculty
            .get_mut(faculty_id)
            .ok_or(RegistrarError::NotFound)?;
        if !faculty.courses_taught.iter().any(|c| c == course_code) {
            faculty.courses_taught.push(course_code.to_string());
        }

        tracing::info!("Assigned {} to teach {}", faculty_id, course_code);
        Ok(())
    }

    pub fn set_department_head(
        &mut self,
        dept_code: &str,
        faculty_id: &str,
    ) -> Result<(), RegistrarError> {
        if !self.faculty.contains_key(faculty_id) {
            return Err(RegistrarError::NotFound);
        }
        let department = self
            .departments
            .get_mut(dept_code)
            .ok_or(RegistrarError::NotFound)?;
        department.set_head(faculty_id);
        Ok(())
    }

    /// Read-only aggregation over one department. No side effects.
    pub fn get_statistics(&self, dept_code: &str) -> Result<DepartmentStatistics, RegistrarError> {
        let department = self
            .departments
            .get(dept_code)
            .ok_or(RegistrarError::NotFound)?;

        let members = department.members();
        let students: Vec<&Student> = members
            .iter()
            .filter_map(|id| self.students.get(id))
            .collect();
        let faculty_count = members
            .iter()
            .filter(|id| self.faculty.contains_key(*id))
            .count();

        let average_gpa = if students.is_empty() {
            0.0
        } else {
            students.iter().map(|s| calculate_gpa(s)).sum::<f64>() / students.len() as f64
        };

        let seats: Vec<CourseSeats> = department
            .courses()
            .map(|course| CourseSeats {
                code: course.code().to_string(),
                name: course.name().to_string(),
                enrolled: course.enrolled_count(),
                capacity: course.capacity(),
                available: course.available_seats(),
            })
            .collect();
        let total_enrollment = seats.iter().map(|s| s.enrolled).sum();

        Ok(DepartmentStatistics {
            department: department.code().to_string(),
            name: department.name().to_string(),
            student_count: students.len(),
            faculty_count,
            course_count: department.course_count(),
            total_enrollment,
            average_gpa,
            seats,
        })
    }

    /// Per-course schedule for a department, with instructor names resolved.
    pub fn course_schedule(&self, dept_code: &str) -> Result<Vec<ScheduleEntry>, RegistrarError> {
        let department = self
            .departments
            .get(dept_code)
            .ok_or(RegistrarError::NotFound)?;

        let schedule = department
            .courses()
            .map(|course| {
                let instructor = course
                    .instructor()
                    .and_then(|id| self.faculty.get(id))
                    .map(|f| f.person.name().to_string())
                    .unwrap_or_else(|| "Unassigned".to_string());
                ScheduleEntry {
                    code: course.code().to_string(),
                    name: course.name().to_string(),
                    instructor,
                    enrolled: course.enrolled_count(),
                    available: course.available_seats(),
                }
            })
            .collect();
        Ok(schedule)
    }

    /// Workload figures for every faculty member affiliated with a
    /// department.
    pub fn faculty_workload_report(
        &self,
        dept_code: &str,
    ) -> Result<Vec<WorkloadEntry>, RegistrarError> {
        let department = self
            .departments
            .get(dept_code)
            .ok_or(RegistrarError::NotFound)?;

        let report = department
            .members()
            .iter()
            .filter_map(|id| self.faculty.get(id))
            .map(|faculty| WorkloadEntry {
                faculty_id: faculty.faculty_id().to_string(),
                name: faculty.person.name().to_string(),
                role: faculty.role(),
                courses: faculty.courses_taught().len(),
                workload: faculty.calculate_workload(),
            })
            .collect();
        Ok(report)
    }

    /// Full academic record for one student.
    pub fn transcript(&self, student_id: &str) -> Result<Transcript, RegistrarError> {
        let student = self
            .students
            .get(student_id)
            .ok_or(RegistrarError::NotFound)?;

        let courses = student
            .grade_history()
            .iter()
            .map(|(code, entries)| TranscriptCourse {
                course: code.clone(),
                entries: entries.clone(),
            })
            .collect();

        Ok(Transcript {
            student_id: student.student_id().to_string(),
            name: student.person.name().to_string(),
            role: student.role(),
            department: student.department().to_string(),
            enrolled_courses: student.enrolled_courses().to_vec(),
            total_credits: student.total_credits(),
            gpa: calculate_gpa(student),
            academic_status: academic_status(student).to_string(),
            courses,
        })
    }

    /// System-wide aggregation across every department.
    pub fn system_report(&self) -> SystemReport {
        let mut popular_courses: Vec<CoursePopularity> = self
            .departments
            .values()
            .flat_map(|d| d.courses())
            .map(|course| CoursePopularity {
                code: course.code().to_string(),
                name: course.name().to_string(),
                enrolled: course.enrolled_count(),
            })
            .collect();
        popular_courses.sort_by(|a, b| b.enrolled.cmp(&a.enrolled).then_with(|| a.code.cmp(&b.code)));

        let total_courses = popular_courses.len();
        let total_enrollment: usize = popular_courses.iter().map(|c| c.enrolled).sum();
        let average_class_size = if total_courses == 0 {
            0.0
        } else {
            total_enrollment as f64 / total_courses as f64
        };
        let registration_success_rate = if self.registration_attempts == 0 {
            0.0
        } else {
            self.successful_registrations as f64 / self.registration_attempts as f64 * 100.0
        };

        SystemReport {
            total_departments: self.departments.len(),
            total_students: self.students.len(),
            total_faculty: self.faculty.len(),
            total_staff: self.staff.len(),
            total_courses,
            registration_attempts: self.registration_attempts,
            successful_registrations: self.successful_registrations,
            registration_success_rate,
            average_class_size,
            popular_courses,
        }
    }
}

/// Seat usage for one course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSeats {
    pub code: String,
    pub name: String,
    pub enrolled: usize,
    pub capacity: usize,
    pub available: usize,
}

/// Read-only department aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentStatistics {
    pub department: String,
    pub name: String,
    pub student_count: usize,
    pub faculty_count: usize,
    pub course_count: usize,
    pub total_enrollment: usize,
    pub average_gpa: f64,
    pub seats: Vec<CourseSeats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub enrolled: usize,
    pub available: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkloadEntry {
    pub faculty_id: String,
    pub name: String,
    pub role: String,
    pub courses: usize,
    pub workload: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptCourse {
    pub course: String,
    pub entries: Vec<GradeEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub student_id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub enrolled_courses: Vec<String>,
    pub total_credits: u32,
    pub gpa: f64,
    pub academic_status: String,
    pub courses: Vec<TranscriptCourse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoursePopularity {
    pub code: String,
    pub name: String,
    pub enrolled: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemReport {
    pub total_departments: usize,
    pub total_students: usize,
    pub total_faculty: usize,
    pub total_staff: usize,
    pub total_courses: usize,
    pub registration_attempts: u64,
    pub successful_registrations: u64,
    pub registration_success_rate: f64,
    pub average_class_size: f64,
    pub popular_courses: Vec<CoursePopularity>,
}
