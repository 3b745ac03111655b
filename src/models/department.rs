use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::RegistrarError;
use crate::models::course::Course;

/// Academic department: owns its course catalog and tracks the ids of
/// affiliated people. The head is assigned externally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    code: String,
    name: String,
    head: Option<String>,
    courses: BTreeMap<String, Course>,
    members: BTreeSet<String>,
}

impl Department {
    pub fn new(code: &str, name: &str) -> Result<Self, RegistrarError> {
        let code = code.trim();
        let name = name.trim();
        if code.is_empty() || name.is_empty() {
            return Err(RegistrarError::Validation(
                "department code and name must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            head: None,
            courses: BTreeMap::new(),
            members: BTreeSet::new(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Faculty id of the head of department, if assigned.
    pub fn head(&self) -> Option<&str> {
        self.head.as_deref()
    }

    pub fn set_head(&mut self, faculty_id: &str) {
        self.head = Some(faculty_id.to_string());
    }

    pub fn add_course(&mut self, course: Course) -> Result<(), RegistrarError> {
        if self.courses.contains_key(course.code()) {
            return Err(RegistrarError::Validation(format!(
                "course {} already exists in {}",
                course.code(),
                self.code
            )));
        }
        self.courses.insert(course.code().to_string(), course);
        Ok(())
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub(crate) fn course_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.get_mut(code)
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn add_member(&mut self, person_id: &str) {
        self.members.insert(person_id.to_string());
    }

    /// Ids of everyone affiliated with this department.
    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }
}
