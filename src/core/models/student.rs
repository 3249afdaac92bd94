//! Student model for the enrollment store

use serde::{Deserialize, Serialize};

/// A registered student and the courses they are enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student identifier
    pub id: String,

    /// Full name
    pub name: String,

    /// Enrolled course ids, in enrollment order
    pub courses: Vec<String>,
}

impl Student {
    /// Create a student with no enrollments
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            courses: Vec::new(),
        }
    }

    /// Whether the student is enrolled in `course_id`
    #[must_use]
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c == course_id)
    }

    /// Add a course id. Returns false if the student already takes it.
    pub fn enroll(&mut self, course_id: String) -> bool {
        if self.is_enrolled(&course_id) {
            return false;
        }
        self.courses.push(course_id);
        true
    }
}
