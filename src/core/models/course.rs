//! Course model for the enrollment store

use serde::{Deserialize, Serialize};

/// A course students can enroll in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g., "CS101")
    pub id: String,

    /// Course name (e.g., "Introduction to Programming")
    pub name: String,
}

impl Course {
    /// Create a new course
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}
