//! Enrollment store: courses, students, and who takes what

use crate::core::errors::EnrollmentError;
use crate::core::models::{Course, Student};
use logger::{info, warn};

/// Check that a field can be written to the flat file unchanged
fn check_field(field: &'static str, value: &str) -> Result<(), EnrollmentError> {
    if value.is_empty() {
        return Err(EnrollmentError::EmptyField { field });
    }
    if value.contains(['|', '\n', '\r']) {
        return Err(EnrollmentError::ReservedCharacter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Courses and students, each unique by id, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentStore {
    courses: Vec<Course>,
    students: Vec<Student>,
}

impl EnrollmentStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
            students: Vec::new(),
        }
    }

    /// Register a new student with no courses
    ///
    /// # Errors
    /// `DuplicateStudent` if the id exists, `EmptyField` or `ReservedCharacter`
    /// if a field cannot be stored.
    pub fn add_student(&mut self, id: &str, name: &str) -> Result<(), EnrollmentError> {
        self.insert_student(Student::new(id.to_string(), name.to_string()))
    }

    /// Register a new course
    ///
    /// # Errors
    /// `DuplicateCourse` if the id exists, `EmptyField` or `ReservedCharacter`
    /// if a field cannot be stored.
    pub fn add_course(&mut self, id: &str, name: &str) -> Result<(), EnrollmentError> {
        self.insert_course(Course::new(id.to_string(), name.to_string()))
    }

    /// Enroll a student in an existing course
    ///
    /// # Errors
    /// `StudentNotFound`, `CourseNotFound`, or `AlreadyEnrolled`; the store is
    /// unchanged on error.
    pub fn enroll(&mut self, student_id: &str, course_id: &str) -> Result<(), EnrollmentError> {
        let student_pos = self
            .students
            .iter()
            .position(|s| s.id == student_id)
            .ok_or_else(|| EnrollmentError::StudentNotFound {
                id: student_id.to_string(),
            })?;

        if self.course(course_id).is_none() {
            return Err(EnrollmentError::CourseNotFound {
                id: course_id.to_string(),
            });
        }

        let student = &mut self.students[student_pos];
        if !student.enroll(course_id.to_string()) {
            return Err(EnrollmentError::AlreadyEnrolled {
                student: student_id.to_string(),
                course: course_id.to_string(),
            });
        }

        info!("Enrolled student {student_id} in course {course_id}");
        Ok(())
    }

    /// Insert a fully-formed student record (used when loading)
    ///
    /// # Errors
    /// Same as [`add_student`](Self::add_student); course ids must also be
    /// storable.
    pub fn insert_student(&mut self, student: Student) -> Result<(), EnrollmentError> {
        check_field("Student ID", &student.id)?;
        check_field("Student name", &student.name)?;
        for course in &student.courses {
            check_field("Course ID", course)?;
        }
        if self.student(&student.id).is_some() {
            warn!("Duplicate student id '{}' rejected", student.id);
            return Err(EnrollmentError::DuplicateStudent { id: student.id });
        }
        self.students.push(student);
        Ok(())
    }

    /// Insert a course record
    ///
    /// # Errors
    /// Same as [`add_course`](Self::add_course).
    pub fn insert_course(&mut self, course: Course) -> Result<(), EnrollmentError> {
        check_field("Course ID", &course.id)?;
        check_field("Course name", &course.name)?;
        if self.course(&course.id).is_some() {
            warn!("Duplicate course id '{}' rejected", course.id);
            return Err(EnrollmentError::DuplicateCourse { id: course.id });
        }
        self.courses.push(course);
        Ok(())
    }

    /// Find a student by id
    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Find a course by id
    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Course name for `id`, or `"Unknown"` for a dangling id
    #[must_use]
    pub fn course_name(&self, id: &str) -> &str {
        self.course(id).map_or("Unknown", |c| c.name.as_str())
    }

    /// All students in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EnrollmentStore {
        let mut store = EnrollmentStore::new();
        store.add_course("MATH101", "Calculus").unwrap();
        store.add_course("BIO110", "Cell Biology").unwrap();
        store.add_student("S1", "Amina Otieno").unwrap();
        store
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut store = store();
        assert!(matches!(
            store.add_student("S1", "Other"),
            Err(EnrollmentError::DuplicateStudent { .. })
        ));
        assert!(matches!(
            store.add_course("MATH101", "Other"),
            Err(EnrollmentError::DuplicateCourse { .. })
        ));
        assert_eq!(store.students().len(), 1);
        assert_eq!(store.courses().len(), 2);
    }

    #[test]
    fn test_enroll_checks_student_course_and_duplicates() {
        let mut store = store();
        assert!(store.enroll("S1", "MATH101").is_ok());
        assert!(matches!(
            store.enroll("S9", "MATH101"),
            Err(EnrollmentError::StudentNotFound { .. })
        ));
        assert!(matches!(
            store.enroll("S1", "CHEM"),
            Err(EnrollmentError::CourseNotFound { .. })
        ));
        assert!(matches!(
            store.enroll("S1", "MATH101"),
            Err(EnrollmentError::AlreadyEnrolled { .. })
        ));
        assert_eq!(store.student("S1").unwrap().courses, vec!["MATH101"]);
    }

    #[test]
    fn test_pipe_in_field_is_rejected() {
        let mut store = EnrollmentStore::new();
        assert!(matches!(
            store.add_student("S|1", "Name"),
            Err(EnrollmentError::ReservedCharacter { .. })
        ));
        assert!(matches!(
            store.add_course("C1", "Art | Design"),
            Err(EnrollmentError::ReservedCharacter { .. })
        ));
        assert!(matches!(
            store.add_course("", "Art"),
            Err(EnrollmentError::EmptyField { .. })
        ));
        assert!(store.students().is_empty());
        assert!(store.courses().is_empty());
    }

    #[test]
    fn test_course_name_lookup() {
        let store = store();
        assert_eq!(store.course_name("BIO110"), "Cell Biology");
        assert_eq!(store.course_name("GONE"), "Unknown");
    }

    #[test]
    fn test_error_messages_match_console_wording() {
        let mut store = store();
        let err = store.add_student("S1", "Again").unwrap_err();
        assert_eq!(err.to_string(), "Student with this ID already exists!");
    }
}
