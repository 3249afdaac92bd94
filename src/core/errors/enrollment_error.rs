/// Enrollment store failures. All are reported to the user and abort the
/// operation without changing the store.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    /// A student with this id is already stored
    #[error("Student with this ID already exists!")]
    DuplicateStudent {
        /// Rejected student id
        id: String,
    },

    /// A course with this id is already stored
    #[error("Course with this ID already exists!")]
    DuplicateCourse {
        /// Rejected course id
        id: String,
    },

    /// No student has this id
    #[error("Student not found!")]
    StudentNotFound {
        /// Id that was looked up
        id: String,
    },

    /// No course has this id
    #[error("Course not found!")]
    CourseNotFound {
        /// Id that was looked up
        id: String,
    },

    /// Student already takes the course
    #[error("Student already enrolled in this course.")]
    AlreadyEnrolled {
        /// Student id
        student: String,
        /// Course id
        course: String,
    },

    /// Id or name was empty
    #[error("{field} must not be empty")]
    EmptyField {
        /// Field label, e.g. "Student ID"
        field: &'static str,
    },

    /// Value holds a character the data file cannot store
    #[error("{field} must not contain '|' or line breaks: '{value}'")]
    ReservedCharacter {
        /// Field label, e.g. "Course name"
        field: &'static str,
        /// Rejected value
        value: String,
    },

    /// Data file could not be read or written
    #[error("could not access enrollment data at {path}: {source}")]
    Io {
        /// Data file path
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
