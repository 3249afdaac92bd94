/// Grade book failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradeError {
    /// A student with this id is already in the book
    #[error("Student ID already exists!")]
    DuplicateStudent {
        /// Rejected id
        id: u32,
    },

    /// No student has this id
    #[error("Student not found!")]
    StudentNotFound {
        /// Id that was looked up
        id: u32,
    },

    /// Subject is not one of the graded subjects
    #[error("Unknown subject: '{subject}'")]
    UnknownSubject {
        /// Subject as entered
        subject: String,
    },

    /// Grade is NaN or outside 0-100
    #[error("Grade {grade} is outside 0-100")]
    GradeOutOfRange {
        /// Rejected grade
        grade: f64,
    },
}
