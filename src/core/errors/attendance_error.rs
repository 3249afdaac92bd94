use crate::core::models::SubjectId;

/// Rejections from the attendance recorder and aggregator.
///
/// Every variant leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttendanceError {
    /// Learner id is not on the roster
    #[error("Student ID must be between 1 and {max}, got {given}")]
    LearnerOutOfRange {
        /// Id as entered, 1-based
        given: usize,
        /// Highest valid id
        max: usize,
    },

    /// Subject id is not in the catalog
    #[error("Subject ID must be between 0 and {max}, got {given}")]
    SubjectOutOfRange {
        /// Id as entered, 0-based
        given: usize,
        /// Highest valid id
        max: usize,
    },

    /// Learner does not take the subject
    #[error("Student {learner} doesn't take {subject}!")]
    NotEnrolled {
        /// 1-based learner id
        learner: usize,
        /// Subject display name
        subject: String,
    },
}

/// Invalid allocation rule sets, caught before any learner is assigned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Rule names a subject outside the catalog
    #[error("subject {subject} is not in the catalog of {catalog_len} subjects")]
    UnknownSubject {
        /// Offending subject id
        subject: SubjectId,
        /// Number of subjects in the catalog
        catalog_len: usize,
    },

    /// Same subject appears twice across the rules
    #[error("subject {subject} is listed more than once in the allocation rules")]
    DuplicateSubject {
        /// Repeated subject id
        subject: SubjectId,
    },

    /// Science cohort is bigger than the roster
    #[error("science cohort of {cohort} exceeds the {learners} learners on the roster")]
    CohortTooLarge {
        /// Requested cohort size
        cohort: usize,
        /// Learners on the roster
        learners: usize,
    },
}
