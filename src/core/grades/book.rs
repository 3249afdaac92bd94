//! Grade book

use crate::core::errors::GradeError;
use crate::core::models::grade_record::{MAX_GRADE, MIN_GRADE};
use crate::core::models::{GradeRecord, GRADE_SUBJECTS};
use logger::{info, warn};

/// Class statistics for one subject
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectStats {
    /// Subject name
    pub subject: String,
    /// Mean grade over students with this subject
    pub average: f64,
    /// Highest grade
    pub highest: f64,
    /// Lowest grade
    pub lowest: f64,
}

/// Ordered collection of grade records, unique by student id
#[derive(Debug, Clone, Default)]
pub struct GradeBook {
    records: Vec<GradeRecord>,
}

impl GradeBook {
    /// Create an empty grade book
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// A grade book seeded with three sample students
    #[must_use]
    pub fn with_demo_students() -> Self {
        let records = [
            (1001, "John Doe"),
            (1002, "Jane Smith"),
            (1003, "Mike Johnson"),
        ]
        .into_iter()
        .map(|(id, name)| GradeRecord::new(id, name.to_string()))
        .collect();
        Self { records }
    }

    /// Register a student with every subject at 0.0
    ///
    /// # Errors
    /// `DuplicateStudent` if the id is already in the book.
    pub fn add_student(&mut self, name: String, id: u32) -> Result<(), GradeError> {
        if self.find(id).is_some() {
            warn!("Grade book already has student {id}");
            return Err(GradeError::DuplicateStudent { id });
        }
        info!("Added student {id} ({name}) to the grade book");
        self.records.push(GradeRecord::new(id, name));
        Ok(())
    }

    /// Look up a student by id
    #[must_use]
    pub fn find(&self, id: u32) -> Option<&GradeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Look up a student by id, reporting a missing id as an error
    ///
    /// # Errors
    /// `StudentNotFound` if no record has this id.
    pub fn record(&self, id: u32) -> Result<&GradeRecord, GradeError> {
        self.find(id).ok_or(GradeError::StudentNotFound { id })
    }

    /// Set one subject grade for a student
    ///
    /// # Errors
    /// `StudentNotFound`, `UnknownSubject` or `GradeOutOfRange`; the grade is
    /// unchanged on error.
    pub fn update_grade(&mut self, id: u32, subject: &str, grade: f64) -> Result<(), GradeError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GradeError::StudentNotFound { id })?;
        record.set_grade(subject, grade)
    }

    /// All records in insertion order
    #[must_use]
    pub fn records(&self) -> &[GradeRecord] {
        &self.records
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no students are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Average, highest and lowest grade per subject
    ///
    /// Subjects follow [`GRADE_SUBJECTS`] order; subjects no student has are
    /// left out, so an empty book yields an empty list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn subject_averages(&self) -> Vec<SubjectStats> {
        GRADE_SUBJECTS
            .iter()
            .filter_map(|&subject| {
                let grades: Vec<f64> = self
                    .records
                    .iter()
                    .filter_map(|r| r.grade(subject))
                    .collect();
                if grades.is_empty() {
                    return None;
                }
                Some(SubjectStats {
                    subject: subject.to_string(),
                    average: grades.iter().sum::<f64>() / grades.len() as f64,
                    highest: grades.iter().copied().fold(MIN_GRADE, f64::max),
                    lowest: grades.iter().copied().fold(MAX_GRADE, f64::min),
                })
            })
            .collect()
    }
}
