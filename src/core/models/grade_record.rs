//! Grade record model

use crate::core::errors::GradeError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Subjects every grade record starts with
pub const GRADE_SUBJECTS: [&str; 10] = [
    "Maths",
    "English",
    "Kiswahili",
    "Chem",
    "Bio",
    "Phyc",
    "Computer",
    "Geo/Hist",
    "C.R.E",
    "Business",
];

/// Lowest accepted grade
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade
pub const MAX_GRADE: f64 = 100.0;

/// One student's grades keyed by subject name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    /// Student id
    pub id: u32,
    /// Student name
    pub name: String,
    grades: BTreeMap<String, f64>,
}

impl GradeRecord {
    /// Create a record with every subject in [`GRADE_SUBJECTS`] set to 0.0
    #[must_use]
    pub fn new(id: u32, name: String) -> Self {
        let grades = GRADE_SUBJECTS
            .iter()
            .map(|subject| ((*subject).to_string(), 0.0))
            .collect();
        Self { id, name, grades }
    }

    /// Set the grade for an existing subject
    ///
    /// # Errors
    /// `UnknownSubject` when the record has no such subject, `GradeOutOfRange`
    /// when `grade` is outside 0-100 (NaN included). The stored grade is left
    /// unchanged on error.
    pub fn set_grade(&mut self, subject: &str, grade: f64) -> Result<(), GradeError> {
        let slot = self
            .grades
            .get_mut(subject)
            .ok_or_else(|| GradeError::UnknownSubject {
                subject: subject.to_string(),
            })?;
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(GradeError::GradeOutOfRange { grade });
        }
        *slot = grade;
        Ok(())
    }

    /// Grade for `subject`, if the record has it
    #[must_use]
    pub fn grade(&self, subject: &str) -> Option<f64> {
        self.grades.get(subject).copied()
    }

    /// Grades in subject-name order
    pub fn grades(&self) -> impl Iterator<Item = (&str, f64)> {
        self.grades.iter().map(|(s, g)| (s.as_str(), *g))
    }

    /// Mean of all subject grades, 0.0 for an empty record
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.values().sum::<f64>() / self.grades.len() as f64
    }
}
