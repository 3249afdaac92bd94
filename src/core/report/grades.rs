//! Console grade report

use crate::core::grades::letter_grade;
use crate::core::models::GradeRecord;
use askama::Template;

/// One subject line of the grade report
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRow<'a> {
    /// Subject name
    pub subject: &'a str,
    /// Numeric grade
    pub grade: f64,
    /// Letter for `grade`
    pub letter: &'static str,
}

/// A student's grades with letters and the overall average
#[derive(Template)]
#[template(path = "grades/student.txt")]
pub struct GradeReport<'a> {
    record: &'a GradeRecord,
    rows: Vec<GradeRow<'a>>,
    average: f64,
    average_letter: &'static str,
}

impl<'a> GradeReport<'a> {
    /// Build the report rows for `record`
    #[must_use]
    pub fn new(record: &'a GradeRecord) -> Self {
        let rows = record
            .grades()
            .map(|(subject, grade)| GradeRow {
                subject,
                grade,
                letter: letter_grade(grade),
            })
            .collect();
        let average = record.average();
        Self {
            record,
            rows,
            average,
            average_letter: letter_grade(average),
        }
    }

    /// Subject lines in subject-name order
    #[must_use]
    pub fn rows(&self) -> &[GradeRow<'a>] {
        &self.rows
    }
}
