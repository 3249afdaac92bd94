//! Attendance report templates

use super::TextReport;
use crate::core::attendance::{LearnerAttendance, SchoolAttendance, SubjectAttendance};
use askama::Template;

/// One learner's sessions per enrolled subject
#[derive(Template)]
#[template(path = "attendance/student.txt")]
pub struct StudentReport<'a> {
    view: &'a LearnerAttendance,
}

impl<'a> StudentReport<'a> {
    /// Wrap a computed view
    #[must_use]
    pub const fn new(view: &'a LearnerAttendance) -> Self {
        Self { view }
    }
}

impl TextReport for StudentReport<'_> {
    fn file_name(&self) -> String {
        format!("student_{}_report.txt", self.view.learner)
    }
}

/// Every enrolled learner's sessions in one subject
#[derive(Template)]
#[template(path = "attendance/subject.txt")]
pub struct SubjectReport<'a> {
    view: &'a SubjectAttendance,
}

impl<'a> SubjectReport<'a> {
    /// Wrap a computed view
    #[must_use]
    pub const fn new(view: &'a SubjectAttendance) -> Self {
        Self { view }
    }
}

impl TextReport for SubjectReport<'_> {
    fn file_name(&self) -> String {
        format!("{}_report.txt", self.view.name)
    }
}

/// Totals for every subject and learner
#[derive(Template)]
#[template(path = "attendance/school.txt")]
pub struct SchoolReport<'a> {
    view: &'a SchoolAttendance,
}

impl<'a> SchoolReport<'a> {
    /// Wrap a computed view
    #[must_use]
    pub const fn new(view: &'a SchoolAttendance) -> Self {
        Self { view }
    }
}

impl TextReport for SchoolReport<'_> {
    fn file_name(&self) -> String {
        "school_report.txt".to_string()
    }
}
