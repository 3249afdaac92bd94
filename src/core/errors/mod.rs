//! Error types for each records domain.

mod attendance_error;
mod enrollment_error;
mod grade_error;
mod report_error;

pub use attendance_error::{AttendanceError, RosterError};
pub use enrollment_error::EnrollmentError;
pub use grade_error::GradeError;
pub use report_error::ReportError;
