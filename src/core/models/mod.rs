//! Data models for the school-records tools

pub mod course;
pub mod grade_record;
pub mod learner;
pub mod student;
pub mod subject;

pub use course::Course;
pub use grade_record::{GradeRecord, GRADE_SUBJECTS};
pub use learner::Learner;
pub use student::Student;
pub use subject::{Subject, SubjectCatalog, SubjectId};
