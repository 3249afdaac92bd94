//! In-memory grade book with letter grades and class averages

pub mod book;
pub mod letter;

pub use book::{GradeBook, SubjectStats};
pub use letter::letter_grade;
