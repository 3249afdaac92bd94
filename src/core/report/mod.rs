//! Plain-text reports rendered from askama templates
//!
//! Attendance reports are written under the configured reports directory; the
//! grade report is only printed to the console.

pub mod attendance;
pub mod grades;

use crate::core::errors::ReportError;
use askama::Template;
use logger::info;
use std::fs;
use std::path::{Path, PathBuf};

pub use attendance::{SchoolReport, StudentReport, SubjectReport};
pub use grades::{GradeReport, GradeRow};

/// A template that knows which file it is saved to
pub trait TextReport: Template {
    /// File name inside the reports directory
    fn file_name(&self) -> String;
}

/// Writes rendered reports into one directory, replacing earlier copies
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer for `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render `report` and write it, returning the path written
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write<R: TextReport>(&self, report: &R) -> Result<PathBuf, ReportError> {
        let mut text = report.render()?;
        if !text.ends_with('\n') {
            text.push('\n');
        }

        let path = self.dir.join(report.file_name());
        let write_err = |source| ReportError::Write {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        fs::write(&path, text).map_err(write_err)?;

        info!("Report saved to {}", path.display());
        Ok(path)
    }
}
