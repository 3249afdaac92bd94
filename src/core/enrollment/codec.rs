//! Pipe-delimited flat file for the enrollment store
//!
//! Layout: one `id|name` line per course, a `---` line, then one
//! `id|name|course1|course2|...` line per student. Field order and course order
//! are preserved across a save/load round trip.

use super::store::EnrollmentStore;
use crate::core::errors::EnrollmentError;
use crate::core::models::{Course, Student};
use logger::{info, warn};
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Field delimiter
pub const FIELD_SEPARATOR: char = '|';

/// Line between the course section and the student section
pub const SECTION_SEPARATOR: &str = "---";

/// Serialize the store to the flat-file layout
#[must_use]
pub fn encode(store: &EnrollmentStore) -> String {
    let mut out = String::new();
    for course in store.courses() {
        out.push_str(&format!("{}{FIELD_SEPARATOR}{}\n", course.id, course.name));
    }
    out.push_str(SECTION_SEPARATOR);
    out.push('\n');
    for student in store.students() {
        out.push_str(&student.id);
        out.push(FIELD_SEPARATOR);
        out.push_str(&student.name);
        for course_id in &student.courses {
            out.push(FIELD_SEPARATOR);
            out.push_str(course_id);
        }
        out.push('\n');
    }
    out
}

/// Result of reading the flat file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Records that parsed
    pub store: EnrollmentStore,
    /// Non-blank lines that were dropped; they are lost on the next save
    pub skipped_lines: usize,
    /// Whether invalid UTF-8 was replaced with U+FFFD while reading
    pub lossy: bool,
}

/// Parse the flat-file layout
///
/// Blank lines are ignored. Lines that cannot be parsed, and records whose id
/// is already present, are skipped with a warning. A file without a `---` line
/// holds only courses.
#[must_use]
pub fn decode(text: &str) -> Decoded {
    let mut store = EnrollmentStore::new();
    let mut reading_courses = true;
    let mut skipped_lines = 0;

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if line == SECTION_SEPARATOR {
            reading_courses = false;
            continue;
        }

        let result = if reading_courses {
            parse_course(line).and_then(|course| store.insert_course(course).ok())
        } else {
            parse_student(line).and_then(|student| store.insert_student(student).ok())
        };
        if result.is_none() {
            warn!("Skipping enrollment data line {}: '{line}'", number + 1);
            skipped_lines += 1;
        }
    }

    Decoded {
        store,
        skipped_lines,
        lossy: false,
    }
}

fn parse_course(line: &str) -> Option<Course> {
    let (id, name) = line.split_once(FIELD_SEPARATOR)?;
    Some(Course::new(id.to_string(), name.to_string()))
}

fn parse_student(line: &str) -> Option<Student> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let id = fields.next()?;
    let name = fields.next()?;
    let mut student = Student::new(id.to_string(), name.to_string());
    for course_id in fields.filter(|f| !f.is_empty()) {
        student.enroll(course_id.to_string());
    }
    Some(student)
}

/// Read the store from `path`
///
/// Returns `Ok(None)` when the file does not exist, which callers treat as a
/// fresh start. Bytes that are not valid UTF-8 are replaced rather than
/// rejected, so one odd name does not hide the rest of the file.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn load(path: &Path) -> Result<Option<Decoded>, EnrollmentError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(EnrollmentError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let lossy = matches!(text, Cow::Owned(_));
    if lossy {
        warn!("{} is not valid UTF-8; unreadable bytes were replaced", path.display());
    }

    let decoded = Decoded {
        lossy,
        ..decode(&text)
    };
    info!(
        "Loaded {} courses and {} students from {} ({} lines skipped)",
        decoded.store.courses().len(),
        decoded.store.students().len(),
        path.display(),
        decoded.skipped_lines
    );
    Ok(Some(decoded))
}

/// Write the store to `path`, replacing any previous contents
///
/// # Errors
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save(store: &EnrollmentStore, path: &Path) -> Result<(), EnrollmentError> {
    let io_err = |source| EnrollmentError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, encode(store)).map_err(io_err)?;
    info!("Enrollment data saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "MATH101|Calculus\nBIO110|Cell Biology\n---\nS1|Amina Otieno|BIO110|MATH101\nS2|Brian Kip\n";

    #[test]
    fn test_encode_layout() {
        let mut store = EnrollmentStore::new();
        store.add_course("MATH101", "Calculus").unwrap();
        store.add_course("BIO110", "Cell Biology").unwrap();
        store.add_student("S1", "Amina Otieno").unwrap();
        store.add_student("S2", "Brian Kip").unwrap();
        store.enroll("S1", "BIO110").unwrap();
        store.enroll("S1", "MATH101").unwrap();

        assert_eq!(encode(&store), SAMPLE);
    }

    #[test]
    fn test_decode_preserves_order() {
        let decoded = decode(SAMPLE);
        assert_eq!(decoded.skipped_lines, 0);
        let store = decoded.store;
        assert_eq!(store.courses()[0].id, "MATH101");
        assert_eq!(store.courses()[1].name, "Cell Biology");
        assert_eq!(store.students()[0].courses, vec!["BIO110", "MATH101"]);
        assert!(store.students()[1].courses.is_empty());
        assert_eq!(encode(&store), SAMPLE);
    }

    #[test]
    fn test_decode_skips_blank_and_malformed_lines() {
        let text = "MATH101|Calculus\n\nNOPIPE\r\n---\r\nS1|Amina|MATH101\r\nlonely\nS1|Duplicate\n";
        let decoded = decode(text);
        assert_eq!(decoded.skipped_lines, 3);
        let store = decoded.store;
        assert_eq!(store.courses().len(), 1);
        assert_eq!(store.students().len(), 1);
        assert_eq!(store.students()[0].name, "Amina");
    }

    #[test]
    fn test_decode_without_separator_reads_courses_only() {
        let store = decode("C1|Art\nC2|Music\n").store;
        assert_eq!(store.courses().len(), 2);
        assert!(store.students().is_empty());
    }

    #[test]
    fn test_load_replaces_invalid_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data.txt");
        fs::write(&path, b"C1|Art\n---\nS1|Jos\xe9 Mwangi|C1\n").unwrap();

        let decoded = load(&path).unwrap().unwrap();
        assert!(decoded.lossy);
        assert_eq!(decoded.skipped_lines, 0);
        let student = decoded.store.student("S1").unwrap();
        assert_eq!(student.name, "Jos\u{FFFD} Mwangi");
        assert_eq!(student.courses, vec!["C1"]);
    }

    #[test]
    fn test_empty_store_encodes_separator_only() {
        assert_eq!(encode(&EnrollmentStore::new()), "---\n");
    }
}
