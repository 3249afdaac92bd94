//! Subject catalog for the attendance roster

use serde::Serialize;

/// Index of a subject in the catalog
pub type SubjectId = usize;

/// Mathematics
pub const MATHEMATICS: SubjectId = 0;
/// English
pub const ENGLISH: SubjectId = 1;
/// Kiswahili
pub const KISWAHILI: SubjectId = 2;
/// Chemistry
pub const CHEMISTRY: SubjectId = 3;
/// Biology
pub const BIOLOGY: SubjectId = 4;
/// Physics, the elective science
pub const PHYSICS: SubjectId = 5;
/// Computer
pub const COMPUTER: SubjectId = 6;
/// Geology
pub const GEOLOGY: SubjectId = 7;
/// History
pub const HISTORY: SubjectId = 8;
/// Christian Religious Education
pub const CRE: SubjectId = 9;
/// Business
pub const BUSINESS: SubjectId = 10;

/// Display names of the standard catalog, indexed by [`SubjectId`]
const STANDARD_SUBJECTS: [&str; 11] = [
    "Mathematics",
    "English",
    "Kiswahili",
    "Chemistry",
    "Biology",
    "Physics",
    "Computer",
    "Geology",
    "History",
    "C.R.E",
    "Business",
];

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Position in the catalog
    pub id: SubjectId,
    /// Display name (e.g., "C.R.E")
    pub name: String,
}

/// Immutable, ordered list of subjects defined at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    /// Build a catalog from display names; ids follow the given order
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let subjects = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Subject {
                id,
                name: name.into(),
            })
            .collect();
        Self { subjects }
    }

    /// The eleven-subject school catalog
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_SUBJECTS)
    }

    /// Number of subjects
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// True when the catalog has no subjects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Whether `id` names a subject in this catalog
    #[must_use]
    pub fn contains(&self, id: SubjectId) -> bool {
        id < self.subjects.len()
    }

    /// Look up a subject by id
    #[must_use]
    pub fn get(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(id)
    }

    /// Display name for `id`, or `"Unknown"` when out of range
    #[must_use]
    pub fn name(&self, id: SubjectId) -> &str {
        self.get(id).map_or("Unknown", |s| s.name.as_str())
    }

    /// Iterate subjects in id order
    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }
}

impl Default for SubjectCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
