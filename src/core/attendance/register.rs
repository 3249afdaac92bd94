//! Attendance ledger and the recorder that guards it

use super::allocator::{AllocationRules, Roster};
use crate::core::errors::{AttendanceError, RosterError};
use crate::core::models::{Learner, SubjectCatalog, SubjectId};
use logger::{debug, warn};

/// Session counts for every (learner, subject) pair, zero-initialized
///
/// Storage is a flat row-major `learners x subjects` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceLedger {
    subjects: usize,
    counts: Vec<u32>,
}

impl AttendanceLedger {
    /// Create a ledger with every count at zero
    #[must_use]
    pub fn new(learners: usize, subjects: usize) -> Self {
        Self {
            subjects,
            counts: vec![0; learners * subjects],
        }
    }

    /// Count for a 0-based learner index and subject; 0 outside the grid
    #[must_use]
    pub fn count(&self, learner: usize, subject: SubjectId) -> u32 {
        if subject >= self.subjects {
            return 0;
        }
        self.counts
            .get(learner * self.subjects + subject)
            .copied()
            .unwrap_or(0)
    }

    /// Add one session. Callers check enrollment first.
    fn increment(&mut self, learner: usize, subject: SubjectId) -> u32 {
        let slot = &mut self.counts[learner * self.subjects + subject];
        *slot = slot.saturating_add(1);
        *slot
    }
}

/// Roster, catalog and ledger for one attendance session
///
/// Built once at startup and kept for the life of the process. The ledger only
/// changes through [`mark_attendance`](Self::mark_attendance).
#[derive(Debug, Clone)]
pub struct AttendanceRegister {
    catalog: SubjectCatalog,
    rules: AllocationRules,
    roster: Roster,
    ledger: AttendanceLedger,
}

impl AttendanceRegister {
    /// Allocate the roster under `rules` and start an empty ledger
    ///
    /// # Errors
    /// Returns an error if `rules` reference subjects outside `catalog` or are
    /// otherwise inconsistent.
    pub fn new(catalog: SubjectCatalog, rules: AllocationRules) -> Result<Self, RosterError> {
        let roster = Roster::allocate(&rules, &catalog)?;
        let ledger = AttendanceLedger::new(roster.len(), catalog.len());
        Ok(Self {
            catalog,
            rules,
            roster,
            ledger,
        })
    }

    /// The school's standard catalog and allocation rules
    ///
    /// # Panics
    /// Panics if the built-in rules do not fit the built-in catalog; both are
    /// constants covered by tests.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(SubjectCatalog::standard(), AllocationRules::default())
            .expect("built-in allocation rules match the built-in catalog")
    }

    /// Subject catalog
    #[must_use]
    pub const fn catalog(&self) -> &SubjectCatalog {
        &self.catalog
    }

    /// Allocation rules the roster was built with
    #[must_use]
    pub const fn rules(&self) -> &AllocationRules {
        &self.rules
    }

    /// Allocated roster
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read-only view of the ledger
    #[must_use]
    pub const fn ledger(&self) -> &AttendanceLedger {
        &self.ledger
    }

    /// Number of learners on the roster
    #[must_use]
    pub fn learner_count(&self) -> usize {
        self.roster.len()
    }

    /// Resolve a 1-based learner id
    ///
    /// # Errors
    /// `LearnerOutOfRange` when `learner` is not in `1..=learner_count()`.
    pub fn learner(&self, learner: usize) -> Result<&Learner, AttendanceError> {
        learner
            .checked_sub(1)
            .and_then(|index| self.roster.learner(index))
            .ok_or(AttendanceError::LearnerOutOfRange {
                given: learner,
                max: self.roster.len(),
            })
    }

    /// Check that `subject` is in the catalog
    ///
    /// # Errors
    /// `SubjectOutOfRange` when `subject` is not a catalog index.
    pub fn check_subject(&self, subject: SubjectId) -> Result<(), AttendanceError> {
        if self.catalog.contains(subject) {
            Ok(())
        } else {
            Err(AttendanceError::SubjectOutOfRange {
                given: subject,
                max: self.catalog.len().saturating_sub(1),
            })
        }
    }

    /// Record one session for a 1-based learner id in `subject`
    ///
    /// Returns the new count for the pair.
    ///
    /// # Errors
    /// - `LearnerOutOfRange` / `SubjectOutOfRange` for ids outside the roster or catalog
    /// - `NotEnrolled` when the learner does not take `subject`
    ///
    /// The ledger is unchanged on error.
    pub fn mark_attendance(
        &mut self,
        learner: usize,
        subject: SubjectId,
    ) -> Result<u32, AttendanceError> {
        let index = self.learner(learner)?.index();
        self.check_subject(subject)?;

        if !self.roster.learners()[index].takes(subject) {
            let err = AttendanceError::NotEnrolled {
                learner,
                subject: self.catalog.name(subject).to_string(),
            };
            warn!("{err}");
            return Err(err);
        }

        let count = self.ledger.increment(index, subject);
        debug!(
            "Marked attendance for Student {learner} in {} ({count} sessions)",
            self.catalog.name(subject)
        );
        Ok(count)
    }

    /// Sessions recorded for a 1-based learner id in `subject`
    ///
    /// # Errors
    /// `LearnerOutOfRange` or `SubjectOutOfRange` for invalid ids.
    pub fn sessions(&self, learner: usize, subject: SubjectId) -> Result<u32, AttendanceError> {
        let index = self.learner(learner)?.index();
        self.check_subject(subject)?;
        Ok(self.ledger.count(index, subject))
    }

    /// Names of the subjects a 1-based learner id takes, in enrollment order
    ///
    /// # Errors
    /// `LearnerOutOfRange` for an invalid id.
    pub fn learner_subject_names(&self, learner: usize) -> Result<Vec<&str>, AttendanceError> {
        let learner = self.learner(learner)?;
        Ok(learner
            .subjects()
            .iter()
            .map(|&s| self.catalog.name(s))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::subject::{BUSINESS, CRE, MATHEMATICS, PHYSICS};

    #[test]
    fn test_ledger_starts_at_zero() {
        let ledger = AttendanceLedger::new(2, 3);
        assert_eq!(ledger.count(0, 0), 0);
        assert_eq!(ledger.count(1, 2), 0);
        assert_eq!(ledger.count(5, 9), 0);
    }

    #[test]
    fn test_mark_attendance_increments_by_one() {
        let mut register = AttendanceRegister::standard();
        assert_eq!(register.mark_attendance(1, MATHEMATICS), Ok(1));
        assert_eq!(register.mark_attendance(1, MATHEMATICS), Ok(2));
        assert_eq!(register.sessions(1, MATHEMATICS), Ok(2));
        assert_eq!(register.sessions(2, MATHEMATICS), Ok(0));
    }

    #[test]
    fn test_mark_attendance_rejects_out_of_range_ids() {
        let mut register = AttendanceRegister::standard();
        assert_eq!(
            register.mark_attendance(0, MATHEMATICS),
            Err(AttendanceError::LearnerOutOfRange { given: 0, max: 50 })
        );
        assert_eq!(
            register.mark_attendance(51, MATHEMATICS),
            Err(AttendanceError::LearnerOutOfRange { given: 51, max: 50 })
        );
        assert_eq!(
            register.mark_attendance(1, 11),
            Err(AttendanceError::SubjectOutOfRange { given: 11, max: 10 })
        );
    }

    #[test]
    fn test_mark_attendance_rejects_unenrolled_subject() {
        let mut register = AttendanceRegister::standard();
        let before = register.ledger().clone();

        let err = register.mark_attendance(31, PHYSICS).unwrap_err();
        assert_eq!(err.to_string(), "Student 31 doesn't take Physics!");
        assert!(register.mark_attendance(1, BUSINESS).is_err());

        assert_eq!(register.ledger(), &before);
    }

    #[test]
    fn test_learner_subject_names() {
        let register = AttendanceRegister::standard();
        let names = register.learner_subject_names(1).unwrap();
        assert_eq!(names.first(), Some(&"Mathematics"));
        assert_eq!(names.last(), Some(&"C.R.E"));
        assert!(register.learner_subject_names(0).is_err());
    }

    #[test]
    fn test_first_learner_takes_cre() {
        let register = AttendanceRegister::standard();
        assert!(register.learner(1).unwrap().takes(CRE));
    }
}
