//! Read-only attendance views
//!
//! Each view is computed from the roster and ledger at call time and never
//! mutates either.

use super::register::AttendanceRegister;
use crate::core::errors::AttendanceError;
use crate::core::models::SubjectId;

/// Sessions attended in one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSessions {
    /// Subject id
    pub subject: SubjectId,
    /// Subject display name
    pub name: String,
    /// Sessions recorded
    pub sessions: u32,
}

/// Sessions attended by one learner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerSessions {
    /// 1-based learner id
    pub learner: usize,
    /// Sessions recorded
    pub sessions: u32,
}

/// Per-learner view: every enrolled subject and the total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerAttendance {
    /// 1-based learner id
    pub learner: usize,
    /// Enrolled subjects in enrollment order
    pub subjects: Vec<SubjectSessions>,
    /// Sum over `subjects`
    pub total: u32,
}

/// Per-subject view: every enrolled learner, head count and total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAttendance {
    /// Subject id
    pub subject: SubjectId,
    /// Subject display name
    pub name: String,
    /// Enrolled learners in id order
    pub learners: Vec<LearnerSessions>,
    /// Number of enrolled learners
    pub enrolled: usize,
    /// Sum over `learners`
    pub total: u32,
}

/// One line of the school-wide subject summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTotals {
    /// Subject id
    pub subject: SubjectId,
    /// Subject display name
    pub name: String,
    /// Number of enrolled learners
    pub enrolled: usize,
    /// Sessions summed over enrolled learners
    pub sessions: u32,
}

/// School-wide view: totals for every subject and every learner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolAttendance {
    /// All catalog subjects in id order
    pub subjects: Vec<SubjectTotals>,
    /// All learners in id order
    pub learners: Vec<LearnerSessions>,
}

/// Elective seat usage after allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatUsage {
    /// Subject display name
    pub name: String,
    /// Seats granted
    pub taken: usize,
    /// Seat cap
    pub cap: usize,
}

impl AttendanceRegister {
    /// Counts for each subject a 1-based learner id takes, plus the total
    ///
    /// # Errors
    /// `LearnerOutOfRange` for an invalid id.
    pub fn learner_attendance(&self, learner: usize) -> Result<LearnerAttendance, AttendanceError> {
        let record = self.learner(learner)?;
        let subjects: Vec<SubjectSessions> = record
            .subjects()
            .iter()
            .map(|&subject| SubjectSessions {
                subject,
                name: self.catalog().name(subject).to_string(),
                sessions: self.ledger().count(record.index(), subject),
            })
            .collect();
        let total = subjects.iter().map(|s| s.sessions).sum();

        Ok(LearnerAttendance {
            learner,
            subjects,
            total,
        })
    }

    /// Counts for every learner enrolled in `subject`
    ///
    /// # Errors
    /// `SubjectOutOfRange` for an id outside the catalog.
    pub fn subject_attendance(&self, subject: SubjectId) -> Result<SubjectAttendance, AttendanceError> {
        self.check_subject(subject)?;
        let learners: Vec<LearnerSessions> = self
            .roster()
            .learners()
            .iter()
            .filter(|l| l.takes(subject))
            .map(|l| LearnerSessions {
                learner: l.number(),
                sessions: self.ledger().count(l.index(), subject),
            })
            .collect();

        Ok(SubjectAttendance {
            subject,
            name: self.catalog().name(subject).to_string(),
            enrolled: learners.len(),
            total: learners.iter().map(|l| l.sessions).sum(),
            learners,
        })
    }

    /// Totals for every subject and every learner
    #[must_use]
    pub fn school_attendance(&self) -> SchoolAttendance {
        let subjects = self
            .catalog()
            .iter()
            .map(|subject| {
                let (enrolled, sessions) = self
                    .roster()
                    .learners()
                    .iter()
                    .filter(|l| l.takes(subject.id))
                    .fold((0, 0), |(n, total), l| {
                        (n + 1, total + self.ledger().count(l.index(), subject.id))
                    });
                SubjectTotals {
                    subject: subject.id,
                    name: subject.name.clone(),
                    enrolled,
                    sessions,
                }
            })
            .collect();

        let learners = self
            .roster()
            .learners()
            .iter()
            .map(|l| LearnerSessions {
                learner: l.number(),
                sessions: l
                    .subjects()
                    .iter()
                    .map(|&s| self.ledger().count(l.index(), s))
                    .sum(),
            })
            .collect();

        SchoolAttendance { subjects, learners }
    }

    /// Elective seats granted against each cap, science first
    #[must_use]
    pub fn seat_usage(&self) -> Vec<SeatUsage> {
        self.rules()
            .electives()
            .map(|e| SeatUsage {
                name: self.catalog().name(e.subject).to_string(),
                taken: self.roster().seats_taken(e.subject),
                cap: e.cap,
            })
            .collect()
    }
}
