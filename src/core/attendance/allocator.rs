//! Greedy subject allocation for the attendance roster
//!
//! Runs once at startup, in learner order, with no backtracking. Caps may be
//! left unfilled and a learner may end up with only the mandatory subjects.

use crate::core::errors::RosterError;
use crate::core::models::subject::{
    BIOLOGY, CHEMISTRY, COMPUTER, CRE, ENGLISH, GEOLOGY, HISTORY, KISWAHILI, MATHEMATICS, PHYSICS,
};
use crate::core::models::{Learner, SubjectCatalog, SubjectId};
use logger::{debug, info};
use std::collections::HashSet;

/// A subject with a limited number of elective seats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elective {
    /// Subject the seats belong to
    pub subject: SubjectId,
    /// Maximum number of learners that can take it as an elective
    pub cap: usize,
}

impl Elective {
    /// Create an elective pool
    #[must_use]
    pub const fn new(subject: SubjectId, cap: usize) -> Self {
        Self { subject, cap }
    }
}

/// Business rules driving [`Roster::allocate`]
///
/// The default is the school's rule set: 50 learners, the first 30 in the
/// science stream, Physics capped at 35, humanities scanned as C.R.E (30),
/// History (40), Geology (20), and two humanities for the arts stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRules {
    /// Number of learners on the roster
    pub learners: usize,
    /// Learners with a 0-based index below this are in the science stream
    pub science_cohort: usize,
    /// Subjects every learner takes, in enrollment order
    pub mandatory: Vec<SubjectId>,
    /// Elective science offered to the science stream
    pub science: Elective,
    /// Humanities in scan priority order
    pub humanities: Vec<Elective>,
    /// How many humanities an arts-stream learner may take
    pub arts_humanities: usize,
}

impl Default for AllocationRules {
    fn default() -> Self {
        Self {
            learners: 50,
            science_cohort: 30,
            mandatory: vec![MATHEMATICS, ENGLISH, KISWAHILI, CHEMISTRY, BIOLOGY, COMPUTER],
            science: Elective::new(PHYSICS, 35),
            humanities: vec![
                Elective::new(CRE, 30),
                Elective::new(HISTORY, 40),
                Elective::new(GEOLOGY, 20),
            ],
            arts_humanities: 2,
        }
    }
}

impl AllocationRules {
    /// All electives, science first, then humanities in priority order
    pub fn electives(&self) -> impl Iterator<Item = &Elective> {
        std::iter::once(&self.science).chain(self.humanities.iter())
    }

    /// Check the rules against `catalog`
    ///
    /// # Errors
    /// - `UnknownSubject` if any subject id is outside the catalog
    /// - `DuplicateSubject` if a subject appears twice across mandatory and elective lists
    /// - `CohortTooLarge` if the science stream is bigger than the roster
    pub fn validate(&self, catalog: &SubjectCatalog) -> Result<(), RosterError> {
        if self.science_cohort > self.learners {
            return Err(RosterError::CohortTooLarge {
                cohort: self.science_cohort,
                learners: self.learners,
            });
        }

        let mut seen = HashSet::new();
        let all = self
            .mandatory
            .iter()
            .copied()
            .chain(self.electives().map(|e| e.subject));
        for subject in all {
            if !catalog.contains(subject) {
                return Err(RosterError::UnknownSubject {
                    subject,
                    catalog_len: catalog.len(),
                });
            }
            if !seen.insert(subject) {
                return Err(RosterError::DuplicateSubject { subject });
            }
        }
        Ok(())
    }
}

/// Learners with their allocated subjects plus the elective seat counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    learners: Vec<Learner>,
    seats: Vec<usize>,
}

impl Roster {
    /// Assign every learner a subject set under `rules`
    ///
    /// # Errors
    /// Returns the validation error when `rules` do not fit `catalog`.
    pub fn allocate(rules: &AllocationRules, catalog: &SubjectCatalog) -> Result<Self, RosterError> {
        rules.validate(catalog)?;

        let mut seats = vec![0; catalog.len()];
        let mut learners = Vec::with_capacity(rules.learners);

        for index in 0..rules.learners {
            let mut learner = Learner::new(index);
            for &subject in &rules.mandatory {
                learner.enroll(subject);
            }

            if index < rules.science_cohort {
                if take_seat(&mut seats, rules.science) {
                    learner.enroll(rules.science.subject);
                    if let Some(humanity) = rules
                        .humanities
                        .iter()
                        .find(|h| take_seat(&mut seats, **h))
                    {
                        learner.enroll(humanity.subject);
                    }
                }
            } else {
                let mut taken = 0;
                for humanity in &rules.humanities {
                    if taken == rules.arts_humanities {
                        break;
                    }
                    if take_seat(&mut seats, *humanity) {
                        learner.enroll(humanity.subject);
                        taken += 1;
                    }
                }
            }

            debug!(
                "Learner {} allocated subjects {:?}",
                learner.number(),
                learner.subjects()
            );
            learners.push(learner);
        }

        let roster = Self { learners, seats };
        for elective in rules.electives() {
            info!(
                "{}: {}/{}",
                catalog.name(elective.subject),
                roster.seats_taken(elective.subject),
                elective.cap
            );
        }
        Ok(roster)
    }

    /// All learners in index order
    #[must_use]
    pub fn learners(&self) -> &[Learner] {
        &self.learners
    }

    /// Learner at 0-based `index`
    #[must_use]
    pub fn learner(&self, index: usize) -> Option<&Learner> {
        self.learners.get(index)
    }

    /// Number of learners
    #[must_use]
    pub fn len(&self) -> usize {
        self.learners.len()
    }

    /// True when the roster has no learners
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.learners.is_empty()
    }

    /// Elective seats granted for `subject`
    #[must_use]
    pub fn seats_taken(&self, subject: SubjectId) -> usize {
        self.seats.get(subject).copied().unwrap_or(0)
    }
}

/// Claim one seat if the running count is below the cap.
fn take_seat(seats: &mut [usize], elective: Elective) -> bool {
    let taken = &mut seats[elective.subject];
    if *taken < elective.cap {
        *taken += 1;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Roster {
        Roster::allocate(&AllocationRules::default(), &SubjectCatalog::standard()).unwrap()
    }

    #[test]
    fn test_first_learner_gets_physics_and_cre() {
        let roster = standard();
        let first = roster.learner(0).unwrap();
        assert_eq!(
            first.subjects(),
            &[MATHEMATICS, ENGLISH, KISWAHILI, CHEMISTRY, BIOLOGY, COMPUTER, PHYSICS, CRE]
        );
    }

    #[test]
    fn test_last_learner_gets_history_and_geology() {
        let roster = standard();
        let last = roster.learner(49).unwrap();
        assert_eq!(last.subjects().len(), 8);
        assert!(last.takes(HISTORY));
        assert!(last.takes(GEOLOGY));
        assert!(!last.takes(CRE));
        assert!(!last.takes(PHYSICS));
    }

    #[test]
    fn test_standard_seat_counts() {
        let roster = standard();
        assert_eq!(roster.seats_taken(PHYSICS), 30);
        assert_eq!(roster.seats_taken(CRE), 30);
        assert_eq!(roster.seats_taken(HISTORY), 20);
        assert_eq!(roster.seats_taken(GEOLOGY), 20);
        assert_eq!(roster.seats_taken(MATHEMATICS), 0);
    }

    #[test]
    fn test_full_science_leaves_only_mandatory() {
        let rules = AllocationRules {
            science: Elective::new(PHYSICS, 1),
            ..AllocationRules::default()
        };
        let roster = Roster::allocate(&rules, &SubjectCatalog::standard()).unwrap();

        assert!(roster.learner(0).unwrap().takes(PHYSICS));
        let second = roster.learner(1).unwrap();
        assert_eq!(second.subjects(), rules.mandatory.as_slice());
    }

    #[test]
    fn test_humanity_scan_falls_through_full_pools() {
        let rules = AllocationRules {
            humanities: vec![
                Elective::new(CRE, 1),
                Elective::new(HISTORY, 1),
                Elective::new(GEOLOGY, 1),
            ],
            ..AllocationRules::default()
        };
        let roster = Roster::allocate(&rules, &SubjectCatalog::standard()).unwrap();

        assert!(roster.learner(0).unwrap().takes(CRE));
        assert!(roster.learner(1).unwrap().takes(HISTORY));
        assert!(roster.learner(2).unwrap().takes(GEOLOGY));
        assert_eq!(roster.learner(3).unwrap().subjects().len(), 7);
    }

    #[test]
    fn test_arts_learner_takes_at_most_two() {
        let rules = AllocationRules {
            science_cohort: 0,
            learners: 1,
            ..AllocationRules::default()
        };
        let roster = Roster::allocate(&rules, &SubjectCatalog::standard()).unwrap();
        let only = roster.learner(0).unwrap();
        assert!(only.takes(CRE));
        assert!(only.takes(HISTORY));
        assert!(!only.takes(GEOLOGY));
    }

    #[test]
    fn test_validate_rejects_unknown_subject() {
        let rules = AllocationRules {
            science: Elective::new(99, 10),
            ..AllocationRules::default()
        };
        assert_eq!(
            rules.validate(&SubjectCatalog::standard()),
            Err(RosterError::UnknownSubject {
                subject: 99,
                catalog_len: 11
            })
        );
    }

    #[test]
    fn test_validate_rejects_elective_in_mandatory_set() {
        let mut rules = AllocationRules::default();
        rules.mandatory.push(PHYSICS);
        assert_eq!(
            rules.validate(&SubjectCatalog::standard()),
            Err(RosterError::DuplicateSubject { subject: PHYSICS })
        );
    }

    #[test]
    fn test_validate_rejects_oversized_cohort() {
        let rules = AllocationRules {
            science_cohort: 60,
            ..AllocationRules::default()
        };
        assert!(matches!(
            Roster::allocate(&rules, &SubjectCatalog::standard()),
            Err(RosterError::CohortTooLarge { .. })
        ));
    }
}
