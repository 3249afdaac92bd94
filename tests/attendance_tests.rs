//! Integration tests for subject allocation and the attendance ledger

use school_records::core::attendance::{AllocationRules, AttendanceRegister, Elective, Roster};
use school_records::core::errors::{AttendanceError, RosterError};
use school_records::core::models::subject::{
    BIOLOGY, BUSINESS, CHEMISTRY, COMPUTER, CRE, ENGLISH, GEOLOGY, HISTORY, KISWAHILI,
    MATHEMATICS, PHYSICS,
};
use school_records::core::models::SubjectCatalog;

const MANDATORY: [usize; 6] = [MATHEMATICS, ENGLISH, KISWAHILI, CHEMISTRY, BIOLOGY, COMPUTER];
const HUMANITIES: [usize; 3] = [CRE, HISTORY, GEOLOGY];

fn humanities_of(subjects: &[usize]) -> usize {
    subjects.iter().filter(|s| HUMANITIES.contains(s)).count()
}

#[test]
fn test_science_stream_subject_sets() {
    let register = AttendanceRegister::standard();
    for learner in &register.roster().learners()[..30] {
        let subjects = learner.subjects();
        assert_eq!(&subjects[..6], &MANDATORY);
        assert!(humanities_of(subjects) <= 1);
        if !learner.takes(PHYSICS) {
            assert_eq!(subjects.len(), 6, "no humanity without a physics seat");
        }
    }
}

#[test]
fn test_arts_stream_subject_sets() {
    let register = AttendanceRegister::standard();
    for learner in &register.roster().learners()[30..] {
        let subjects = learner.subjects();
        assert_eq!(&subjects[..6], &MANDATORY);
        assert!(!learner.takes(PHYSICS));
        assert!(humanities_of(subjects) <= 2);
        assert_eq!(subjects.len(), 6 + humanities_of(subjects));
    }
}

#[test]
fn test_caps_hold() {
    let register = AttendanceRegister::standard();
    let roster = register.roster();
    assert!(roster.seats_taken(CRE) <= 30);
    assert!(roster.seats_taken(HISTORY) <= 40);
    assert!(roster.seats_taken(GEOLOGY) <= 20);
    assert!(roster.seats_taken(PHYSICS) <= 35);
    assert_eq!(roster.seats_taken(BUSINESS), 0);
}

#[test]
fn test_first_and_last_learner() {
    let register = AttendanceRegister::standard();

    let first = register.learner(1).unwrap();
    assert_eq!(first.subjects().len(), 8);
    assert!(first.takes(PHYSICS));
    assert!(first.takes(CRE));

    let last = register.learner(50).unwrap();
    assert_eq!(last.subjects(), &[
        MATHEMATICS, ENGLISH, KISWAHILI, CHEMISTRY, BIOLOGY, COMPUTER, HISTORY, GEOLOGY
    ]);
}

#[test]
fn test_unenrolled_mark_changes_nothing() {
    let mut register = AttendanceRegister::standard();
    register.mark_attendance(40, HISTORY).unwrap();
    let before = register.ledger().clone();

    let err = register.mark_attendance(40, CRE).unwrap_err();
    assert!(matches!(err, AttendanceError::NotEnrolled { learner: 40, .. }));
    assert_eq!(register.ledger(), &before);
}

#[test]
fn test_two_marks_count_two() {
    let mut register = AttendanceRegister::standard();
    register.mark_attendance(7, BIOLOGY).unwrap();
    register.mark_attendance(7, BIOLOGY).unwrap();

    let view = register.learner_attendance(7).unwrap();
    for entry in &view.subjects {
        let expected = if entry.subject == BIOLOGY { 2 } else { 0 };
        assert_eq!(entry.sessions, expected, "{}", entry.name);
    }
}

#[test]
fn test_totals_are_sums() {
    let mut register = AttendanceRegister::standard();
    for (learner, subject) in [(1, MATHEMATICS), (1, PHYSICS), (1, CRE), (33, HISTORY), (33, HISTORY)] {
        register.mark_attendance(learner, subject).unwrap();
    }

    for learner in [1, 33] {
        let view = register.learner_attendance(learner).unwrap();
        assert_eq!(view.total, view.subjects.iter().map(|s| s.sessions).sum::<u32>());
    }

    let school = register.school_attendance();
    let by_subject: u32 = school.subjects.iter().map(|s| s.sessions).sum();
    let by_learner: u32 = school.learners.iter().map(|l| l.sessions).sum();
    assert_eq!(by_subject, 5);
    assert_eq!(by_learner, 5);
}

#[test]
fn test_custom_rules_small_school() {
    let rules = AllocationRules {
        learners: 4,
        science_cohort: 2,
        mandatory: vec![MATHEMATICS, ENGLISH],
        science: Elective::new(PHYSICS, 1),
        humanities: vec![Elective::new(HISTORY, 1), Elective::new(GEOLOGY, 2)],
        arts_humanities: 2,
    };
    let register = AttendanceRegister::new(SubjectCatalog::standard(), rules).unwrap();

    assert_eq!(register.learner_count(), 4);
    assert_eq!(register.learner(1).unwrap().subjects(), &[MATHEMATICS, ENGLISH, PHYSICS, HISTORY]);
    // Physics is full, so learner 2 gets no humanity either
    assert_eq!(register.learner(2).unwrap().subjects(), &[MATHEMATICS, ENGLISH]);
    assert_eq!(register.learner(3).unwrap().subjects(), &[MATHEMATICS, ENGLISH, GEOLOGY]);
    assert_eq!(register.learner(4).unwrap().subjects(), &[MATHEMATICS, ENGLISH, GEOLOGY]);
}

#[test]
fn test_invalid_rules_rejected() {
    let catalog = SubjectCatalog::standard();

    let mut rules = AllocationRules::default();
    rules.humanities.push(Elective::new(42, 5));
    assert!(matches!(
        Roster::allocate(&rules, &catalog),
        Err(RosterError::UnknownSubject { subject: 42, .. })
    ));

    let mut rules = AllocationRules::default();
    rules.mandatory.push(PHYSICS);
    assert!(matches!(
        Roster::allocate(&rules, &catalog),
        Err(RosterError::DuplicateSubject { subject: PHYSICS })
    ));

    let rules = AllocationRules {
        science_cohort: 60,
        ..AllocationRules::default()
    };
    assert!(AttendanceRegister::new(catalog, rules).is_err());
}
