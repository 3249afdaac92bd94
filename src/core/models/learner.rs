//! Learner model

use super::SubjectId;

/// A learner on the attendance roster
///
/// `index` is 0-based storage position; users see [`Learner::number`], which is
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Learner {
    index: usize,
    subjects: Vec<SubjectId>,
}

impl Learner {
    /// Create a learner with no subjects
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            subjects: Vec::new(),
        }
    }

    /// 0-based storage index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// 1-based id shown to users
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    /// Enrolled subjects in the order they were assigned
    #[must_use]
    pub fn subjects(&self) -> &[SubjectId] {
        &self.subjects
    }

    /// Whether the learner takes `subject`
    #[must_use]
    pub fn takes(&self, subject: SubjectId) -> bool {
        self.subjects.contains(&subject)
    }

    /// Append `subject` unless already enrolled. Returns true if it was added.
    pub fn enroll(&mut self, subject: SubjectId) -> bool {
        if self.takes(subject) {
            return false;
        }
        self.subjects.push(subject);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_one_based() {
        let learner = Learner::new(0);
        assert_eq!(learner.index(), 0);
        assert_eq!(learner.number(), 1);
    }

    #[test]
    fn test_enroll_rejects_duplicates() {
        let mut learner = Learner::new(3);
        assert!(learner.enroll(5));
        assert!(!learner.enroll(5));
        assert_eq!(learner.subjects(), &[5]);
        assert!(learner.takes(5));
        assert!(!learner.takes(6));
    }
}
