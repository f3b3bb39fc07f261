use super::domain::Submission;
use super::filter::SortKey;
use super::query::{sort_submissions, Predicate};

/// Application-side pass for predicates the store could not evaluate.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    predicates: Vec<Predicate>,
}

impl PostFilter {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Checks predicates in order and stops at the first miss.
    pub fn admits(&self, submission: &Submission) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(submission))
    }

    /// Keeps admitted records and orders them with the store comparator.
    pub fn apply(&self, records: Vec<Submission>, sort: SortKey) -> Vec<Submission> {
        let mut kept: Vec<Submission> = records
            .into_iter()
            .filter(|record| self.admits(record))
            .collect();
        sort_submissions(&mut kept, sort);
        kept
    }
}
