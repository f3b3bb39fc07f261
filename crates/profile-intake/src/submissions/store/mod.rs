mod capabilities;
mod file;
mod memory;

use chrono::{DateTime, Utc};

use super::domain::{NewSubmission, Submission, SubmissionId};
use super::filter::SortKey;
use super::query::{Predicate, PredicateKind};

pub use capabilities::{StoreCapabilities, StoreProfile};
pub use file::{load_snapshot, JsonFileSubmissionStore};
pub use memory::MemorySubmissionStore;

/// Native query handed to a store. Every predicate must be within the store's
/// capabilities; `limit: None` returns every match after `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindRequest {
    pub predicates: Vec<Predicate>,
    pub sort: SortKey,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl FindRequest {
    pub fn all_matches(predicates: Vec<Predicate>, sort: SortKey) -> Self {
        Self {
            predicates,
            sort,
            limit: None,
            offset: 0,
        }
    }

    pub fn page(predicates: Vec<Predicate>, sort: SortKey, limit: usize, offset: usize) -> Self {
        Self {
            predicates,
            sort,
            limit: Some(limit),
            offset,
        }
    }
}

/// One page of native matches plus the total before paging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindResult {
    pub records: Vec<Submission>,
    pub total: usize,
}

/// Persistence contract shared by every storage backend.
pub trait SubmissionStore: Send + Sync {
    fn capabilities(&self) -> StoreCapabilities;

    /// Evaluates the native predicates, sorts, and pages.
    fn find(&self, request: &FindRequest) -> Result<FindResult, StoreError>;

    /// Atomic email check and insert; assigns the id.
    fn create(
        &self,
        submission: NewSubmission,
        created_at: DateTime<Utc>,
    ) -> Result<Submission, StoreError>;

    fn get(&self, id: &SubmissionId) -> Result<Submission, StoreError>;

    /// Records for `ids` in request order; unknown ids are skipped.
    fn get_many(&self, ids: &[SubmissionId]) -> Result<Vec<Submission>, StoreError>;

    fn all(&self) -> Result<Vec<Submission>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a submission with email {0} already exists")]
    DuplicateEmail(String),
    #[error("submission {0} not found")]
    NotFound(SubmissionId),
    #[error("store cannot evaluate {0:?} predicates")]
    UnsupportedPredicate(PredicateKind),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}
