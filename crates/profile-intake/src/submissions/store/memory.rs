use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::super::domain::{email_key, NewSubmission, Submission, SubmissionId};
use super::super::query::sort_submissions;
use super::{FindRequest, FindResult, StoreCapabilities, StoreError, StoreProfile, SubmissionStore};

/// Record set shared by the in-memory and file-backed stores.
#[derive(Debug, Default)]
pub(super) struct MemoryState {
    records: Vec<Submission>,
    emails: HashSet<String>,
    next_id: u64,
}

impl MemoryState {
    pub(super) fn from_records(records: Vec<Submission>) -> Result<Self, StoreError> {
        let mut state = MemoryState::default();
        for record in records {
            if !state.emails.insert(email_key(&record.email)) {
                return Err(StoreError::DuplicateEmail(record.email));
            }
            state.records.push(record);
        }
        state.next_id = state.records.len() as u64;
        Ok(state)
    }

    pub(super) fn records(&self) -> &[Submission] {
        &self.records
    }

    fn allocate_id(&mut self) -> SubmissionId {
        loop {
            self.next_id += 1;
            let id = SubmissionId(format!("sub-{:06}", self.next_id));
            if !self.records.iter().any(|record| record.id == id) {
                return id;
            }
        }
    }

    pub(super) fn insert(
        &mut self,
        submission: NewSubmission,
        created_at: DateTime<Utc>,
    ) -> Result<Submission, StoreError> {
        let key = email_key(&submission.email);
        if self.emails.contains(&key) {
            return Err(StoreError::DuplicateEmail(submission.email));
        }
        let id = self.allocate_id();
        let record = Submission::from_new(id, submission, created_at);
        self.emails.insert(key);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Undoes the most recent [`MemoryState::insert`].
    pub(super) fn rollback_last(&mut self) {
        if let Some(record) = self.records.pop() {
            self.emails.remove(&email_key(&record.email));
        }
    }

    pub(super) fn find(
        &self,
        capabilities: &StoreCapabilities,
        request: &FindRequest,
    ) -> Result<FindResult, StoreError> {
        if let Some(predicate) = request
            .predicates
            .iter()
            .find(|predicate| !capabilities.supports(predicate.kind()))
        {
            return Err(StoreError::UnsupportedPredicate(predicate.kind()));
        }

        let mut matches: Vec<Submission> = self
            .records
            .iter()
            .filter(|record| request.predicates.iter().all(|p| p.matches(record)))
            .cloned()
            .collect();
        sort_submissions(&mut matches, request.sort);

        let total = matches.len();
        let records = matches
            .into_iter()
            .skip(request.offset)
            .take(request.limit.unwrap_or(usize::MAX))
            .collect();
        Ok(FindResult { records, total })
    }

    pub(super) fn get(&self, id: &SubmissionId) -> Result<Submission, StoreError> {
        self.records
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    pub(super) fn get_many(&self, ids: &[SubmissionId]) -> Vec<Submission> {
        ids.iter()
            .filter_map(|id| self.records.iter().find(|record| &record.id == id))
            .cloned()
            .collect()
    }
}

pub(super) fn lock(state: &Mutex<MemoryState>) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
    state
        .lock()
        .map_err(|_| StoreError::Unavailable("submission store lock poisoned".to_string()))
}

/// Process-local store that evaluates whatever its capability set declares.
#[derive(Debug)]
pub struct MemorySubmissionStore {
    capabilities: StoreCapabilities,
    state: Mutex<MemoryState>,
}

impl MemorySubmissionStore {
    pub fn new(profile: StoreProfile) -> Self {
        Self::with_capabilities(profile.capabilities())
    }

    pub fn with_capabilities(capabilities: StoreCapabilities) -> Self {
        Self {
            capabilities,
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// Seeds the store with existing records; fails on duplicate emails.
    pub fn from_records(
        capabilities: StoreCapabilities,
        records: Vec<Submission>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            capabilities,
            state: Mutex::new(MemoryState::from_records(records)?),
        })
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(lock(&self.state)?.records().len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for MemorySubmissionStore {
    fn default() -> Self {
        Self::new(StoreProfile::Full)
    }
}

impl SubmissionStore for MemorySubmissionStore {
    fn capabilities(&self) -> StoreCapabilities {
        self.capabilities.clone()
    }

    fn find(&self, request: &FindRequest) -> Result<FindResult, StoreError> {
        lock(&self.state)?.find(&self.capabilities, request)
    }

    fn create(
        &self,
        submission: NewSubmission,
        created_at: DateTime<Utc>,
    ) -> Result<Submission, StoreError> {
        lock(&self.state)?.insert(submission, created_at)
    }

    fn get(&self, id: &SubmissionId) -> Result<Submission, StoreError> {
        lock(&self.state)?.get(id)
    }

    fn get_many(&self, ids: &[SubmissionId]) -> Result<Vec<Submission>, StoreError> {
        Ok(lock(&self.state)?.get_many(ids))
    }

    fn all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(lock(&self.state)?.records().to_vec())
    }
}
