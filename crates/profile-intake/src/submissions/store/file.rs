use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::super::domain::{NewSubmission, Submission, SubmissionId};
use super::memory::{lock, MemoryState};
use super::{FindRequest, FindResult, StoreCapabilities, StoreError, SubmissionStore};

/// Store that keeps records in memory and rewrites a JSON snapshot after every
/// accepted create. Snapshots are a plain array of submissions.
#[derive(Debug)]
pub struct JsonFileSubmissionStore {
    path: PathBuf,
    capabilities: StoreCapabilities,
    state: Mutex<MemoryState>,
}

impl JsonFileSubmissionStore {
    /// Loads `path` if it exists; a missing file starts an empty store.
    pub fn open(
        path: impl Into<PathBuf>,
        capabilities: StoreCapabilities,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        let records = load_snapshot(&path)?;
        tracing::debug!(path = %path.display(), records = records.len(), "loaded submission snapshot");
        Ok(Self {
            path,
            capabilities,
            state: Mutex::new(MemoryState::from_records(records)?),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads a snapshot written by [`JsonFileSubmissionStore`].
pub fn load_snapshot(path: &Path) -> Result<Vec<Submission>, StoreError> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(unavailable(path, err)),
    };
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&raw).map_err(|err| unavailable(path, err))
}

fn write_snapshot(path: &Path, records: &[Submission]) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(records).map_err(|err| unavailable(path, err))?;
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);
    fs::write(&temp, body).map_err(|err| unavailable(&temp, err))?;
    fs::rename(&temp, path).map_err(|err| unavailable(path, err))
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(format!("{}: {err}", path.display()))
}

impl SubmissionStore for JsonFileSubmissionStore {
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
        let mut state = lock(&self.state)?;
        let record = state.insert(submission, created_at)?;
        if let Err(err) = write_snapshot(&self.path, state.records()) {
            state.rollback_last();
            tracing::warn!(error = %err, "failed to persist submission snapshot");
            return Err(err);
        }
        Ok(record)
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
