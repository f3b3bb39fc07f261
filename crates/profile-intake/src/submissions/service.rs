use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{NewSubmission, Submission, SubmissionId};
use super::evaluator::PostFilter;
use super::export::{self, ExportArtifact, ExportError, ResumeManifest};
use super::filter::{FilterError, SortKey, SubmissionQuery};
use super::intake::{self, IntakeError};
use super::query::{sort_submissions, translate};
use super::store::{FindRequest, StoreError, SubmissionStore};
use crate::config::SearchConfig;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub submissions: Vec<Submission>,
    pub total_count: usize,
    pub has_more: bool,
}

/// Distinct values in use across stored submissions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSummary {
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub interests: Vec<String>,
    pub work_experience: Vec<String>,
}

/// Service composing intake validation, the store, the translator and the post-filter.
pub struct SubmissionService<S: ?Sized> {
    store: Arc<S>,
    search: SearchConfig,
}

impl<S> SubmissionService<S>
where
    S: SubmissionStore + ?Sized + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_search_config(store, SearchConfig::default())
    }

    pub fn with_search_config(store: Arc<S>, search: SearchConfig) -> Self {
        Self { store, search }
    }

    pub fn search_config(&self) -> SearchConfig {
        self.search
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Validate and persist a new submission stamped with the current time.
    pub fn submit(&self, new: NewSubmission) -> Result<Submission, SubmissionServiceError> {
        self.submit_at(new, Utc::now())
    }

    pub fn submit_at(
        &self,
        new: NewSubmission,
        created_at: DateTime<Utc>,
    ) -> Result<Submission, SubmissionServiceError> {
        let normalized = intake::normalize(new)?;
        let stored = self.store.create(normalized, created_at).map_err(|err| {
            if let StoreError::DuplicateEmail(email) = &err {
                tracing::info!(%email, "rejected duplicate submission");
            }
            err
        })?;
        tracing::info!(id = %stored.id, "submission accepted");
        Ok(stored)
    }

    /// Runs a filtered, sorted, paged search.
    pub fn search(&self, query: &SubmissionQuery) -> Result<SearchPage, SubmissionServiceError> {
        let translated = translate(&query.filter, &self.store.capabilities());
        let page = query.page;
        tracing::debug!(
            native = translated.native.len(),
            deferred = translated.deferred.len(),
            limit = page.limit,
            offset = page.offset,
            "searching submissions"
        );

        if translated.is_fully_native() {
            let found = self.store.find(&FindRequest::page(
                translated.native,
                translated.sort,
                page.limit,
                page.offset,
            ))?;
            let has_more = page.offset + found.records.len() < found.total;
            return Ok(SearchPage {
                submissions: found.records,
                total_count: found.total,
                has_more,
            });
        }

        let candidates = self
            .store
            .find(&FindRequest::all_matches(translated.native, translated.sort))?;
        let fetched = candidates.records.len();
        let filtered = PostFilter::new(translated.deferred).apply(candidates.records, translated.sort);
        let total_count = filtered.len();
        tracing::debug!(fetched, kept = total_count, "applied deferred predicates");

        let submissions: Vec<Submission> = filtered
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect();
        let has_more = page.offset + submissions.len() < total_count;
        Ok(SearchPage {
            submissions,
            total_count,
            has_more,
        })
    }

    pub fn get(&self, id: &SubmissionId) -> Result<Submission, SubmissionServiceError> {
        Ok(self.store.get(id)?)
    }

    pub fn tags(&self) -> Result<TagSummary, SubmissionServiceError> {
        let records = self.store.all()?;
        let mut skills = BTreeSet::new();
        let mut certifications = BTreeSet::new();
        let mut interests = BTreeSet::new();
        let mut work_experience = BTreeSet::new();
        for record in &records {
            skills.extend(record.technical_skills.iter().cloned());
            certifications.extend(record.certification_names().map(str::to_string));
            interests.extend(record.career_interests.iter().cloned());
            work_experience.extend(record.work_experience.iter().cloned());
        }
        Ok(TagSummary {
            skills: skills.into_iter().collect(),
            certifications: certifications.into_iter().collect(),
            interests: interests.into_iter().collect(),
            work_experience: work_experience.into_iter().collect(),
        })
    }

    pub fn export_profiles(
        &self,
        ids: &[SubmissionId],
    ) -> Result<ExportArtifact, SubmissionServiceError> {
        let records = self.selected(ids)?;
        let artifact = export::profiles_csv(&records)?;
        tracing::info!(rows = records.len(), "exported profile roster");
        Ok(artifact)
    }

    pub fn resume_manifest(
        &self,
        ids: &[SubmissionId],
    ) -> Result<ResumeManifest, SubmissionServiceError> {
        let records = self.selected(ids)?;
        let manifest = export::resume_manifest(&records)?;
        if !manifest.skipped.is_empty() {
            tracing::warn!(skipped = manifest.skipped.len(), "selected submissions without resumes");
        }
        Ok(manifest)
    }

    fn selected(&self, ids: &[SubmissionId]) -> Result<Vec<Submission>, SubmissionServiceError> {
        if ids.is_empty() {
            return Err(ExportError::EmptySelection.into());
        }
        let mut seen = HashSet::new();
        let unique: Vec<SubmissionId> = ids
            .iter()
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect();
        let mut records = self.store.get_many(&unique)?;
        if records.is_empty() {
            return Err(StoreError::NotFound(ids[0].clone()).into());
        }
        sort_submissions(&mut records, SortKey::NameAsc);
        Ok(records)
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
