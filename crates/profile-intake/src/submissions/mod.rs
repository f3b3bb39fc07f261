//! Candidate profile intake, filtered review and export.
//!
//! A [`FilterState`] is translated into predicates split by what the configured
//! [`SubmissionStore`] evaluates natively; the remainder runs in a [`PostFilter`]
//! that shares the store's matching and ordering rules.

pub mod domain;
pub mod evaluator;
pub mod export;
pub mod filter;
pub mod intake;
pub mod query;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{AttachmentRef, Certification, NewSubmission, Submission, SubmissionId};
pub use evaluator::PostFilter;
pub use export::{ExportArtifact, ExportError, ManifestEntry, ResumeManifest};
pub use filter::{
    CertificationLevel, CombinationMode, Completeness, FilterError, FilterOption, FilterState,
    FilterUpdate, PageRequest, SkillLevel, SortKey, SubmissionQuery,
};
pub use intake::IntakeError;
pub use query::{Predicate, PredicateKind, TranslatedQuery};
pub use router::{submission_router, ExportRequest};
pub use service::{SearchPage, SubmissionService, SubmissionServiceError, TagSummary};
pub use store::{
    FindRequest, FindResult, JsonFileSubmissionStore, MemorySubmissionStore, StoreCapabilities,
    StoreError, StoreProfile, SubmissionStore,
};
