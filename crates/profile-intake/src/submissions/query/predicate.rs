use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::Submission;
use super::super::filter::{CombinationMode, Completeness};

/// Multi-valued submission attribute a membership or count predicate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    Skills,
    /// Matched by certification name; status is ignored.
    Certifications,
    Interests,
    WorkExperience,
    EducationDegrees,
    /// The single experience band, treated as a set of zero or one values.
    ExperienceBand,
}

impl ListField {
    pub fn values<'a>(self, submission: &'a Submission) -> BTreeSet<&'a str> {
        match self {
            ListField::Skills => strs(&submission.technical_skills),
            ListField::Certifications => submission.certification_names().collect(),
            ListField::Interests => strs(&submission.career_interests),
            ListField::WorkExperience => strs(&submission.work_experience),
            ListField::EducationDegrees => strs(&submission.education_degrees),
            ListField::ExperienceBand => submission
                .years_of_experience
                .as_deref()
                .into_iter()
                .collect(),
        }
    }
}

fn strs(values: &[String]) -> BTreeSet<&str> {
    values.iter().map(String::as_str).collect()
}

/// Single-valued profile link that a presence toggle checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkField {
    Resume,
    LinkedIn,
}

/// Predicate families a store declares native support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PredicateKind {
    TextSearch,
    MembershipAny,
    MembershipAll,
    MembershipExact,
    Count,
    NonEmpty,
    Present,
    Completeness,
    DateRange,
    EducationField,
}

impl PredicateKind {
    pub const ALL: [PredicateKind; 10] = [
        PredicateKind::TextSearch,
        PredicateKind::MembershipAny,
        PredicateKind::MembershipAll,
        PredicateKind::MembershipExact,
        PredicateKind::Count,
        PredicateKind::NonEmpty,
        PredicateKind::Present,
        PredicateKind::Completeness,
        PredicateKind::DateRange,
        PredicateKind::EducationField,
    ];
}

/// One boolean constraint over a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Predicate {
    /// Lower-cased needle matched against name and email.
    TextSearch { needle: String },
    Membership {
        field: ListField,
        values: Vec<String>,
        mode: CombinationMode,
    },
    /// Inclusive cardinality bounds; `None` is unbounded.
    Count {
        field: ListField,
        min: Option<u32>,
        max: Option<u32>,
    },
    NonEmpty { field: ListField },
    Present { field: LinkField },
    /// Never built with [`Completeness::Any`].
    Completeness { level: Completeness },
    /// Inclusive calendar-day bounds on the UTC submission date.
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// Lower-cased needle matched against the education field.
    EducationField { needle: String },
}

impl Predicate {
    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::TextSearch { .. } => PredicateKind::TextSearch,
            Predicate::Membership { mode, .. } => match mode {
                CombinationMode::Any => PredicateKind::MembershipAny,
                CombinationMode::All => PredicateKind::MembershipAll,
                CombinationMode::Exact => PredicateKind::MembershipExact,
            },
            Predicate::Count { .. } => PredicateKind::Count,
            Predicate::NonEmpty { .. } => PredicateKind::NonEmpty,
            Predicate::Present { .. } => PredicateKind::Present,
            Predicate::Completeness { .. } => PredicateKind::Completeness,
            Predicate::DateRange { .. } => PredicateKind::DateRange,
            Predicate::EducationField { .. } => PredicateKind::EducationField,
        }
    }

    pub fn matches(&self, submission: &Submission) -> bool {
        match self {
            Predicate::TextSearch { needle } => {
                submission.full_name.to_lowercase().contains(needle.as_str())
                    || submission.email.to_lowercase().contains(needle.as_str())
            }
            Predicate::Membership {
                field,
                values,
                mode,
            } => {
                let held = field.values(submission);
                let selected: BTreeSet<&str> = values.iter().map(String::as_str).collect();
                match mode {
                    CombinationMode::Any => selected.iter().any(|value| held.contains(value)),
                    CombinationMode::All => selected.is_subset(&held),
                    CombinationMode::Exact => selected == held,
                }
            }
            Predicate::Count { field, min, max } => {
                let count = field.values(submission).len() as u32;
                min.map_or(true, |min| count >= min) && max.map_or(true, |max| count <= max)
            }
            Predicate::NonEmpty { field } => !field.values(submission).is_empty(),
            Predicate::Present { field } => match field {
                LinkField::Resume => submission.has_resume(),
                LinkField::LinkedIn => !submission.linkedin_url.trim().is_empty(),
            },
            Predicate::Completeness { level } => match level {
                Completeness::Any => true,
                Completeness::Complete => submission.is_complete(),
                Completeness::Partial => !submission.is_complete(),
            },
            Predicate::DateRange { from, to } => {
                let day = submission.created_at.date_naive();
                from.map_or(true, |from| day >= from) && to.map_or(true, |to| day <= to)
            }
            Predicate::EducationField { needle } => submission
                .education_field
                .as_deref()
                .is_some_and(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}
