use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::super::query::PredicateKind;

/// Predicate kinds a storage engine evaluates itself. Education-field matching is
/// never native, whatever the engine claims.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct StoreCapabilities {
    kinds: BTreeSet<PredicateKind>,
}

impl StoreCapabilities {
    pub fn new(kinds: impl IntoIterator<Item = PredicateKind>) -> Self {
        Self {
            kinds: kinds
                .into_iter()
                .filter(|kind| *kind != PredicateKind::EducationField)
                .collect(),
        }
    }

    /// Nothing native; every predicate runs in the post-filter.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self::new(PredicateKind::ALL)
    }

    pub fn document() -> Self {
        Self::new([
            PredicateKind::TextSearch,
            PredicateKind::MembershipAny,
            PredicateKind::MembershipAll,
            PredicateKind::DateRange,
            PredicateKind::NonEmpty,
        ])
    }

    pub fn relational() -> Self {
        Self::new([
            PredicateKind::TextSearch,
            PredicateKind::MembershipAny,
            PredicateKind::DateRange,
            PredicateKind::NonEmpty,
            PredicateKind::Count,
            PredicateKind::Completeness,
        ])
    }

    pub fn basic_document() -> Self {
        Self::new([PredicateKind::DateRange])
    }

    pub fn supports(&self, kind: PredicateKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = PredicateKind> + '_ {
        self.kinds.iter().copied()
    }
}

/// Named capability preset selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreProfile {
    #[default]
    Full,
    Document,
    Relational,
    BasicDocument,
}

impl StoreProfile {
    pub const ALL: [StoreProfile; 4] = [
        StoreProfile::Full,
        StoreProfile::Document,
        StoreProfile::Relational,
        StoreProfile::BasicDocument,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "full" => Some(StoreProfile::Full),
            "document" => Some(StoreProfile::Document),
            "relational" => Some(StoreProfile::Relational),
            "basic-document" | "basic_document" => Some(StoreProfile::BasicDocument),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StoreProfile::Full => "full",
            StoreProfile::Document => "document",
            StoreProfile::Relational => "relational",
            StoreProfile::BasicDocument => "basic-document",
        }
    }

    pub fn capabilities(self) -> StoreCapabilities {
        match self {
            StoreProfile::Full => StoreCapabilities::full(),
            StoreProfile::Document => StoreCapabilities::document(),
            StoreProfile::Relational => StoreCapabilities::relational(),
            StoreProfile::BasicDocument => StoreCapabilities::basic_document(),
        }
    }
}

impl fmt::Display for StoreProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
