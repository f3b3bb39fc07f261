use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of values a select-style filter control can take.
pub trait FilterOption: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.label().eq_ignore_ascii_case(raw))
    }

    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|option| option.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result ordering; names compare case-insensitively, every tie breaks on the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

impl FilterOption for SortKey {
    const ALL: &'static [Self] = &[Self::Newest, Self::Oldest, Self::NameAsc, Self::NameDesc];

    fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }
}

/// How a multi-valued selection is matched against a record's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinationMode {
    /// Record shares at least one selected value.
    #[default]
    Any,
    /// Record holds every selected value.
    All,
    /// Record holds exactly the selected values.
    Exact,
}

impl FilterOption for CombinationMode {
    const ALL: &'static [Self] = &[Self::Any, Self::All, Self::Exact];

    fn label(self) -> &'static str {
        match self {
            CombinationMode::Any => "any",
            CombinationMode::All => "all",
            CombinationMode::Exact => "exact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    #[default]
    Any,
    Complete,
    Partial,
}

impl FilterOption for Completeness {
    const ALL: &'static [Self] = &[Self::Any, Self::Complete, Self::Partial];

    fn label(self) -> &'static str {
        match self {
            Completeness::Any => "any",
            Completeness::Complete => "complete",
            Completeness::Partial => "partial",
        }
    }
}

/// Skill-count bands exposed as a level selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Any,
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Inclusive skill-count bounds for the band.
    pub const fn bounds(self) -> Option<(Option<u32>, Option<u32>)> {
        match self {
            SkillLevel::Any => None,
            SkillLevel::Beginner => Some((Some(1), Some(3))),
            SkillLevel::Intermediate => Some((Some(4), Some(7))),
            SkillLevel::Advanced => Some((Some(8), None)),
        }
    }
}

impl FilterOption for SkillLevel {
    const ALL: &'static [Self] = &[
        Self::Any,
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
    ];

    fn label(self) -> &'static str {
        match self {
            SkillLevel::Any => "any",
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

/// Certification-count bands exposed as a level selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationLevel {
    #[default]
    Any,
    Entry,
    Professional,
    Expert,
}

impl CertificationLevel {
    pub const fn bounds(self) -> Option<(Option<u32>, Option<u32>)> {
        match self {
            CertificationLevel::Any => None,
            CertificationLevel::Entry => Some((Some(1), Some(1))),
            CertificationLevel::Professional => Some((Some(2), Some(3))),
            CertificationLevel::Expert => Some((Some(4), None)),
        }
    }
}

impl FilterOption for CertificationLevel {
    const ALL: &'static [Self] = &[
        Self::Any,
        Self::Entry,
        Self::Professional,
        Self::Expert,
    ];

    fn label(self) -> &'static str {
        match self {
            CertificationLevel::Any => "any",
            CertificationLevel::Entry => "entry",
            CertificationLevel::Professional => "professional",
            CertificationLevel::Expert => "expert",
        }
    }
}

/// Every criterion the review panel can set. Values are replaced wholesale through
/// [`FilterState::apply`]; a previously returned state is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub interests: Vec<String>,
    pub work_experience: Vec<String>,
    pub years_of_experience: Vec<String>,
    pub education_degrees: Vec<String>,
    pub education_field: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort_by: SortKey,
    pub skill_combination: CombinationMode,
    /// Zero means no lower bound.
    pub min_skills: u32,
    /// Zero means no upper bound.
    pub max_skills: u32,
    pub has_any_certification: bool,
    pub has_work_experience: bool,
    pub has_resume: bool,
    #[serde(rename = "hasLinkedIn")]
    pub has_linkedin: bool,
    pub profile_completeness: Completeness,
    pub skill_level: SkillLevel,
    pub certification_level: CertificationLevel,
}

/// Single-field replacement emitted by a filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Search(String),
    Skills(Vec<String>),
    Certifications(Vec<String>),
    Interests(Vec<String>),
    WorkExperience(Vec<String>),
    YearsOfExperience(Vec<String>),
    EducationDegrees(Vec<String>),
    EducationField(String),
    DateFrom(Option<NaiveDate>),
    DateTo(Option<NaiveDate>),
    SortBy(SortKey),
    SkillCombination(CombinationMode),
    MinSkills(u32),
    MaxSkills(u32),
    HasAnyCertification(bool),
    HasWorkExperience(bool),
    HasResume(bool),
    HasLinkedIn(bool),
    ProfileCompleteness(Completeness),
    SkillLevel(SkillLevel),
    CertificationLevel(CertificationLevel),
}

impl FilterState {
    /// Returns a new state with exactly one field replaced.
    #[must_use]
    pub fn apply(&self, update: FilterUpdate) -> FilterState {
        let mut next = self.clone();
        match update {
            FilterUpdate::Search(value) => next.search = value,
            FilterUpdate::Skills(values) => next.skills = values,
            FilterUpdate::Certifications(values) => next.certifications = values,
            FilterUpdate::Interests(values) => next.interests = values,
            FilterUpdate::WorkExperience(values) => next.work_experience = values,
            FilterUpdate::YearsOfExperience(values) => next.years_of_experience = values,
            FilterUpdate::EducationDegrees(values) => next.education_degrees = values,
            FilterUpdate::EducationField(value) => next.education_field = value,
            FilterUpdate::DateFrom(value) => next.date_from = value,
            FilterUpdate::DateTo(value) => next.date_to = value,
            FilterUpdate::SortBy(value) => next.sort_by = value,
            FilterUpdate::SkillCombination(value) => next.skill_combination = value,
            FilterUpdate::MinSkills(value) => next.min_skills = value,
            FilterUpdate::MaxSkills(value) => next.max_skills = value,
            FilterUpdate::HasAnyCertification(value) => next.has_any_certification = value,
            FilterUpdate::HasWorkExperience(value) => next.has_work_experience = value,
            FilterUpdate::HasResume(value) => next.has_resume = value,
            FilterUpdate::HasLinkedIn(value) => next.has_linkedin = value,
            FilterUpdate::ProfileCompleteness(value) => next.profile_completeness = value,
            FilterUpdate::SkillLevel(value) => next.skill_level = value,
            FilterUpdate::CertificationLevel(value) => next.certification_level = value,
        }
        next
    }

    /// Replaces every field with its default in one step.
    #[must_use]
    pub fn cleared(&self) -> FilterState {
        FilterState::default()
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.is_default()
    }

    /// The combination mode only takes effect once more than one skill is selected.
    pub fn effective_skill_combination(&self) -> CombinationMode {
        if self.skills.len() > 1 {
            self.skill_combination
        } else {
            CombinationMode::Any
        }
    }
}
