//! Flat key/value encoding of a [`FilterState`] for the submissions endpoint.
//!
//! Only fields that differ from their default are emitted, so a missing key always
//! means "no constraint". Decoding rejects malformed values instead of dropping them.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::state::{
    CertificationLevel, CombinationMode, Completeness, FilterOption, FilterState, SkillLevel,
    SortKey,
};
use crate::config::SearchConfig;

pub const SEARCH: &str = "search";
pub const SKILLS: &str = "skills";
pub const CERTIFICATIONS: &str = "certifications";
pub const INTERESTS: &str = "interests";
pub const WORK_EXPERIENCE: &str = "workExperience";
pub const DATE_FROM: &str = "dateFrom";
pub const DATE_TO: &str = "dateTo";
pub const SORT_BY: &str = "sortBy";
pub const SKILL_COMBINATION: &str = "skillCombination";
pub const MIN_SKILLS: &str = "minSkills";
pub const MAX_SKILLS: &str = "maxSkills";
pub const HAS_ANY_CERTIFICATION: &str = "hasAnyCertification";
pub const HAS_WORK_EXPERIENCE: &str = "hasWorkExperience";
pub const HAS_RESUME: &str = "hasResume";
pub const HAS_LINKEDIN: &str = "hasLinkedIn";
pub const PROFILE_COMPLETENESS: &str = "profileCompleteness";
pub const SKILL_LEVEL: &str = "skillLevel";
pub const CERTIFICATION_LEVEL: &str = "certificationLevel";
pub const YEARS_OF_EXPERIENCE: &str = "yearsOfExperience";
pub const EDUCATION_DEGREES: &str = "educationDegrees";
pub const EDUCATION_FIELD: &str = "educationField";
pub const LIMIT: &str = "limit";
pub const OFFSET: &str = "offset";

/// Page window requested alongside a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn first(limit: usize) -> Self {
        Self { limit, offset: 0 }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(SearchConfig::default().default_page_size)
    }
}

/// Decoded request for the submissions listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionQuery {
    pub filter: FilterState,
    pub page: PageRequest,
}

impl SubmissionQuery {
    pub fn new(filter: FilterState, page: PageRequest) -> Self {
        Self { filter, page }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("{parameter}: '{value}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate {
        parameter: &'static str,
        value: String,
    },
    #[error("{parameter}: '{value}' is not one of: {expected}")]
    InvalidOption {
        parameter: &'static str,
        value: String,
        expected: String,
    },
    #[error("{parameter}: '{value}' is not a non-negative integer")]
    InvalidNumber {
        parameter: &'static str,
        value: String,
    },
    #[error("{parameter}: '{value}' must be 'true' or 'false'")]
    InvalidFlag {
        parameter: &'static str,
        value: String,
    },
    #[error("{lower} must not be greater than {upper}")]
    InvertedRange {
        lower: &'static str,
        upper: &'static str,
    },
    #[error("{parameter} must be between {min} and {max}")]
    OutOfRange {
        parameter: &'static str,
        min: usize,
        max: usize,
    },
}

impl FilterError {
    /// Query parameter the error refers to, for client-side field highlighting.
    pub fn parameter(&self) -> &'static str {
        match self {
            FilterError::InvalidDate { parameter, .. }
            | FilterError::InvalidOption { parameter, .. }
            | FilterError::InvalidNumber { parameter, .. }
            | FilterError::InvalidFlag { parameter, .. }
            | FilterError::OutOfRange { parameter, .. } => *parameter,
            FilterError::InvertedRange { lower, .. } => *lower,
        }
    }
}

/// Non-default fields of `state` as ordered key/value pairs.
pub fn to_query_pairs(state: &FilterState) -> Vec<(&'static str, String)> {
    let defaults = FilterState::default();
    let mut pairs = Vec::new();

    let trimmed_search = state.search.trim();
    if !trimmed_search.is_empty() {
        pairs.push((SEARCH, trimmed_search.to_string()));
    }
    push_list(&mut pairs, SKILLS, &state.skills);
    push_list(&mut pairs, CERTIFICATIONS, &state.certifications);
    push_list(&mut pairs, INTERESTS, &state.interests);
    push_list(&mut pairs, WORK_EXPERIENCE, &state.work_experience);
    if let Some(date) = state.date_from {
        pairs.push((DATE_FROM, date.format("%Y-%m-%d").to_string()));
    }
    if let Some(date) = state.date_to {
        pairs.push((DATE_TO, date.format("%Y-%m-%d").to_string()));
    }
    if state.sort_by != defaults.sort_by {
        pairs.push((SORT_BY, state.sort_by.label().to_string()));
    }
    if state.skill_combination != defaults.skill_combination {
        pairs.push((SKILL_COMBINATION, state.skill_combination.label().to_string()));
    }
    if state.min_skills > 0 {
        pairs.push((MIN_SKILLS, state.min_skills.to_string()));
    }
    if state.max_skills > 0 {
        pairs.push((MAX_SKILLS, state.max_skills.to_string()));
    }
    if state.has_any_certification {
        pairs.push((HAS_ANY_CERTIFICATION, "true".to_string()));
    }
    if state.has_work_experience {
        pairs.push((HAS_WORK_EXPERIENCE, "true".to_string()));
    }
    if state.has_resume {
        pairs.push((HAS_RESUME, "true".to_string()));
    }
    if state.has_linkedin {
        pairs.push((HAS_LINKEDIN, "true".to_string()));
    }
    if state.profile_completeness != Completeness::Any {
        pairs.push((
            PROFILE_COMPLETENESS,
            state.profile_completeness.label().to_string(),
        ));
    }
    if state.skill_level != SkillLevel::Any {
        pairs.push((SKILL_LEVEL, state.skill_level.label().to_string()));
    }
    if state.certification_level != CertificationLevel::Any {
        pairs.push((
            CERTIFICATION_LEVEL,
            state.certification_level.label().to_string(),
        ));
    }
    push_list(&mut pairs, YEARS_OF_EXPERIENCE, &state.years_of_experience);
    push_list(&mut pairs, EDUCATION_DEGREES, &state.education_degrees);
    let trimmed_field = state.education_field.trim();
    if !trimmed_field.is_empty() {
        pairs.push((EDUCATION_FIELD, trimmed_field.to_string()));
    }

    pairs
}

fn push_list(pairs: &mut Vec<(&'static str, String)>, key: &'static str, values: &[String]) {
    let joined = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    if !joined.is_empty() {
        pairs.push((key, joined));
    }
}

/// Percent-encoded query string; empty when the state is all defaults.
pub fn to_query_string(state: &FilterState) -> String {
    encode_pairs(to_query_pairs(state))
}

/// Query string for a filter plus its page window.
pub fn to_request_query(query: &SubmissionQuery) -> String {
    let mut pairs = to_query_pairs(&query.filter);
    pairs.push((LIMIT, query.page.limit.to_string()));
    if query.page.offset > 0 {
        pairs.push((OFFSET, query.page.offset.to_string()));
    }
    encode_pairs(pairs)
}

fn encode_pairs(pairs: Vec<(&'static str, String)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits a raw `a=b&c=d` string into decoded parameters. `+` decodes to a space.
pub fn parse_query_string(raw: &str) -> HashMap<String, String> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Builds a query from decoded request parameters. Unknown keys are ignored.
pub fn decode_query(
    params: &HashMap<String, String>,
    limits: SearchConfig,
) -> Result<SubmissionQuery, FilterError> {
    let filter = decode_filter(params)?;

    let limit = match param(params, LIMIT) {
        Some(raw) => parse_count(LIMIT, raw)? as usize,
        None => limits.default_page_size,
    };
    if !(1..=limits.max_page_size).contains(&limit) {
        return Err(FilterError::OutOfRange {
            parameter: LIMIT,
            min: 1,
            max: limits.max_page_size,
        });
    }
    let offset = match param(params, OFFSET) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| FilterError::InvalidNumber {
                parameter: OFFSET,
                value: raw.to_string(),
            })?,
        None => 0,
    };

    Ok(SubmissionQuery {
        filter,
        page: PageRequest { limit, offset },
    })
}

/// Decodes only the filter fields; pagination keys are ignored.
pub fn decode_filter(params: &HashMap<String, String>) -> Result<FilterState, FilterError> {
    let mut state = FilterState {
        search: param(params, SEARCH).unwrap_or_default().to_string(),
        skills: list(params, SKILLS),
        certifications: list(params, CERTIFICATIONS),
        interests: list(params, INTERESTS),
        work_experience: list(params, WORK_EXPERIENCE),
        years_of_experience: list(params, YEARS_OF_EXPERIENCE),
        education_degrees: list(params, EDUCATION_DEGREES),
        education_field: param(params, EDUCATION_FIELD)
            .unwrap_or_default()
            .to_string(),
        ..FilterState::default()
    };

    state.date_from = param(params, DATE_FROM)
        .map(|raw| parse_date(DATE_FROM, raw))
        .transpose()?;
    state.date_to = param(params, DATE_TO)
        .map(|raw| parse_date(DATE_TO, raw))
        .transpose()?;
    if let (Some(from), Some(to)) = (state.date_from, state.date_to) {
        if from > to {
            return Err(FilterError::InvertedRange {
                lower: DATE_FROM,
                upper: DATE_TO,
            });
        }
    }

    state.sort_by = option::<SortKey>(params, SORT_BY)?.unwrap_or_default();
    state.skill_combination = option::<CombinationMode>(params, SKILL_COMBINATION)?
        .unwrap_or_default();
    state.profile_completeness =
        option::<Completeness>(params, PROFILE_COMPLETENESS)?.unwrap_or_default();
    state.skill_level = option::<SkillLevel>(params, SKILL_LEVEL)?.unwrap_or_default();
    state.certification_level =
        option::<CertificationLevel>(params, CERTIFICATION_LEVEL)?.unwrap_or_default();

    state.min_skills = param(params, MIN_SKILLS)
        .map(|raw| parse_count(MIN_SKILLS, raw))
        .transpose()?
        .unwrap_or(0);
    state.max_skills = param(params, MAX_SKILLS)
        .map(|raw| parse_count(MAX_SKILLS, raw))
        .transpose()?
        .unwrap_or(0);
    if state.min_skills > 0 && state.max_skills > 0 && state.min_skills > state.max_skills {
        return Err(FilterError::InvertedRange {
            lower: MIN_SKILLS,
            upper: MAX_SKILLS,
        });
    }

    state.has_any_certification = flag(params, HAS_ANY_CERTIFICATION)?;
    state.has_work_experience = flag(params, HAS_WORK_EXPERIENCE)?;
    state.has_resume = flag(params, HAS_RESUME)?;
    state.has_linkedin = flag(params, HAS_LINKEDIN)?;

    Ok(state)
}

/// Trimmed, non-empty parameter value.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn list(params: &HashMap<String, String>, key: &str) -> Vec<String> {
    param(params, key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn option<T: FilterOption>(
    params: &HashMap<String, String>,
    key: &'static str,
) -> Result<Option<T>, FilterError> {
    param(params, key)
        .map(|raw| {
            T::parse(raw).ok_or_else(|| FilterError::InvalidOption {
                parameter: key,
                value: raw.to_string(),
                expected: T::expected(),
            })
        })
        .transpose()
}

fn flag(params: &HashMap<String, String>, key: &'static str) -> Result<bool, FilterError> {
    match param(params, key) {
        None => Ok(false),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(FilterError::InvalidFlag {
                parameter: key,
                value: raw.to_string(),
            }),
        },
    }
}

fn parse_count(key: &'static str, raw: &str) -> Result<u32, FilterError> {
    raw.parse::<u32>().map_err(|_| FilterError::InvalidNumber {
        parameter: key,
        value: raw.to_string(),
    })
}

/// Accepts a calendar date or an RFC 3339 timestamp (reduced to its UTC date).
fn parse_date(key: &'static str, raw: &str) -> Result<NaiveDate, FilterError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    Err(FilterError::InvalidDate {
        parameter: key,
        value: raw.to_string(),
    })
}
