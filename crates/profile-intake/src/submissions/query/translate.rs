use super::super::filter::{CombinationMode, Completeness, FilterState, SortKey};
use super::super::store::StoreCapabilities;
use super::predicate::{LinkField, ListField, Predicate};

/// Predicate set split by where it will be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedQuery {
    pub native: Vec<Predicate>,
    pub deferred: Vec<Predicate>,
    pub sort: SortKey,
}

impl TranslatedQuery {
    pub fn is_fully_native(&self) -> bool {
        self.deferred.is_empty()
    }
}

/// Predicates implied by `state`, in evaluation order. A default state yields none.
pub fn predicates_for(state: &FilterState) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    let needle = state.search.trim().to_lowercase();
    if !needle.is_empty() {
        predicates.push(Predicate::TextSearch { needle });
    }

    push_membership(
        &mut predicates,
        ListField::Skills,
        &state.skills,
        state.effective_skill_combination(),
    );
    push_membership(
        &mut predicates,
        ListField::Certifications,
        &state.certifications,
        CombinationMode::Any,
    );
    push_membership(
        &mut predicates,
        ListField::Interests,
        &state.interests,
        CombinationMode::Any,
    );
    push_membership(
        &mut predicates,
        ListField::WorkExperience,
        &state.work_experience,
        CombinationMode::Any,
    );
    push_membership(
        &mut predicates,
        ListField::ExperienceBand,
        &state.years_of_experience,
        CombinationMode::Any,
    );
    push_membership(
        &mut predicates,
        ListField::EducationDegrees,
        &state.education_degrees,
        CombinationMode::Any,
    );

    if state.min_skills > 0 || state.max_skills > 0 {
        predicates.push(Predicate::Count {
            field: ListField::Skills,
            min: (state.min_skills > 0).then_some(state.min_skills),
            max: (state.max_skills > 0).then_some(state.max_skills),
        });
    }
    if let Some((min, max)) = state.skill_level.bounds() {
        predicates.push(Predicate::Count {
            field: ListField::Skills,
            min,
            max,
        });
    }
    if let Some((min, max)) = state.certification_level.bounds() {
        predicates.push(Predicate::Count {
            field: ListField::Certifications,
            min,
            max,
        });
    }

    if state.has_any_certification {
        predicates.push(Predicate::NonEmpty {
            field: ListField::Certifications,
        });
    }
    if state.has_work_experience {
        predicates.push(Predicate::NonEmpty {
            field: ListField::WorkExperience,
        });
    }
    if state.has_resume {
        predicates.push(Predicate::Present {
            field: LinkField::Resume,
        });
    }
    if state.has_linkedin {
        predicates.push(Predicate::Present {
            field: LinkField::LinkedIn,
        });
    }
    if state.profile_completeness != Completeness::Any {
        predicates.push(Predicate::Completeness {
            level: state.profile_completeness,
        });
    }

    if state.date_from.is_some() || state.date_to.is_some() {
        predicates.push(Predicate::DateRange {
            from: state.date_from,
            to: state.date_to,
        });
    }

    let field_needle = state.education_field.trim().to_lowercase();
    if !field_needle.is_empty() {
        predicates.push(Predicate::EducationField {
            needle: field_needle,
        });
    }

    predicates
}

fn push_membership(
    predicates: &mut Vec<Predicate>,
    field: ListField,
    selected: &[String],
    mode: CombinationMode,
) {
    let mut values: Vec<String> = Vec::with_capacity(selected.len());
    for value in selected.iter().map(|value| value.trim()) {
        if !value.is_empty() && !values.iter().any(|seen| seen == value) {
            values.push(value.to_string());
        }
    }
    if !values.is_empty() {
        predicates.push(Predicate::Membership {
            field,
            values,
            mode,
        });
    }
}

/// Splits the predicates for `state` into what `capabilities` evaluates natively and
/// what must run after fetch. Relative order is kept on both sides.
pub fn translate(state: &FilterState, capabilities: &StoreCapabilities) -> TranslatedQuery {
    let (native, deferred) = predicates_for(state)
        .into_iter()
        .partition(|predicate| capabilities.supports(predicate.kind()));

    TranslatedQuery {
        native,
        deferred,
        sort: state.sort_by,
    }
}
