use super::common::*;

use crate::submissions::filter::{
    CertificationLevel, CombinationMode, Completeness, FilterState, FilterUpdate, PageRequest,
    SkillLevel, SortKey, SubmissionQuery,
};
use crate::submissions::store::StoreCapabilities;
use crate::submissions::Submission;

fn search_ids(records: Vec<Submission>, state: FilterState) -> Vec<String> {
    let service = service_with(StoreCapabilities::full(), records);
    let page = service
        .search(&SubmissionQuery::new(state, PageRequest::first(200)))
        .expect("search succeeds");
    page.submissions.into_iter().map(|record| record.id.0).collect()
}

fn roster_ids(state: FilterState) -> Vec<String> {
    search_ids(roster(), state)
}

fn skills(mode: CombinationMode, selected: &[&str]) -> FilterState {
    FilterState::default()
        .apply(FilterUpdate::Skills(strings(selected)))
        .apply(FilterUpdate::SkillCombination(mode))
}

fn is_subset(inner: &[String], outer: &[String]) -> bool {
    inner.iter().all(|id| outer.contains(id))
}

#[test]
fn default_filter_returns_everything_newest_first() {
    assert_eq!(
        roster_ids(FilterState::default()),
        vec!["sub-f", "sub-e", "sub-c", "sub-b", "sub-d", "sub-a"]
    );
}

#[test]
fn combination_modes_on_two_candidates() {
    let records = vec![
        Profile::new("a", "A").skills(&["Python", "Go"]).created(at(2, 9)).build(),
        Profile::new("b", "B").skills(&["Python"]).created(at(1, 9)).build(),
    ];
    let selection = ["Python", "Go"];

    assert_eq!(search_ids(records.clone(), skills(CombinationMode::All, &selection)), vec!["a"]);
    assert_eq!(
        search_ids(records.clone(), skills(CombinationMode::Any, &selection)),
        vec!["a", "b"]
    );
    assert_eq!(search_ids(records, skills(CombinationMode::Exact, &selection)), vec!["a"]);
}

#[test]
fn exact_within_all_within_any() {
    let selection = ["Python", "Go"];
    let everything = roster_ids(FilterState::default());
    let any = roster_ids(skills(CombinationMode::Any, &selection));
    let all = roster_ids(skills(CombinationMode::All, &selection));
    let exact = roster_ids(skills(CombinationMode::Exact, &selection));

    assert_eq!(exact, vec!["sub-e", "sub-a"]);
    assert_eq!(all, vec!["sub-e", "sub-d", "sub-a"]);
    assert!(is_subset(&exact, &all));
    assert!(is_subset(&all, &any));
    assert!(is_subset(&any, &everything));
    assert!(!any.contains(&"sub-f".to_string()));
}

#[test]
fn skill_count_bounds_are_inclusive() {
    let catalog = ["HTML", "CSS", "JavaScript", "Python", "Java"];
    let records: Vec<Submission> = (1..=5)
        .map(|count| {
            Profile::new(&format!("n{count}"), &format!("Count {count}"))
                .skills(&catalog[..count])
                .created(at(count as u32, 9))
                .build()
        })
        .collect();
    let state = FilterState::default()
        .apply(FilterUpdate::MinSkills(2))
        .apply(FilterUpdate::MaxSkills(4))
        .apply(FilterUpdate::SortBy(SortKey::Oldest));

    assert_eq!(search_ids(records, state), vec!["n2", "n3", "n4"]);
}

#[test]
fn completeness_partitions_the_roster() {
    let complete = roster_ids(
        FilterState::default().apply(FilterUpdate::ProfileCompleteness(Completeness::Complete)),
    );
    let partial = roster_ids(
        FilterState::default().apply(FilterUpdate::ProfileCompleteness(Completeness::Partial)),
    );

    assert_eq!(complete, vec!["sub-c", "sub-a"]);
    assert!(complete.iter().all(|id| !partial.contains(id)));
    assert_eq!(complete.len() + partial.len(), roster().len());
}

#[test]
fn blank_link_counts_as_missing() {
    let mut record = Profile::new("blank", "Blank Links").complete().build();
    record.github_url = "   ".to_string();
    let state =
        FilterState::default().apply(FilterUpdate::ProfileCompleteness(Completeness::Partial));
    assert_eq!(search_ids(vec![record], state), vec!["blank"]);
}

#[test]
fn name_sort_is_case_insensitive() {
    let records = vec![
        Profile::new("1", "Zoe").build(),
        Profile::new("2", "Alice").build(),
        Profile::new("3", "Bob").build(),
    ];
    let service = service_with(StoreCapabilities::full(), records);
    let page = service
        .search(&SubmissionQuery::new(
            FilterState::default().apply(FilterUpdate::SortBy(SortKey::NameAsc)),
            PageRequest::first(10),
        ))
        .expect("search succeeds");
    let names: Vec<_> = page.submissions.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Zoe"]);

    let roster_sorted =
        roster_ids(FilterState::default().apply(FilterUpdate::SortBy(SortKey::NameAsc)));
    assert_eq!(
        roster_sorted,
        vec!["sub-a", "sub-b", "sub-d", "sub-e", "sub-f", "sub-c"]
    );
}

#[test]
fn date_bounds_cover_whole_days() {
    let state = FilterState::default()
        .apply(FilterUpdate::DateFrom(Some(date(5))))
        .apply(FilterUpdate::DateTo(Some(date(7))));
    assert_eq!(roster_ids(state), vec!["sub-c", "sub-b", "sub-d"]);

    let open_ended = FilterState::default().apply(FilterUpdate::DateFrom(Some(date(9))));
    assert_eq!(roster_ids(open_ended), vec!["sub-f", "sub-e"]);
}

#[test]
fn education_field_matches_substring_ignoring_case() {
    let state = FilterState::default().apply(FilterUpdate::EducationField("ENGINEERING".into()));
    assert_eq!(roster_ids(state), vec!["sub-c"]);

    let state = FilterState::default().apply(FilterUpdate::EducationField("comp".into()));
    assert_eq!(roster_ids(state), vec!["sub-a"]);
}

#[test]
fn level_bands_filter_on_counts() {
    let level = |level| FilterState::default().apply(FilterUpdate::SkillLevel(level));
    assert_eq!(
        roster_ids(level(SkillLevel::Beginner)),
        vec!["sub-e", "sub-b", "sub-d", "sub-a"]
    );
    assert_eq!(roster_ids(level(SkillLevel::Intermediate)), vec!["sub-c"]);
    assert!(roster_ids(level(SkillLevel::Advanced)).is_empty());

    let certs = |level| FilterState::default().apply(FilterUpdate::CertificationLevel(level));
    assert_eq!(roster_ids(certs(CertificationLevel::Entry)), vec!["sub-a"]);
    assert_eq!(roster_ids(certs(CertificationLevel::Professional)), vec!["sub-c"]);
    assert_eq!(roster_ids(certs(CertificationLevel::Expert)), vec!["sub-d"]);
}

#[test]
fn toggles_require_presence() {
    let toggled = |update| roster_ids(FilterState::default().apply(update));
    assert_eq!(
        toggled(FilterUpdate::HasAnyCertification(true)),
        vec!["sub-c", "sub-d", "sub-a"]
    );
    assert_eq!(toggled(FilterUpdate::HasWorkExperience(true)), vec!["sub-c", "sub-a"]);
    assert_eq!(toggled(FilterUpdate::HasResume(true)), vec!["sub-c", "sub-a"]);
    assert_eq!(
        toggled(FilterUpdate::HasLinkedIn(true)),
        vec!["sub-c", "sub-b", "sub-a"]
    );
}

#[test]
fn search_matches_name_or_email() {
    let search = |needle: &str| {
        roster_ids(FilterState::default().apply(FilterUpdate::Search(needle.to_string())))
    };
    assert_eq!(search("ALICE"), vec!["sub-a"]);
    assert_eq!(search("sub-c@"), vec!["sub-c"]);
    assert_eq!(search("example.edu").len(), roster().len());
    assert!(search("nobody").is_empty());
}

#[test]
fn single_value_dimensions_use_any_semantics() {
    let state = FilterState::default()
        .apply(FilterUpdate::YearsOfExperience(strings(&["0-3", "8+"])))
        .apply(FilterUpdate::Interests(strings(&["DevOps", "Data Science"])));
    assert_eq!(roster_ids(state), vec!["sub-a"]);

    let state = FilterState::default()
        .apply(FilterUpdate::Certifications(strings(&["Cisco CCNA"])))
        .apply(FilterUpdate::EducationDegrees(strings(&["Bachelor's Degree"])));
    assert_eq!(roster_ids(state), vec!["sub-c"]);
}

#[test]
fn native_and_deferred_paths_agree_for_every_preset() {
    let states = vec![
        FilterState::default(),
        skills(CombinationMode::Exact, &["Python", "Go"]),
        skills(CombinationMode::All, &["Go"]).apply(FilterUpdate::SortBy(SortKey::NameDesc)),
        FilterState::default()
            .apply(FilterUpdate::Search("a".into()))
            .apply(FilterUpdate::ProfileCompleteness(Completeness::Partial))
            .apply(FilterUpdate::SortBy(SortKey::Oldest)),
        FilterState::default()
            .apply(FilterUpdate::MinSkills(2))
            .apply(FilterUpdate::HasAnyCertification(true))
            .apply(FilterUpdate::DateTo(Some(date(7)))),
        FilterState::default()
            .apply(FilterUpdate::EducationField("e".into()))
            .apply(FilterUpdate::SkillLevel(SkillLevel::Beginner))
            .apply(FilterUpdate::SortBy(SortKey::NameAsc)),
        FilterState::default()
            .apply(FilterUpdate::HasLinkedIn(true))
            .apply(FilterUpdate::CertificationLevel(CertificationLevel::Professional)),
    ];
    let windows = [
        PageRequest::first(200),
        PageRequest::first(2),
        PageRequest { limit: 2, offset: 1 },
        PageRequest { limit: 3, offset: 5 },
    ];
    let services = services_for_every_preset(roster());

    for state in &states {
        for window in windows {
            let query = SubmissionQuery::new(state.clone(), window);
            let (reference_name, reference) = &services[0];
            let expected = reference.search(&query).expect("reference search");
            for (name, service) in &services[1..] {
                let actual = service.search(&query).expect("search succeeds");
                assert_eq!(
                    actual, expected,
                    "{name} differs from {reference_name} for {state:?} at {window:?}"
                );
            }
        }
    }
}

#[test]
fn deferred_filtering_recomputes_has_more() {
    let service = service_with(StoreCapabilities::basic_document(), roster());
    let state = FilterState::default()
        .apply(FilterUpdate::ProfileCompleteness(Completeness::Partial))
        .apply(FilterUpdate::SortBy(SortKey::NameAsc));

    let first = service
        .search(&SubmissionQuery::new(state.clone(), PageRequest::first(2)))
        .expect("search succeeds");
    assert_eq!(ids(&first.submissions), vec!["sub-b", "sub-d"]);
    assert_eq!(first.total_count, 4);
    assert!(first.has_more);

    let second = service
        .search(&SubmissionQuery::new(state, PageRequest { limit: 2, offset: 2 }))
        .expect("search succeeds");
    assert_eq!(ids(&second.submissions), vec!["sub-e", "sub-f"]);
    assert!(!second.has_more);
}
