use std::cmp::Ordering;

use super::super::domain::Submission;
use super::super::filter::SortKey;

/// Total order for `key`; every tie falls back to the id so the result is stable
/// regardless of which path produced the records.
pub fn compare(key: SortKey, a: &Submission, b: &Submission) -> Ordering {
    let primary = match key {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::Oldest => a.created_at.cmp(&b.created_at),
        SortKey::NameAsc => name_key(a).cmp(&name_key(b)),
        SortKey::NameDesc => name_key(b).cmp(&name_key(a)),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

fn name_key(submission: &Submission) -> String {
    submission.full_name.trim().to_lowercase()
}

pub fn sort_submissions(records: &mut [Submission], key: SortKey) {
    records.sort_by(|a, b| compare(key, a, b));
}
