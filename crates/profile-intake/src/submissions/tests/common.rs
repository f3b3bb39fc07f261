use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::submissions::domain::{
    AttachmentRef, Certification, NewSubmission, Submission, SubmissionId,
};
use crate::submissions::service::SubmissionService;
use crate::submissions::store::{
    FindRequest, FindResult, MemorySubmissionStore, StoreCapabilities, StoreError, StoreProfile,
    SubmissionStore,
};

pub(super) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date")
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Intake payload with only the required fields filled in.
pub(super) fn intake(name: &str, email: &str) -> NewSubmission {
    NewSubmission {
        full_name: name.to_string(),
        email: email.to_string(),
        ..NewSubmission::default()
    }
}

pub(super) fn resume(name: &str) -> Option<AttachmentRef> {
    Some(AttachmentRef {
        location: format!("uploads/{name}.pdf"),
        content_type: "application/pdf".to_string(),
    })
}

/// Stored-record builder for evaluation tests.
pub(super) struct Profile {
    id: String,
    new: NewSubmission,
    created_at: DateTime<Utc>,
}

impl Profile {
    pub(super) fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            new: intake(name, &format!("{id}@example.edu")),
            created_at: at(1, 9),
        }
    }

    pub(super) fn skills(mut self, skills: &[&str]) -> Self {
        self.new.technical_skills = strings(skills);
        self
    }

    pub(super) fn certifications(mut self, names: &[&str]) -> Self {
        self.new.certifications = names.iter().map(|name| Certification::completed(*name)).collect();
        self
    }

    pub(super) fn interests(mut self, interests: &[&str]) -> Self {
        self.new.career_interests = strings(interests);
        self
    }

    pub(super) fn work(mut self, work: &[&str]) -> Self {
        self.new.work_experience = strings(work);
        self
    }

    pub(super) fn band(mut self, band: &str) -> Self {
        self.new.years_of_experience = Some(band.to_string());
        self
    }

    pub(super) fn degrees(mut self, degrees: &[&str]) -> Self {
        self.new.education_degrees = strings(degrees);
        self
    }

    pub(super) fn field(mut self, field: &str) -> Self {
        self.new.education_field = Some(field.to_string());
        self
    }

    /// Resume, LinkedIn and GitHub all present.
    pub(super) fn complete(mut self) -> Self {
        self.new.resume = resume(&self.id);
        self.new.linkedin_url = format!("https://linkedin.com/in/{}", self.id);
        self.new.github_url = format!("https://github.com/{}", self.id);
        self
    }

    pub(super) fn linkedin(mut self) -> Self {
        self.new.linkedin_url = format!("https://linkedin.com/in/{}", self.id);
        self
    }

    pub(super) fn created(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub(super) fn build(self) -> Submission {
        Submission::from_new(SubmissionId(self.id), self.new, self.created_at)
    }
}

/// Varied records that exercise every predicate family.
pub(super) fn roster() -> Vec<Submission> {
    vec![
        Profile::new("sub-a", "Alice Nguyen")
            .skills(&["Python", "Go"])
            .certifications(&["CompTIA A+"])
            .interests(&["Backend Development", "DevOps"])
            .work(&["IT Help Desk"])
            .band("0-3")
            .degrees(&["Bachelor's Degree"])
            .field("Computer Science")
            .complete()
            .created(at(3, 10))
            .build(),
        Profile::new("sub-b", "bob Stone")
            .skills(&["Python"])
            .interests(&["Data Science"])
            .band("4-7")
            .field("Mathematics")
            .linkedin()
            .created(at(5, 8))
            .build(),
        Profile::new("sub-c", "Zoe Park")
            .skills(&["Rust", "Go", "Docker", "Kubernetes", "AWS"])
            .certifications(&["Cisco CCNA", "CompTIA Security+"])
            .work(&["Software Engineering Internship", "Open Source Contributor"])
            .band("8+")
            .degrees(&["Master's Degree", "Bachelor's Degree"])
            .field("Software Engineering")
            .complete()
            .created(at(7, 15))
            .build(),
        Profile::new("sub-d", "Carlos Diaz")
            .skills(&["Python", "Go", "SQL"])
            .certifications(&[
                "CompTIA A+",
                "Cisco CCNA",
                "Google IT Support",
                "AWS Certified Cloud Practitioner",
            ])
            .interests(&["Cloud Engineering"])
            .field("Information Technology")
            .created(at(5, 8))
            .build(),
        Profile::new("sub-e", "Dana White")
            .skills(&["Go", "Python"])
            .band("0-3")
            .created(at(9, 23))
            .build(),
        Profile::new("sub-f", "Eve Adams").created(at(10, 1)).build(),
    ]
}

pub(super) fn store_with(
    capabilities: StoreCapabilities,
    records: Vec<Submission>,
) -> Arc<MemorySubmissionStore> {
    Arc::new(MemorySubmissionStore::from_records(capabilities, records).expect("unique emails"))
}

pub(super) fn service_with(
    capabilities: StoreCapabilities,
    records: Vec<Submission>,
) -> SubmissionService<MemorySubmissionStore> {
    SubmissionService::new(store_with(capabilities, records))
}

/// One service per preset plus a store that evaluates nothing natively.
pub(super) fn services_for_every_preset(
    records: Vec<Submission>,
) -> Vec<(String, SubmissionService<MemorySubmissionStore>)> {
    let mut services: Vec<_> = StoreProfile::ALL
        .into_iter()
        .map(|profile| {
            (
                profile.label().to_string(),
                service_with(profile.capabilities(), records.clone()),
            )
        })
        .collect();
    services.push((
        "none".to_string(),
        service_with(StoreCapabilities::none(), records),
    ));
    services
}

pub(super) fn ids(records: &[Submission]) -> Vec<&str> {
    records.iter().map(|record| record.id.0.as_str()).collect()
}

/// Store whose every call fails as if the backend were down.
pub(super) struct UnavailableStore;

impl SubmissionStore for UnavailableStore {
    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities::full()
    }

    fn find(&self, _request: &FindRequest) -> Result<FindResult, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn create(
        &self,
        _submission: NewSubmission,
        _created_at: DateTime<Utc>,
    ) -> Result<Submission, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn get(&self, _id: &SubmissionId) -> Result<Submission, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn get_many(&self, _ids: &[SubmissionId]) -> Result<Vec<Submission>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn all(&self) -> Result<Vec<Submission>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("valid json")
}
