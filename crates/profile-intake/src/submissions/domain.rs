use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored submissions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Certification entry; the status is whatever the candidate selected ("Completed", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Certification {
    pub fn completed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Some("Completed".to_string()),
        }
    }
}

/// Pointer to an uploaded file held by the blob store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRef {
    pub location: String,
    #[serde(default)]
    pub content_type: String,
}

impl AttachmentRef {
    pub fn is_present(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

/// Intake payload posted by the profile form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSubmission {
    pub full_name: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub resume: Option<AttachmentRef>,
    pub headshot: Option<AttachmentRef>,
    pub technical_skills: Vec<String>,
    pub certifications: Vec<Certification>,
    pub career_interests: Vec<String>,
    pub work_experience: Vec<String>,
    pub years_of_experience: Option<String>,
    pub education_degrees: Vec<String>,
    pub education_field: Option<String>,
}

/// One candidate profile as persisted by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub resume: Option<AttachmentRef>,
    #[serde(default)]
    pub headshot: Option<AttachmentRef>,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub career_interests: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<String>,
    #[serde(default)]
    pub years_of_experience: Option<String>,
    #[serde(default)]
    pub education_degrees: Vec<String>,
    #[serde(default)]
    pub education_field: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Builds the stored record from an accepted intake payload.
    pub fn from_new(id: SubmissionId, new: NewSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: new.full_name,
            email: new.email,
            linkedin_url: new.linkedin_url,
            github_url: new.github_url,
            resume: new.resume,
            headshot: new.headshot,
            technical_skills: new.technical_skills,
            certifications: new.certifications,
            career_interests: new.career_interests,
            work_experience: new.work_experience,
            years_of_experience: new.years_of_experience,
            education_degrees: new.education_degrees,
            education_field: new.education_field,
            created_at,
        }
    }

    /// Resume, LinkedIn and GitHub are all present and non-blank.
    pub fn is_complete(&self) -> bool {
        self.resume.as_ref().is_some_and(AttachmentRef::is_present)
            && !self.linkedin_url.trim().is_empty()
            && !self.github_url.trim().is_empty()
    }

    pub fn has_resume(&self) -> bool {
        self.resume.as_ref().is_some_and(AttachmentRef::is_present)
    }

    pub fn certification_names(&self) -> impl Iterator<Item = &str> {
        self.certifications.iter().map(|cert| cert.name.as_str())
    }
}

/// Key used to enforce email uniqueness across submissions.
pub fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
