use serde::Serialize;

use super::domain::{Submission, SubmissionId};
use super::filter::SortKey;
use super::query::sort_submissions;

/// Downloadable payload produced by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no submissions selected")]
    EmptySelection,
    #[error("none of the selected submissions has a resume")]
    NoResumes,
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finish csv buffer: {0}")]
    Buffer(String),
}

#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    #[serde(rename = "Full Name")]
    full_name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "LinkedIn")]
    linkedin_url: &'a str,
    #[serde(rename = "GitHub")]
    github_url: &'a str,
    #[serde(rename = "Technical Skills")]
    technical_skills: String,
    #[serde(rename = "Certifications")]
    certifications: String,
    #[serde(rename = "Career Interests")]
    career_interests: String,
    #[serde(rename = "Work Experience")]
    work_experience: String,
    #[serde(rename = "Years of Experience")]
    years_of_experience: &'a str,
    #[serde(rename = "Education")]
    education_degrees: String,
    #[serde(rename = "Field of Study")]
    education_field: &'a str,
    #[serde(rename = "Resume")]
    resume: &'a str,
    #[serde(rename = "Submitted At")]
    created_at: String,
}

impl<'a> ProfileRow<'a> {
    fn from_submission(submission: &'a Submission) -> Self {
        Self {
            full_name: &submission.full_name,
            email: &submission.email,
            linkedin_url: &submission.linkedin_url,
            github_url: &submission.github_url,
            technical_skills: submission.technical_skills.join("; "),
            certifications: submission
                .certifications
                .iter()
                .map(|cert| match &cert.status {
                    Some(status) => format!("{} ({status})", cert.name),
                    None => cert.name.clone(),
                })
                .collect::<Vec<_>>()
                .join("; "),
            career_interests: submission.career_interests.join("; "),
            work_experience: submission.work_experience.join("; "),
            years_of_experience: submission.years_of_experience.as_deref().unwrap_or_default(),
            education_degrees: submission.education_degrees.join("; "),
            education_field: submission.education_field.as_deref().unwrap_or_default(),
            resume: submission
                .resume
                .as_ref()
                .map(|resume| resume.location.as_str())
                .unwrap_or_default(),
            created_at: submission.created_at.to_rfc3339(),
        }
    }
}

/// CSV roster of `records`, sorted by name ascending.
pub fn profiles_csv(records: &[Submission]) -> Result<ExportArtifact, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptySelection);
    }
    let mut ordered = records.to_vec();
    sort_submissions(&mut ordered, SortKey::NameAsc);

    let mut writer = csv::Writer::from_writer(Vec::new());
    for submission in &ordered {
        writer.serialize(ProfileRow::from_submission(submission))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;

    Ok(ExportArtifact {
        file_name: "student_profiles.csv".to_string(),
        content_type: "text/csv; charset=utf-8",
        bytes,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub resume_file: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeManifest {
    pub entries: Vec<ManifestEntry>,
    /// Selected records that had no resume on file.
    pub skipped: Vec<SubmissionId>,
}

/// Archive entry name for a candidate's resume.
pub fn resume_file_name(full_name: &str) -> String {
    let stem: String = full_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}_resume.pdf")
}

/// Manifest of resumes to bundle for `records`, keeping their order.
pub fn resume_manifest(records: &[Submission]) -> Result<ResumeManifest, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptySelection);
    }
    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for submission in records {
        match submission.resume.as_ref().filter(|resume| resume.is_present()) {
            Some(resume) => entries.push(ManifestEntry {
                id: submission.id.clone(),
                name: submission.full_name.clone(),
                email: submission.email.clone(),
                resume_file: resume_file_name(&submission.full_name),
                location: resume.location.clone(),
            }),
            None => skipped.push(submission.id.clone()),
        }
    }
    if entries.is_empty() {
        return Err(ExportError::NoResumes);
    }
    Ok(ResumeManifest { entries, skipped })
}
