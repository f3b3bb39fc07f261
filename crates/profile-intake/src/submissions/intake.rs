//! Normalization and validation of intake payloads before they reach a store.

use mime::Mime;

use super::domain::{AttachmentRef, Certification, NewSubmission};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("fullName is required")]
    MissingName,
    #[error("email '{0}' is not a valid address")]
    InvalidEmail(String),
    #[error("{field} must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
    #[error("{field} has unsupported content type '{content_type}', expected {expected}")]
    UnsupportedAttachment {
        field: &'static str,
        content_type: String,
        expected: &'static str,
    },
}

impl IntakeError {
    /// Payload field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            IntakeError::MissingName => "fullName",
            IntakeError::InvalidEmail(_) => "email",
            IntakeError::InvalidUrl { field, .. }
            | IntakeError::UnsupportedAttachment { field, .. } => *field,
        }
    }
}

/// Trims, de-duplicates and validates a payload. The returned value is what gets stored.
pub fn normalize(new: NewSubmission) -> Result<NewSubmission, IntakeError> {
    let full_name = new.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(IntakeError::MissingName);
    }

    let email = new.email.trim().to_string();
    if !is_plausible_email(&email) {
        return Err(IntakeError::InvalidEmail(email));
    }

    Ok(NewSubmission {
        full_name,
        email,
        linkedin_url: link("linkedinUrl", &new.linkedin_url)?,
        github_url: link("githubUrl", &new.github_url)?,
        resume: attachment("resume", new.resume, AttachmentKind::Pdf)?,
        headshot: attachment("headshot", new.headshot, AttachmentKind::Image)?,
        technical_skills: dedupe(new.technical_skills),
        certifications: dedupe_certifications(new.certifications),
        career_interests: dedupe(new.career_interests),
        work_experience: dedupe(new.work_experience),
        years_of_experience: blank_to_none(new.years_of_experience),
        education_degrees: dedupe(new.education_degrees),
        education_field: blank_to_none(new.education_field),
    })
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn link(field: &'static str, raw: &str) -> Result<String, IntakeError> {
    let value = raw.trim();
    if value.is_empty() || value.starts_with("https://") || value.starts_with("http://") {
        Ok(value.to_string())
    } else {
        Err(IntakeError::InvalidUrl {
            field,
            value: value.to_string(),
        })
    }
}

#[derive(Clone, Copy)]
enum AttachmentKind {
    Pdf,
    Image,
}

impl AttachmentKind {
    fn accepts(self, mime: &Mime) -> bool {
        match self {
            AttachmentKind::Pdf => mime.essence_str() == mime::APPLICATION_PDF.essence_str(),
            AttachmentKind::Image => mime.type_() == mime::IMAGE,
        }
    }

    fn expected(self) -> &'static str {
        match self {
            AttachmentKind::Pdf => "application/pdf",
            AttachmentKind::Image => "image/*",
        }
    }
}

/// Declared content type wins; otherwise it is guessed from the location.
fn attachment(
    field: &'static str,
    attachment: Option<AttachmentRef>,
    kind: AttachmentKind,
) -> Result<Option<AttachmentRef>, IntakeError> {
    let Some(attachment) = attachment.filter(AttachmentRef::is_present) else {
        return Ok(None);
    };
    let location = attachment.location.trim().to_string();
    let declared = attachment.content_type.trim();

    let resolved = if declared.is_empty() {
        mime_guess::from_path(&location).first()
    } else {
        declared.parse::<Mime>().ok()
    };

    match resolved {
        Some(mime) if kind.accepts(&mime) => Ok(Some(AttachmentRef {
            location,
            content_type: mime.essence_str().to_string(),
        })),
        _ => Err(IntakeError::UnsupportedAttachment {
            field,
            content_type: if declared.is_empty() {
                "unknown".to_string()
            } else {
                declared.to_string()
            },
            expected: kind.expected(),
        }),
    }
}

fn dedupe(values: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !kept.iter().any(|seen| seen == value) {
            kept.push(value.to_string());
        }
    }
    kept
}

fn dedupe_certifications(values: Vec<Certification>) -> Vec<Certification> {
    let mut kept: Vec<Certification> = Vec::with_capacity(values.len());
    for cert in values {
        let name = cert.name.trim();
        if name.is_empty() || kept.iter().any(|seen| seen.name == name) {
            continue;
        }
        kept.push(Certification {
            name: name.to_string(),
            status: blank_to_none(cert.status),
        });
    }
    kept
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
