use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::application::{Application, ApplicationStatus, ResumeFile};
use crate::utils::validation::{email_shape, not_blank, phone_shape, url_shape, valid_resume_file};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(custom(function = "email_shape"))]
    pub email: String,
    #[validate(custom(function = "phone_shape"))]
    pub phone: String,
    #[validate(custom(function = "not_blank"))]
    pub experience: String,
    #[validate(
        custom(function = "not_blank"),
        length(min = 100, message = "Cover letter should be at least 100 characters")
    )]
    pub cover_letter: String,
    #[validate(custom(function = "valid_resume_file"))]
    #[serde(default)]
    pub resume_file: Option<ResumeFile>,
    #[validate(custom(function = "url_shape"))]
    #[serde(default)]
    pub portfolio_url: Option<String>,
}

impl ApplicationForm {
    /// Field rules plus the mandatory resume.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.resume_file.is_none() {
            let mut err = ValidationError::new("required");
            err.message = Some(Cow::Borrowed("Resume is required"));
            errors.add("resume_file", err);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn applicant_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationSort {
    #[default]
    SubmittedAt,
    ApplicantName,
    Status,
}

impl FromStr for ApplicationSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "submitted_at" | "date" => Ok(ApplicationSort::SubmittedAt),
            "applicant_name" | "name" => Ok(ApplicationSort::ApplicantName),
            "status" => Ok(ApplicationSort::Status),
            other => Err(format!(
                "unknown sort key '{}', expected date, name or status",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}', expected asc or desc", other)),
        }
    }
}

/// Admin listing filters. Status and job filters combine with AND.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplicationListQuery {
    pub status: Option<ApplicationStatus>,
    pub job_id: Option<Uuid>,
    pub sort_by: ApplicationSort,
    pub order: SortOrder,
}

impl ApplicationListQuery {
    pub fn matches(&self, application: &Application) -> bool {
        self.status.map_or(true, |s| application.status == s)
            && self.job_id.map_or(true, |id| application.job_id == id)
    }

    pub fn apply(&self, applications: Vec<Application>) -> Vec<Application> {
        let mut items: Vec<Application> = applications
            .into_iter()
            .filter(|a| self.matches(a))
            .collect();

        items.sort_by(|a, b| {
            let ord = compare(self.sort_by, a, b);
            match self.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        items
    }

    /// Base file name for an export of this filtered view.
    pub fn export_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(status) = self.status {
            parts.push(format!("status_{}", status));
        }
        if let Some(job_id) = self.job_id {
            parts.push(format!("job_{}", job_id));
        }
        if parts.is_empty() {
            "job_applications_filtered".to_string()
        } else {
            format!("job_applications_{}", parts.join("_"))
        }
    }
}

fn compare(key: ApplicationSort, a: &Application, b: &Application) -> Ordering {
    match key {
        ApplicationSort::SubmittedAt => a.submitted_at.cmp(&b.submitted_at),
        ApplicationSort::ApplicantName => a.applicant_name.cmp(&b.applicant_name),
        ApplicationSort::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}
