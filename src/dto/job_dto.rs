use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::job::{Job, JobStatus, JobType};
use crate::utils::validation::{has_non_blank_entry, not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub company: String,
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[validate(custom(function = "not_blank"))]
    pub salary: String,
    #[validate(
        custom(function = "not_blank"),
        length(min = 100, message = "Description should be at least 100 characters")
    )]
    pub description: String,
    #[validate(custom(function = "has_non_blank_entry"))]
    pub requirements: Vec<String>,
    #[validate(custom(function = "has_non_blank_entry"))]
    pub benefits: Vec<String>,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

impl CreateJobPayload {
    /// Field rules plus the deadline, which has to fall after `today`.
    pub fn check(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.deadline <= today {
            let mut err = ValidationError::new("deadline");
            err.message = Some(Cow::Borrowed("Deadline must be in the future"));
            errors.add("deadline", err);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateJobPayload {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub company: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    #[validate(custom(function = "not_blank"))]
    pub salary: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(min = 100, message = "Description should be at least 100 characters")
    )]
    pub description: Option<String>,
    #[validate(custom(function = "has_non_blank_entry"))]
    pub requirements: Option<Vec<String>>,
    #[validate(custom(function = "has_non_blank_entry"))]
    pub benefits: Option<Vec<String>>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<JobStatus>,
}

impl UpdateJobPayload {
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Same field rules as a new posting, for the fields present.
    pub fn check(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.deadline.map_or(false, |deadline| deadline <= today) {
            let mut err = ValidationError::new("deadline");
            err.message = Some(Cow::Borrowed("Deadline must be in the future"));
            errors.add("deadline", err);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn apply_to(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title.trim().to_string();
        }
        if let Some(company) = self.company {
            job.company = company.trim().to_string();
        }
        if let Some(location) = self.location {
            job.location = location.trim().to_string();
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(salary) = self.salary {
            job.salary = salary.trim().to_string();
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = clean_entries(requirements);
        }
        if let Some(benefits) = self.benefits {
            job.benefits = clean_entries(benefits);
        }
        if let Some(deadline) = self.deadline {
            job.deadline = deadline;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
    }
}

/// Filters for the public job board. Only active postings are ever shown.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobBoardQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
}

impl JobBoardQuery {
    pub fn matches(&self, job: &Job) -> bool {
        if job.status != JobStatus::Active {
            return false;
        }

        let matches_search = match non_empty(&self.search) {
            Some(term) => {
                let term = term.to_lowercase();
                job.title.to_lowercase().contains(&term)
                    || job.company.to_lowercase().contains(&term)
                    || job.description.to_lowercase().contains(&term)
            }
            None => true,
        };
        let matches_location = match non_empty(&self.location) {
            Some(loc) => job.location.to_lowercase().contains(&loc.to_lowercase()),
            None => true,
        };
        let matches_type = self.job_type.map_or(true, |t| job.job_type == t);

        matches_search && matches_location && matches_type
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn clean_entries(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
