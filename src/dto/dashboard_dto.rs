use serde::{Deserialize, Serialize};

use crate::models::job::Job;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_applications: usize,
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub pending: usize,
    pub reviewed: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// A job posting alongside how many applications reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobWithApplications {
    #[serde(flatten)]
    pub job: Job,
    pub application_count: usize,
}
