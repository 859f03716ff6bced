use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_date: NaiveDate,
    pub deadline: NaiveDate,
    pub status: JobStatus,
    pub posted_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-time" | "fulltime" | "full_time" => Ok(JobType::FullTime),
            "part-time" | "parttime" | "part_time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "remote" => Ok(JobType::Remote),
            other => Err(format!(
                "unknown job type '{}', expected Full-time, Part-time, Contract or Remote",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
            JobStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(JobStatus::Active),
            "closed" => Ok(JobStatus::Closed),
            "draft" => Ok(JobStatus::Draft),
            other => Err(format!(
                "unknown job status '{}', expected active, closed or draft",
                other
            )),
        }
    }
}
