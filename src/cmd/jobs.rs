use chrono::NaiveDate;
use clap::Subcommand;
use uuid::Uuid;

use super::print_json;
use crate::dto::job_dto::{CreateJobPayload, JobBoardQuery, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::{JobStatus, JobType};
use crate::AppState;

#[derive(Subcommand, Debug)]
pub enum JobsCommand {
    /// Active postings, optionally filtered
    Board {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long = "type")]
        job_type: Option<JobType>,
    },
    /// Every posting with its application count (admin)
    List,
    Show {
        id: Uuid,
    },
    /// Post a new job (admin)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: String,
        #[arg(long = "type")]
        job_type: JobType,
        #[arg(long)]
        salary: String,
        #[arg(long)]
        description: String,
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        #[arg(long = "benefit")]
        benefits: Vec<String>,
        #[arg(long)]
        deadline: NaiveDate,
        #[arg(long)]
        status: Option<JobStatus>,
    },
    /// Change a posting's status (admin)
    SetStatus {
        id: Uuid,
        status: JobStatus,
    },
    /// Delete a posting and its applications (admin)
    Delete {
        id: Uuid,
    },
}

pub fn run(state: &AppState, cmd: JobsCommand) -> Result<()> {
    match cmd {
        JobsCommand::Board {
            search,
            location,
            job_type,
        } => {
            let query = JobBoardQuery {
                search,
                location,
                job_type,
            };
            print_json(&state.job_service.board(&query))
        }
        JobsCommand::List => {
            state.auth_service.require_admin()?;
            print_json(&state.dashboard_service.jobs_with_counts())
        }
        JobsCommand::Show { id } => {
            let job = state
                .job_service
                .get_by_id(id)
                .ok_or_else(|| Error::NotFound(format!("Job {}", id)))?;
            print_json(&job)
        }
        JobsCommand::Create {
            title,
            company,
            location,
            job_type,
            salary,
            description,
            requirements,
            benefits,
            deadline,
            status,
        } => {
            let admin = state.auth_service.require_admin()?;
            let payload = CreateJobPayload {
                title,
                company,
                location,
                job_type,
                salary,
                description,
                requirements,
                benefits,
                deadline,
                status,
            };
            let job = state.job_service.create(payload, &admin.full_name())?;
            print_json(&job)
        }
        JobsCommand::SetStatus { id, status } => {
            state.auth_service.require_admin()?;
            let updated = state
                .job_service
                .update(id, UpdateJobPayload::status(status))?;
            print_json(&updated)
        }
        JobsCommand::Delete { id } => {
            state.auth_service.require_admin()?;
            print_json(&state.job_service.delete(id)?)
        }
    }
}
