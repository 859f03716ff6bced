use std::path::PathBuf;

use clap::{Args, Subcommand};
use uuid::Uuid;

use super::print_json;
use crate::config::Config;
use crate::dto::application_dto::{ApplicationForm, ApplicationListQuery, ApplicationSort, SortOrder};
use crate::error::{Error, Result};
use crate::models::application::ApplicationStatus;
use crate::models::job::JobStatus;
use crate::services::resume_service::ResumeService;
use crate::AppState;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    pub job_id: Uuid,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub experience: String,
    #[arg(long)]
    pub cover_letter: String,
    /// PDF or Word document, at most 5MB
    #[arg(long)]
    pub resume: Option<PathBuf>,
    #[arg(long)]
    pub portfolio_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ApplicationsCommand {
    List {
        #[arg(long)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        job: Option<Uuid>,
        /// date, name or status
        #[arg(long, default_value = "date")]
        sort: ApplicationSort,
        #[arg(long, default_value = "desc")]
        order: SortOrder,
    },
    SetStatus {
        id: Uuid,
        status: ApplicationStatus,
    },
    Delete {
        id: Uuid,
    },
    /// Save the applicant's resume, or a generated text summary when none was uploaded
    Resume {
        id: Uuid,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn apply(state: &AppState, args: ApplyArgs) -> Result<()> {
    let job = state
        .job_service
        .get_by_id(args.job_id)
        .ok_or_else(|| Error::NotFound(format!("Job {}", args.job_id)))?;
    if job.status != JobStatus::Active {
        return Err(Error::InvalidInput(
            "This job is no longer accepting applications".to_string(),
        ));
    }

    let resume_file = args
        .resume
        .as_deref()
        .map(ResumeService::load_upload)
        .transpose()?;

    let form = ApplicationForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        experience: args.experience,
        cover_letter: args.cover_letter,
        resume_file,
        portfolio_url: args.portfolio_url,
    };
    let user_id = state.auth_service.current_user().map(|u| u.id);
    let application = state.application_service.create(&job, form, user_id)?;
    print_json(&application)
}

pub fn run(state: &AppState, config: &Config, cmd: ApplicationsCommand) -> Result<()> {
    state.auth_service.require_admin()?;
    let service = &state.application_service;

    match cmd {
        ApplicationsCommand::List {
            status,
            job,
            sort,
            order,
        } => {
            let query = ApplicationListQuery {
                status,
                job_id: job,
                sort_by: sort,
                order,
            };
            print_json(&service.list_filtered(&query))
        }
        ApplicationsCommand::SetStatus { id, status } => {
            print_json(&service.update_status(id, status)?)
        }
        ApplicationsCommand::Delete { id } => print_json(&service.delete(id)?),
        ApplicationsCommand::Resume { id, out } => {
            let application = service
                .get_by_id(id)
                .ok_or_else(|| Error::NotFound(format!("Application {}", id)))?;
            let dir = out.unwrap_or_else(|| config.export_dir.clone());
            let path = ResumeService::save(&application, &dir)?;
            print_json(&path)
        }
    }
}
