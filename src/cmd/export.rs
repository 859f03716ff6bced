use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Subcommand;
use uuid::Uuid;

use super::print_json;
use crate::config::Config;
use crate::dto::application_dto::ApplicationListQuery;
use crate::error::Result;
use crate::models::application::ApplicationStatus;
use crate::services::export_service::{ExportService, ExportTable, APPLICATIONS_EXPORT, JOBS_EXPORT};
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(format!("unknown export format '{}', expected csv or xlsx", other)),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// All applications, or a filtered view when --status/--job is given
    Applications {
        #[arg(long)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        job: Option<Uuid>,
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
    },
    Jobs {
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
    },
    /// Applications and jobs in one go
    All {
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
    },
}

pub fn run(state: &AppState, config: &Config, cmd: ExportCommand) -> Result<()> {
    state.auth_service.require_admin()?;
    let dir = config.export_dir.as_path();

    let written = match cmd {
        ExportCommand::Applications {
            status,
            job,
            format,
        } => {
            let filtered = status.is_some() || job.is_some();
            let query = ApplicationListQuery {
                status,
                job_id: job,
                ..ApplicationListQuery::default()
            };
            let applications = state.application_service.list_filtered(&query);
            let base = if filtered {
                query.export_name()
            } else {
                APPLICATIONS_EXPORT.to_string()
            };
            let table = ExportService::applications_table(&applications);
            vec![write(dir, &base, &table, format)?]
        }
        ExportCommand::Jobs { format } => {
            let table = ExportService::jobs_table(&state.job_service.list());
            vec![write(dir, JOBS_EXPORT, &table, format)?]
        }
        ExportCommand::All { format } => {
            let applications = ExportService::applications_table(&state.application_service.list());
            let jobs = ExportService::jobs_table(&state.job_service.list());
            vec![
                write(dir, APPLICATIONS_EXPORT, &applications, format)?,
                write(dir, JOBS_EXPORT, &jobs, format)?,
            ]
        }
    };

    print_json(&written)
}

fn write(dir: &Path, base: &str, table: &ExportTable, format: ExportFormat) -> Result<PathBuf> {
    match format {
        ExportFormat::Csv => ExportService::write_csv(dir, base, table),
        ExportFormat::Xlsx => ExportService::write_xlsx(dir, base, table),
    }
}
