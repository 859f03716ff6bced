use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::AppState;

pub mod applications;
pub mod auth;
pub mod export;
pub mod jobs;

#[derive(Parser, Debug)]
#[command(name = "talenthub", about = "job board: postings, applications and accounts")]
pub struct Cmd {
    #[command(subcommand)]
    pub command: SubCommandType,
}

#[derive(Subcommand, Debug)]
pub enum SubCommandType {
    /// Sign up, log in and out, show the current session
    #[command(subcommand)]
    Auth(auth::AuthCommand),
    /// Browse and manage job postings
    #[command(subcommand)]
    Jobs(jobs::JobsCommand),
    /// Apply to an active job posting
    Apply(applications::ApplyArgs),
    /// Review submitted applications (admin)
    #[command(subcommand)]
    Applications(applications::ApplicationsCommand),
    /// Headline numbers for the admin dashboard
    Dashboard,
    /// Write CSV or XLSX exports (admin)
    #[command(subcommand)]
    Export(export::ExportCommand),
}

pub fn run(state: &AppState, config: &Config) -> Result<()> {
    let args = Cmd::parse();
    execute(state, config, args)
}

pub fn execute(state: &AppState, config: &Config, args: Cmd) -> Result<()> {
    match args.command {
        SubCommandType::Auth(cmd) => auth::run(state, cmd),
        SubCommandType::Jobs(cmd) => jobs::run(state, cmd),
        SubCommandType::Apply(cmd) => applications::apply(state, cmd),
        SubCommandType::Applications(cmd) => applications::run(state, config, cmd),
        SubCommandType::Dashboard => {
            state.auth_service.require_admin()?;
            print_json(&state.dashboard_service.stats())
        }
        SubCommandType::Export(cmd) => export::run(state, config, cmd),
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
