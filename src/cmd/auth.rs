use clap::Subcommand;

use super::print_json;
use crate::dto::auth_dto::{LoginPayload, SignUpPayload};
use crate::error::Result;
use crate::AppState;

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
}

pub fn run(state: &AppState, cmd: AuthCommand) -> Result<()> {
    let auth = &state.auth_service;
    match cmd {
        AuthCommand::Signup {
            first_name,
            last_name,
            email,
            password,
            confirm_password,
        } => {
            let user = auth.sign_up(SignUpPayload {
                first_name,
                last_name,
                email,
                password,
                confirm_password,
            })?;
            print_json(&user)
        }
        AuthCommand::Login { email, password } => {
            let user = auth.login(LoginPayload { email, password })?;
            print_json(&user)
        }
        AuthCommand::Logout => auth.logout(),
        AuthCommand::Whoami => print_json(&auth.current_user()),
    }
}
