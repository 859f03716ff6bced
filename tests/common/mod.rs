#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use talenthub::dto::application_dto::ApplicationForm;
use talenthub::dto::auth_dto::LoginPayload;
use talenthub::dto::job_dto::CreateJobPayload;
use talenthub::models::{Job, JobType, ResumeFile};
use talenthub::services::auth_service::{ADMIN_EMAIL, ADMIN_PASSWORD};
use talenthub::storage::Store;
use talenthub::utils::time;
use talenthub::AppState;

pub const COVER_LETTER: &str = "I have spent the last four years testing web and mobile products, \
     building automation suites and mentoring junior testers. I would love to bring that to your team.";

pub fn state() -> AppState {
    AppState::new(Store::in_memory())
}

pub fn future_date(days: u64) -> NaiveDate {
    time::today().checked_add_days(Days::new(days)).unwrap()
}

pub fn job_payload(title: &str) -> CreateJobPayload {
    CreateJobPayload {
        title: title.to_string(),
        company: "TechCorp Solutions".to_string(),
        location: "San Francisco, CA".to_string(),
        job_type: JobType::FullTime,
        salary: "$120,000 - $150,000".to_string(),
        description: "We are seeking a talented engineer to join our innovative team. You will own \
                      test strategy across web and mobile platforms."
            .to_string(),
        requirements: vec!["3+ years of experience".to_string()],
        benefits: vec!["Remote options".to_string()],
        deadline: future_date(30),
        status: None,
    }
}

pub fn resume() -> ResumeFile {
    ResumeFile::new("cv.pdf", "application/pdf", b"%PDF-1.4 resume".to_vec())
}

pub fn application_form(first: &str, last: &str) -> ApplicationForm {
    ApplicationForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "+1 (555) 123-4567".to_string(),
        experience: "3-5".to_string(),
        cover_letter: COVER_LETTER.to_string(),
        resume_file: Some(resume()),
        portfolio_url: None,
    }
}

pub fn login_admin(state: &AppState) {
    state
        .auth_service
        .login(LoginPayload {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        })
        .expect("admin login");
}

pub fn post_job(state: &AppState, title: &str) -> Job {
    state
        .job_service
        .create(job_payload(title), "Admin User")
        .expect("create job")
}
