pub mod cmd;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, auth_service::AuthService,
    dashboard_service::DashboardService, job_service::JobService,
};
use crate::storage::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub auth_service: AuthService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        let auth_service = AuthService::new(store.clone());
        let job_service = JobService::new(store.clone());
        let application_service = ApplicationService::new(store.clone());
        let dashboard_service = DashboardService::new(store.clone());

        Self {
            store,
            auth_service,
            job_service,
            application_service,
            dashboard_service,
        }
    }
}
