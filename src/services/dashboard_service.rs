use std::collections::HashMap;

use crate::dto::dashboard_dto::{DashboardStats, JobWithApplications};
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::{Job, JobStatus};
use crate::storage::{Store, APPLICATIONS_KEY, JOBS_KEY};
use uuid::Uuid;

#[derive(Clone)]
pub struct DashboardService {
    store: Store,
}

impl DashboardService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn stats(&self) -> DashboardStats {
        let jobs: Vec<Job> = self.store.read(JOBS_KEY);
        let applications: Vec<Application> = self.store.read(APPLICATIONS_KEY);
        compute_stats(&jobs, &applications)
    }

    pub fn jobs_with_counts(&self) -> Vec<JobWithApplications> {
        let jobs: Vec<Job> = self.store.read(JOBS_KEY);
        let applications: Vec<Application> = self.store.read(APPLICATIONS_KEY);

        let mut counts: HashMap<Uuid, usize> = HashMap::new();
        for app in &applications {
            *counts.entry(app.job_id).or_default() += 1;
        }

        jobs.into_iter()
            .map(|job| JobWithApplications {
                application_count: counts.get(&job.id).copied().unwrap_or(0),
                job,
            })
            .collect()
    }
}

pub fn compute_stats(jobs: &[Job], applications: &[Application]) -> DashboardStats {
    let by_status =
        |status: ApplicationStatus| applications.iter().filter(|a| a.status == status).count();

    DashboardStats {
        total_applications: applications.len(),
        total_jobs: jobs.len(),
        active_jobs: jobs.iter().filter(|j| j.status == JobStatus::Active).count(),
        pending: by_status(ApplicationStatus::Pending),
        reviewed: by_status(ApplicationStatus::Reviewed),
        accepted: by_status(ApplicationStatus::Accepted),
        rejected: by_status(ApplicationStatus::Rejected),
    }
}
