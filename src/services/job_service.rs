use crate::dto::job_dto::{clean_entries, CreateJobPayload, JobBoardQuery, UpdateJobPayload};
use crate::error::Result;
use crate::models::application::Application;
use crate::models::job::Job;
use crate::storage::{Store, APPLICATIONS_KEY, JOBS_KEY};
use crate::utils::time;
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone)]
pub struct JobService {
    store: Store,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobDeletion {
    pub jobs_removed: usize,
    pub applications_removed: usize,
}

impl JobService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateJobPayload, posted_by: &str) -> Result<Job> {
        payload.check(time::today())?;

        let job = Job {
            id: Uuid::new_v4(),
            title: payload.title.trim().to_string(),
            company: payload.company.trim().to_string(),
            location: payload.location.trim().to_string(),
            job_type: payload.job_type,
            salary: payload.salary.trim().to_string(),
            description: payload.description,
            requirements: clean_entries(payload.requirements),
            benefits: clean_entries(payload.benefits),
            posted_date: time::today(),
            deadline: payload.deadline,
            status: payload.status.unwrap_or_default(),
            posted_by: posted_by.to_string(),
        };

        let mut jobs = self.list();
        jobs.push(job.clone());
        self.store.write(JOBS_KEY, &jobs)?;

        tracing::info!(job_id = %job.id, title = %job.title, "Job posted");
        Ok(job)
    }

    pub fn list(&self) -> Vec<Job> {
        self.store.read(JOBS_KEY)
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<Job> {
        self.list().into_iter().find(|job| job.id == id)
    }

    /// Active postings matching the board filters, in stored order.
    pub fn board(&self, query: &JobBoardQuery) -> Vec<Job> {
        self.list().into_iter().filter(|job| query.matches(job)).collect()
    }

    /// Merges `payload` into the job with `id`. Unknown ids are a silent no-op.
    pub fn update(&self, id: Uuid, payload: UpdateJobPayload) -> Result<Option<Job>> {
        payload.check(time::today())?;

        let mut jobs = self.list();
        let Some(job) = jobs.iter_mut().find(|job| job.id == id) else {
            tracing::debug!(job_id = %id, "Update skipped, job not found");
            return Ok(None);
        };
        payload.apply_to(job);
        let updated = job.clone();
        self.store.write(JOBS_KEY, &jobs)?;

        tracing::info!(job_id = %id, status = %updated.status, "Job updated");
        Ok(Some(updated))
    }

    /// Removes the job, then every application that references it.
    ///
    /// The two collections are written one after the other. A failure on the
    /// second write leaves orphaned applications behind.
    pub fn delete(&self, id: Uuid) -> Result<JobDeletion> {
        let jobs = self.list();
        let before = jobs.len();
        let remaining: Vec<Job> = jobs.into_iter().filter(|job| job.id != id).collect();
        let jobs_removed = before - remaining.len();
        if jobs_removed == 0 {
            tracing::debug!(job_id = %id, "Delete skipped, job not found");
            return Ok(JobDeletion::default());
        }
        self.store.write(JOBS_KEY, &remaining)?;

        let applications: Vec<Application> = self.store.read(APPLICATIONS_KEY);
        let before = applications.len();
        let kept: Vec<Application> = applications
            .into_iter()
            .filter(|app| app.job_id != id)
            .collect();
        let applications_removed = before - kept.len();
        if applications_removed > 0 {
            self.store.write(APPLICATIONS_KEY, &kept)?;
        }

        tracing::info!(job_id = %id, jobs_removed, applications_removed, "Job deleted");
        Ok(JobDeletion {
            jobs_removed,
            applications_removed,
        })
    }
}
