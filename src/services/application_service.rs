use crate::dto::application_dto::{ApplicationForm, ApplicationListQuery};
use crate::error::Result;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::Job;
use crate::storage::{Store, APPLICATIONS_KEY};
use crate::utils::time;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApplicationService {
    store: Store,
}

impl ApplicationService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Records an application against a snapshot of `job`. Title and company
    /// are copied as they are now and never refreshed.
    pub fn create(
        &self,
        job: &Job,
        form: ApplicationForm,
        user_id: Option<String>,
    ) -> Result<Application> {
        form.check()?;

        let applicant_name = form.applicant_name();
        let application = Application {
            id: Uuid::new_v4(),
            job_id: job.id,
            job_title: job.title.clone(),
            company: job.company.clone(),
            applicant_name,
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            experience: form.experience.trim().to_string(),
            cover_letter: form.cover_letter,
            resume_file: form.resume_file,
            portfolio_url: form.portfolio_url.filter(|url| !url.is_empty()),
            submitted_at: time::now(),
            status: ApplicationStatus::Pending,
            user_id,
        };

        let mut applications = self.list();
        applications.push(application.clone());
        self.store.write(APPLICATIONS_KEY, &applications)?;

        tracing::info!(
            application_id = %application.id,
            job_id = %job.id,
            "Application submitted"
        );
        Ok(application)
    }

    pub fn list(&self) -> Vec<Application> {
        self.store.read(APPLICATIONS_KEY)
    }

    pub fn list_filtered(&self, query: &ApplicationListQuery) -> Vec<Application> {
        query.apply(self.list())
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<Application> {
        self.list().into_iter().find(|app| app.id == id)
    }

    pub fn count_for_job(&self, job_id: Uuid) -> usize {
        self.list().iter().filter(|app| app.job_id == job_id).count()
    }

    /// Sets the status of one application. Unknown ids are a silent no-op.
    pub fn update_status(&self, id: Uuid, status: ApplicationStatus) -> Result<Option<Application>> {
        let mut applications = self.list();
        let Some(app) = applications.iter_mut().find(|app| app.id == id) else {
            tracing::debug!(application_id = %id, "Status update skipped, application not found");
            return Ok(None);
        };
        app.status = status;
        let updated = app.clone();
        self.store.write(APPLICATIONS_KEY, &applications)?;

        tracing::info!(application_id = %id, status = %status, "Application status changed");
        Ok(Some(updated))
    }

    /// Returns whether anything was removed.
    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let applications = self.list();
        let before = applications.len();
        let kept: Vec<Application> = applications.into_iter().filter(|app| app.id != id).collect();
        if kept.len() == before {
            tracing::debug!(application_id = %id, "Delete skipped, application not found");
            return Ok(false);
        }
        self.store.write(APPLICATIONS_KEY, &kept)?;

        tracing::info!(application_id = %id, "Application deleted");
        Ok(true)
    }
}
