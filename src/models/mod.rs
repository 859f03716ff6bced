pub mod application;
pub mod job;
pub mod user;

pub use application::{Application, ApplicationStatus, ResumeFile};
pub use job::{Job, JobStatus, JobType};
pub use user::{Role, Session, User};
