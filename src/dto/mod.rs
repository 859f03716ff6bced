pub mod application_dto;
pub mod auth_dto;
pub mod dashboard_dto;
pub mod job_dto;
