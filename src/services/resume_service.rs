use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::application::{Application, ResumeFile};
use crate::utils::{files, time};

/// A resume ready to be saved: either the uploaded original or a generated text summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDownload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct ResumeService;

impl ResumeService {
    pub fn load_upload(path: &Path) -> Result<ResumeFile> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read resume {}", path.display()))?;
        if data.is_empty() {
            return Err(anyhow::anyhow!("Resume file {} is empty", path.display()).into());
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();
        Ok(ResumeFile::new(name, files::content_type_for(path), data))
    }

    pub fn prepare(application: &Application) -> ResumeDownload {
        match &application.resume_file {
            Some(file) => ResumeDownload {
                file_name: files::resume_file_name(
                    &application.applicant_name,
                    file.extension().unwrap_or("pdf"),
                ),
                content_type: file.content_type.clone(),
                bytes: file.data.clone(),
            },
            None => ResumeDownload {
                file_name: files::resume_file_name(&application.applicant_name, "txt"),
                content_type: "text/plain".to_string(),
                bytes: Self::generate_text(application, time::now()).into_bytes(),
            },
        }
    }

    pub fn generate_text(application: &Application, generated_at: DateTime<Utc>) -> String {
        format!(
            "RESUME - {name_upper}\n\
             \n\
             CONTACT INFORMATION\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Experience: {experience} years\n\
             \n\
             COVER LETTER\n\
             {cover_letter}\n\
             \n\
             APPLICATION DETAILS\n\
             Application submitted via TalentHub Job Portal\n\
             Generated on: {generated}\n\
             \n\
             ---\n\
             This resume was generated from the job application system.\n\
             For the original uploaded resume file, please contact the applicant directly.",
            name_upper = application.applicant_name.to_uppercase(),
            name = application.applicant_name,
            email = application.email,
            phone = application.phone,
            experience = application.experience,
            cover_letter = application.cover_letter,
            generated = time::to_display(generated_at),
        )
    }

    pub fn save(application: &Application, dir: &Path) -> Result<PathBuf> {
        let download = Self::prepare(application);
        fs::create_dir_all(dir)?;
        let path = dir.join(&download.file_name);
        fs::write(&path, &download.bytes)?;
        tracing::info!(
            application_id = %application.id,
            path = %path.display(),
            size = %files::format_file_size(download.bytes.len() as u64),
            "Resume saved"
        );
        Ok(path)
    }
}
