mod common;

use std::fs;

use talenthub::models::{ApplicationStatus, JobStatus};
use talenthub::services::dashboard_service::compute_stats;
use talenthub::storage::{FileStore, KeyValueStore, Store, JOBS_KEY, USERS_KEY};
use talenthub::AppState;
use tempfile::tempdir;

#[test]
fn file_store_round_trip_and_remove() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    assert_eq!(store.get(JOBS_KEY).unwrap(), None);
    store.set(JOBS_KEY, "[]").unwrap();
    assert_eq!(store.get(JOBS_KEY).unwrap().as_deref(), Some("[]"));
    assert!(dir.path().join("job_postings.json").exists());

    store.remove(JOBS_KEY).unwrap();
    store.remove(JOBS_KEY).unwrap();
    assert_eq!(store.get(JOBS_KEY).unwrap(), None);
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    for key in ["", "../escape", "a/b", "with space"] {
        assert!(store.set(key, "x").is_err(), "accepted key {key:?}");
    }
}

#[test]
fn data_survives_reopening_the_directory() {
    let dir = tempdir().unwrap();

    let first = AppState::new(Store::new(FileStore::open(dir.path()).unwrap()));
    let job = common::post_job(&first, "QA Engineer");
    first
        .application_service
        .create(&job, common::application_form("Ann", "Lee"), None)
        .unwrap();
    common::login_admin(&first);
    drop(first);

    let second = AppState::new(Store::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(second.job_service.list(), vec![job]);
    let apps = second.application_service.list();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].resume_file, Some(common::resume()));
    assert!(second.auth_service.is_admin());
}

#[test]
fn corrupted_document_reads_as_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("job_postings.json"), "{ definitely not json").unwrap();
    fs::write(dir.path().join("job_portal_current_user.json"), "42").unwrap();

    let state = AppState::new(Store::new(FileStore::open(dir.path()).unwrap()));
    assert!(state.job_service.list().is_empty());
    assert!(state.auth_service.current_user().is_none());

    // The next write replaces the corrupt document.
    let job = common::post_job(&state, "QA Engineer");
    assert_eq!(state.job_service.list(), vec![job]);
}

#[test]
fn collections_use_camel_case_field_names() {
    let dir = tempdir().unwrap();
    let backend = FileStore::open(dir.path()).unwrap();
    let state = AppState::new(Store::new(backend.clone()));
    common::post_job(&state, "QA Engineer");
    state
        .auth_service
        .sign_up(talenthub::dto::auth_dto::SignUpPayload {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann.lee@gmail.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        })
        .unwrap();

    let jobs = backend.get(JOBS_KEY).unwrap().unwrap();
    assert!(jobs.contains("\"postedDate\""));
    assert!(jobs.contains("\"type\":\"Full-time\""));
    let users = backend.get(USERS_KEY).unwrap().unwrap();
    assert!(users.contains("\"firstName\":\"Ann\""));
    assert!(users.contains("\"role\":\"user\""));
}

#[test]
fn dashboard_counts_follow_the_data() {
    let state = common::state();
    let qa = common::post_job(&state, "QA Engineer");
    let mut draft = common::job_payload("Draft role");
    draft.status = Some(JobStatus::Draft);
    state.job_service.create(draft, "Admin User").unwrap();

    let svc = &state.application_service;
    let a = svc.create(&qa, common::application_form("Ann", "Lee"), None).unwrap();
    let b = svc.create(&qa, common::application_form("Bob", "Ray"), None).unwrap();
    svc.create(&qa, common::application_form("Cy", "Kim"), None).unwrap();
    svc.update_status(a.id, ApplicationStatus::Accepted).unwrap();
    svc.update_status(b.id, ApplicationStatus::Rejected).unwrap();

    let stats = state.dashboard_service.stats();
    assert_eq!(stats.total_jobs, 2);
    assert_eq!(stats.active_jobs, 1);
    assert_eq!(stats.total_applications, 3);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.reviewed, 0);
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats, compute_stats(&state.job_service.list(), &svc.list()));

    let counts = state.dashboard_service.jobs_with_counts();
    let qa_row = counts.iter().find(|row| row.job.id == qa.id).unwrap();
    assert_eq!(qa_row.application_count, 3);
    assert!(counts.iter().any(|row| row.application_count == 0));
}

#[test]
fn deleting_unknown_ids_leaves_unreadable_documents_untouched() {
    let dir = tempdir().unwrap();
    let jobs_path = dir.path().join("job_postings.json");
    let apps_path = dir.path().join("job_applications.json");
    fs::write(&jobs_path, "{ broken jobs").unwrap();
    fs::write(&apps_path, "{ broken applications").unwrap();

    let state = AppState::new(Store::new(FileStore::open(dir.path()).unwrap()));
    let unknown = uuid::Uuid::new_v4();

    assert!(!state.application_service.delete(unknown).unwrap());
    let outcome = state.job_service.delete(unknown).unwrap();
    assert_eq!(outcome.jobs_removed, 0);
    assert_eq!(outcome.applications_removed, 0);

    assert_eq!(fs::read_to_string(&jobs_path).unwrap(), "{ broken jobs");
    assert_eq!(fs::read_to_string(&apps_path).unwrap(), "{ broken applications");
}
