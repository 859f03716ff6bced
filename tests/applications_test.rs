mod common;

use talenthub::dto::application_dto::{ApplicationListQuery, ApplicationSort, SortOrder};
use talenthub::error::Error;
use talenthub::models::{ApplicationStatus, ResumeFile};
use uuid::Uuid;

#[test]
fn create_snapshots_job_and_starts_pending() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");

    let app = state
        .application_service
        .create(&job, common::application_form("Ann", "Lee"), Some("u-1".into()))
        .unwrap();
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.job_id, job.id);
    assert_eq!(app.job_title, "QA Engineer");
    assert_eq!(app.company, job.company);
    assert_eq!(app.applicant_name, "Ann Lee");
    assert_eq!(app.user_id.as_deref(), Some("u-1"));
    assert_eq!(state.application_service.count_for_job(job.id), 1);
}

#[test]
fn snapshot_is_not_refreshed_when_job_changes() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let app = state
        .application_service
        .create(&job, common::application_form("Ann", "Lee"), None)
        .unwrap();

    let rename = talenthub::dto::job_dto::UpdateJobPayload {
        title: Some("Senior QA Engineer".into()),
        ..Default::default()
    };
    state.job_service.update(job.id, rename).unwrap();

    let stored = state.application_service.get_by_id(app.id).unwrap();
    assert_eq!(stored.job_title, "QA Engineer");
}

#[test]
fn empty_portfolio_url_is_dropped() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let mut form = common::application_form("Ann", "Lee");
    form.portfolio_url = Some(String::new());

    let app = state.application_service.create(&job, form, None).unwrap();
    assert!(app.portfolio_url.is_none());
}

#[test]
fn form_errors_are_reported_per_field() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let mut form = common::application_form("Ann", "Lee");
    form.resume_file = None;
    form.cover_letter = "Hire me.".into();
    form.portfolio_url = Some("not a url".into());
    form.email = "ann-at-example".into();
    form.phone = "call me".into();

    let err = state.application_service.create(&job, form, None).unwrap_err();
    let Error::Validation(errors) = err else {
        panic!("expected validation errors");
    };
    let fields = errors.field_errors();
    for field in ["resume_file", "cover_letter", "portfolio_url", "email", "phone"] {
        assert!(fields.contains_key(field), "missing error for {field}");
    }
    assert!(state.application_service.list().is_empty());
}

#[test]
fn oversized_or_wrong_type_resume_is_rejected() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");

    let mut too_big = common::application_form("Ann", "Lee");
    too_big.resume_file = Some(ResumeFile::new(
        "cv.pdf",
        "application/pdf",
        vec![0u8; 5 * 1024 * 1024 + 1],
    ));
    assert!(state.application_service.create(&job, too_big, None).is_err());

    let mut image = common::application_form("Ann", "Lee");
    image.resume_file = Some(ResumeFile::new("cv.png", "image/png", vec![1, 2, 3]));
    assert!(state.application_service.create(&job, image, None).is_err());
}

#[test]
fn status_update_touches_one_record() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let ann = state
        .application_service
        .create(&job, common::application_form("Ann", "Lee"), None)
        .unwrap();
    let bob = state
        .application_service
        .create(&job, common::application_form("Bob", "Ray"), None)
        .unwrap();

    let updated = state
        .application_service
        .update_status(ann.id, ApplicationStatus::Accepted)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Accepted);

    let stored_bob = state.application_service.get_by_id(bob.id).unwrap();
    assert_eq!(stored_bob, bob);
}

#[test]
fn status_update_of_unknown_id_is_a_no_op() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let app = state
        .application_service
        .create(&job, common::application_form("Ann", "Lee"), None)
        .unwrap();

    let result = state
        .application_service
        .update_status(Uuid::new_v4(), ApplicationStatus::Rejected)
        .unwrap();
    assert!(result.is_none());
    assert_eq!(state.application_service.list(), vec![app]);
}

#[test]
fn delete_removes_only_the_target() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let ann = state
        .application_service
        .create(&job, common::application_form("Ann", "Lee"), None)
        .unwrap();
    let bob = state
        .application_service
        .create(&job, common::application_form("Bob", "Ray"), None)
        .unwrap();

    assert!(state.application_service.delete(ann.id).unwrap());
    assert!(!state.application_service.delete(ann.id).unwrap());
    assert_eq!(state.application_service.list(), vec![bob]);
}

#[test]
fn listing_filters_and_sorts() {
    let state = common::state();
    let qa = common::post_job(&state, "QA Engineer");
    let dev = common::post_job(&state, "Backend Engineer");

    let svc = &state.application_service;
    let zed = svc.create(&qa, common::application_form("Zed", "Ng"), None).unwrap();
    let amy = svc.create(&qa, common::application_form("Amy", "Fox"), None).unwrap();
    let kim = svc.create(&dev, common::application_form("Kim", "Ito"), None).unwrap();
    svc.update_status(amy.id, ApplicationStatus::Reviewed).unwrap();

    let by_name = ApplicationListQuery {
        sort_by: ApplicationSort::ApplicantName,
        order: SortOrder::Asc,
        ..Default::default()
    };
    let names: Vec<String> = svc
        .list_filtered(&by_name)
        .into_iter()
        .map(|a| a.applicant_name)
        .collect();
    assert_eq!(names, vec!["Amy Fox", "Kim Ito", "Zed Ng"]);

    let qa_pending = ApplicationListQuery {
        status: Some(ApplicationStatus::Pending),
        job_id: Some(qa.id),
        ..Default::default()
    };
    let ids: Vec<Uuid> = svc.list_filtered(&qa_pending).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![zed.id]);

    let dev_only = ApplicationListQuery {
        job_id: Some(dev.id),
        ..Default::default()
    };
    let ids: Vec<Uuid> = svc.list_filtered(&dev_only).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![kim.id]);
}

#[test]
fn sort_keys_parse_from_cli_words() {
    assert_eq!("date".parse::<ApplicationSort>(), Ok(ApplicationSort::SubmittedAt));
    assert_eq!("name".parse::<ApplicationSort>(), Ok(ApplicationSort::ApplicantName));
    assert_eq!("Status".parse::<ApplicationSort>(), Ok(ApplicationSort::Status));
    assert!("salary".parse::<ApplicationSort>().is_err());
    assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
}

#[test]
fn export_name_reflects_filters() {
    let job_id = Uuid::new_v4();
    let query = ApplicationListQuery {
        status: Some(ApplicationStatus::Accepted),
        job_id: Some(job_id),
        ..Default::default()
    };
    assert_eq!(
        query.export_name(),
        format!("job_applications_status_accepted_job_{}", job_id)
    );
    assert_eq!(
        ApplicationListQuery::default().export_name(),
        "job_applications_filtered"
    );
}

#[test]
fn default_listing_is_newest_first_and_status_sorts_by_label() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let svc = &state.application_service;

    let base = talenthub::utils::time::now();
    let mut apps = Vec::new();
    for (minutes, name, status) in [
        (0, "Ann", ApplicationStatus::Rejected),
        (5, "Bob", ApplicationStatus::Pending),
        (10, "Cy", ApplicationStatus::Accepted),
    ] {
        let mut app = svc
            .create(&job, common::application_form(name, "Lee"), None)
            .unwrap();
        app.submitted_at = base + chrono::Duration::minutes(minutes);
        app.status = status;
        apps.push(app);
    }
    let names = |list: Vec<talenthub::models::Application>| -> Vec<String> {
        list.into_iter().map(|a| a.applicant_name).collect()
    };

    let newest_first = ApplicationListQuery::default().apply(apps.clone());
    assert_eq!(names(newest_first), vec!["Cy Lee", "Bob Lee", "Ann Lee"]);

    let oldest_first = ApplicationListQuery {
        order: SortOrder::Asc,
        ..Default::default()
    };
    assert_eq!(names(oldest_first.apply(apps.clone())), vec!["Ann Lee", "Bob Lee", "Cy Lee"]);

    let by_status = ApplicationListQuery {
        sort_by: ApplicationSort::Status,
        order: SortOrder::Asc,
        ..Default::default()
    };
    let labels: Vec<&str> = by_status
        .apply(apps.clone())
        .iter()
        .map(|a| a.status.as_str())
        .collect();
    assert_eq!(labels, vec!["accepted", "pending", "rejected"]);

    let by_status_desc = ApplicationListQuery {
        sort_by: ApplicationSort::Status,
        order: SortOrder::Desc,
        ..Default::default()
    };
    assert_eq!(names(by_status_desc.apply(apps)), vec!["Ann Lee", "Bob Lee", "Cy Lee"]);
}

#[test]
fn descending_order_keeps_ties_in_stored_order() {
    let state = common::state();
    let job = common::post_job(&state, "QA Engineer");
    let svc = &state.application_service;
    let first = svc.create(&job, common::application_form("Ann", "Lee"), None).unwrap();
    let second = svc.create(&job, common::application_form("Bob", "Ray"), None).unwrap();

    let by_status_desc = ApplicationListQuery {
        sort_by: ApplicationSort::Status,
        order: SortOrder::Desc,
        ..Default::default()
    };
    let ids: Vec<Uuid> = svc.list_filtered(&by_status_desc).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}
