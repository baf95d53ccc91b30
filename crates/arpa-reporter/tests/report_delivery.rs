mod common;

use std::sync::Arc;

use serde_json::json;

use common::{
    delivery, record_from_json, InMemoryGrantsStore, InMemoryUsers, RecordingMailer,
    RecordingObjectStore,
};

fn seeded_store() -> Arc<InMemoryGrantsStore> {
    Arc::new(InMemoryGrantsStore::with_records(vec![record_from_json(
        json!({
            "type": "ec1",
            "subcategory": "1.11",
            "content": { "Name": "Outreach" }
        }),
    )]))
}

fn job_body() -> String {
    json!({ "userId": "u1", "periodId": "22", "tenantId": "1" }).to_string()
}

#[test]
fn completed_job_uploads_and_mails_the_export_link() {
    let objects = Arc::new(RecordingObjectStore::default());
    let mailer = Arc::new(RecordingMailer::default());
    let users = Arc::new(InMemoryUsers::single("u1", "grants@example.gov"));
    let pipeline = delivery(seeded_store(), objects.clone(), mailer.clone(), users);

    let outcome = pipeline.process_message(&job_body());
    assert!(outcome.is_completed());

    let puts = objects.puts.lock().unwrap();
    assert_eq!(puts.len(), 1);
    let (key, body) = &puts[0];
    assert!(key.starts_with("1/22/State-of-Iowa-Period-22-"));
    assert!(key.ends_with(".zip"));
    assert!(!body.is_empty());

    let links = mailer.links.lock().unwrap();
    assert_eq!(links.len(), 1);
    let (recipient, url) = &links[0];
    assert_eq!(recipient, "grants@example.gov");
    assert_eq!(url, &format!("https://grants.example.gov/api/exports/{key}"));
    assert!(mailer.failures.lock().unwrap().is_empty());
}

#[test]
fn malformed_body_fails_without_side_effects() {
    let objects = Arc::new(RecordingObjectStore::default());
    let mailer = Arc::new(RecordingMailer::default());
    let users = Arc::new(InMemoryUsers::single("u1", "grants@example.gov"));
    let pipeline = delivery(seeded_store(), objects.clone(), mailer.clone(), users);

    let outcome = pipeline.process_message("{ not json");
    assert!(!outcome.is_completed());
    assert!(objects.puts.lock().unwrap().is_empty());
    assert!(mailer.links.lock().unwrap().is_empty());
    assert!(mailer.failures.lock().unwrap().is_empty());
}

#[test]
fn unknown_user_fails_before_generation() {
    let objects = Arc::new(RecordingObjectStore::default());
    let mailer = Arc::new(RecordingMailer::default());
    let users = Arc::new(InMemoryUsers::default());
    let pipeline = delivery(seeded_store(), objects.clone(), mailer.clone(), users);

    let outcome = pipeline.process_message(&job_body());
    assert!(!outcome.is_completed());
    assert!(objects.puts.lock().unwrap().is_empty());
    assert!(mailer.failures.lock().unwrap().is_empty());
}

#[test]
fn upload_failure_sends_the_failure_notice() {
    let objects = Arc::new(RecordingObjectStore {
        fail: true,
        ..Default::default()
    });
    let mailer = Arc::new(RecordingMailer::default());
    let users = Arc::new(InMemoryUsers::single("u1", "grants@example.gov"));
    let pipeline = delivery(seeded_store(), objects, mailer.clone(), users);

    let outcome = pipeline.process_message(&job_body());
    assert!(!outcome.is_completed());
    assert!(mailer.links.lock().unwrap().is_empty());

    let failures = mailer.failures.lock().unwrap();
    assert_eq!(failures.as_slice(), &[("grants@example.gov".to_string(), "treasury")]);
}

#[test]
fn link_mail_failure_still_counts_as_a_failed_job() {
    let objects = Arc::new(RecordingObjectStore::default());
    let mailer = Arc::new(RecordingMailer {
        fail_link: true,
        ..Default::default()
    });
    let users = Arc::new(InMemoryUsers::single("u1", "grants@example.gov"));
    let pipeline = delivery(seeded_store(), objects.clone(), mailer.clone(), users);

    let outcome = pipeline.process_message(&job_body());
    assert!(!outcome.is_completed());
    // the upload happened before the mail attempt
    assert_eq!(objects.puts.lock().unwrap().len(), 1);
    assert_eq!(mailer.failures.lock().unwrap().len(), 1);
}

#[test]
fn generation_failure_for_unknown_tenant_notifies_the_requester() {
    let objects = Arc::new(RecordingObjectStore::default());
    let mailer = Arc::new(RecordingMailer::default());
    let users = Arc::new(InMemoryUsers::single("u1", "grants@example.gov"));
    let pipeline = delivery(seeded_store(), objects.clone(), mailer.clone(), users);

    let body = json!({ "userId": "u1", "periodId": "22", "tenantId": "404" }).to_string();
    let outcome = pipeline.process_message(&body);
    assert!(!outcome.is_completed());
    assert!(objects.puts.lock().unwrap().is_empty());
    assert_eq!(mailer.failures.lock().unwrap().len(), 1);
}
