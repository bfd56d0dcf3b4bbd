//! Audit trail live integration tests.
//!
//! These hit the protected soliss audit API (and its token endpoint) and
//! are ignored by default:
//! ```bash
//! cargo test -p record-console-services --test audit_trail_live -- --ignored --nocapture
//! ```

use record_console_services::{
    AuditRecord, AuditTrailService, RecordFields, RecordService, ServiceError,
};

#[tokio::test]
#[ignore]
async fn list_returns_entries_with_credential() {
    let service = AuditTrailService::new();
    let entries = service.list_records().await.expect("list_records failed");

    // The trail is append-only, so a live deployment is never empty.
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.id().is_some()));
}

#[tokio::test]
#[ignore]
async fn fetch_unknown_id_is_not_found() {
    let service = AuditTrailService::new();
    let result = service.fetch_by_id("999999999").await;

    assert!(
        matches!(
            &result,
            Err(ServiceError::RecordNotFound { record_id, .. }) if record_id == "999999999"
        ),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
#[ignore]
async fn create_accepts_a_draft() {
    let service = AuditTrailService::new();
    let mut draft = AuditRecord::default();
    draft.set_field("entity", "Poliza");
    draft.set_field("entity_id", "12345");
    draft.set_field("field_name", "estado");
    draft.set_field("old_value", "pendiente");
    draft.set_field("new_value", "activa");
    draft.set_field("modified_by", "integration-test");

    // The echoed id is optional; only the acceptance matters here.
    service.create_record(&draft).await.expect("create failed");
}
