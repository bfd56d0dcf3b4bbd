//! Test helpers.
//!
//! An in-memory stand-in for the user directory, with switches for the
//! failure modes the controller has to absorb.

use std::sync::Arc;

use async_trait::async_trait;
use record_console_services::{RecordService, Result, ServiceError, UserRecord};
use tokio::sync::RwLock;

const MOCK_SERVICE_NAME: &str = "mock-users";

#[derive(Default)]
struct MockState {
    records: RwLock<Vec<UserRecord>>,
    next_id: RwLock<u64>,
    offline: RwLock<bool>,
    fail_listing: RwLock<bool>,
    reject_creates: RwLock<bool>,
    suppress_created_ids: RwLock<bool>,
}

/// In-memory [`RecordService`] over [`UserRecord`]s.
///
/// [`handle`](Self::handle) returns a second front to the same state, so a
/// test can keep flipping switches after the service has moved into a
/// controller.
pub struct MockUserService {
    inner: Arc<MockState>,
}

impl MockUserService {
    /// A service seeded with twelve users, ids 1 through 12. The next
    /// created record receives id 13.
    pub fn seeded() -> Self {
        let records = (1..=12)
            .map(|i| UserRecord {
                id: Some(i),
                email: format!("user{i}@example.com"),
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
                avatar: format!("https://example.com/avatar/{i}.jpg"),
            })
            .collect();
        let state = MockState {
            records: RwLock::new(records),
            next_id: RwLock::new(13),
            ..MockState::default()
        };
        Self {
            inner: Arc::new(state),
        }
    }

    /// Another front onto the same shared state.
    pub fn handle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Every subsequent call fails at the transport level.
    pub async fn go_offline(&self) {
        *self.inner.offline.write().await = true;
    }

    /// Listing calls answer with a server error.
    pub async fn fail_listing(&self) {
        *self.inner.fail_listing.write().await = true;
    }

    /// Create calls are rejected.
    pub async fn reject_creates(&self) {
        *self.inner.reject_creates.write().await = true;
    }

    /// Creates succeed but the response body carries no identifier.
    pub async fn suppress_created_ids(&self) {
        *self.inner.suppress_created_ids.write().await = true;
    }

    async fn check_online(&self) -> Result<()> {
        if *self.inner.offline.read().await {
            return Err(ServiceError::NetworkError {
                service: MOCK_SERVICE_NAME.to_string(),
                detail: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordService for MockUserService {
    type Record = UserRecord;

    fn service_name(&self) -> &'static str {
        MOCK_SERVICE_NAME
    }

    async fn list_records(&self) -> Result<Vec<UserRecord>> {
        self.check_online().await?;
        if *self.inner.fail_listing.read().await {
            return Err(ServiceError::UnexpectedStatus {
                service: MOCK_SERVICE_NAME.to_string(),
                status: 500,
                raw_message: None,
            });
        }
        Ok(self.inner.records.read().await.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<UserRecord> {
        self.check_online().await?;
        self.inner
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id.map(|v| v.to_string()).as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| ServiceError::RecordNotFound {
                service: MOCK_SERVICE_NAME.to_string(),
                record_id: id.to_string(),
                status: 404,
            })
    }

    async fn create_record(&self, record: &UserRecord) -> Result<Option<String>> {
        self.check_online().await?;
        if *self.inner.reject_creates.read().await {
            return Err(ServiceError::CreateRejected {
                service: MOCK_SERVICE_NAME.to_string(),
                status: 400,
                raw_message: None,
            });
        }

        let mut next_id = self.inner.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let mut created = record.clone();
        created.id = Some(id);
        self.inner.records.write().await.push(created);

        if *self.inner.suppress_created_ids.read().await {
            Ok(None)
        } else {
            Ok(Some(id.to_string()))
        }
    }
}
