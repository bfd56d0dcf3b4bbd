//! User directory RecordService trait implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, ServiceError};
use crate::http_client::{HttpUtils, is_success};
use crate::services::common::extract_id;
use crate::traits::RecordService;
use crate::types::UserRecord;

use super::{LIST_PAGE_SIZE, SERVICE_NAME, UserDirectoryService, UserEnvelope, UserListEnvelope};

#[async_trait]
impl RecordService for UserDirectoryService {
    type Record = UserRecord;

    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    async fn list_records(&self) -> Result<Vec<UserRecord>> {
        let (status, body) = self.get(&format!("/users?per_page={LIST_PAGE_SIZE}")).await?;
        if !is_success(status) {
            return Err(ServiceError::UnexpectedStatus {
                service: SERVICE_NAME.to_string(),
                status,
                raw_message: Some(body),
            });
        }
        let envelope: UserListEnvelope = HttpUtils::parse_json(&body, SERVICE_NAME)?;
        Ok(envelope.data)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<UserRecord> {
        let (status, body) = self.get(&format!("/users/{id}")).await?;
        if !is_success(status) {
            return Err(ServiceError::RecordNotFound {
                service: SERVICE_NAME.to_string(),
                record_id: id.to_string(),
                status,
            });
        }
        let envelope: UserEnvelope = HttpUtils::parse_json(&body, SERVICE_NAME)?;
        Ok(envelope.data)
    }

    async fn create_record(&self, record: &UserRecord) -> Result<Option<String>> {
        let (status, body) = self.post("/users", record).await?;
        if !is_success(status) {
            return Err(ServiceError::CreateRejected {
                service: SERVICE_NAME.to_string(),
                status,
                raw_message: Some(body),
            });
        }
        // The echo carries the id as a string; render whatever arrives.
        let value: Value = HttpUtils::parse_json(&body, SERVICE_NAME)?;
        Ok(extract_id(&value))
    }
}
