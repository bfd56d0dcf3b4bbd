//! Audit trail RecordService trait implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, ServiceError};
use crate::http_client::{HttpUtils, is_success};
use crate::services::common::extract_id;
use crate::traits::RecordService;
use crate::types::AuditRecord;

use super::{AuditTrailService, SERVICE_NAME};

#[async_trait]
impl RecordService for AuditTrailService {
    type Record = AuditRecord;

    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    async fn list_records(&self) -> Result<Vec<AuditRecord>> {
        let (status, body) = self.get("").await?;
        if !is_success(status) {
            return Err(ServiceError::UnexpectedStatus {
                service: SERVICE_NAME.to_string(),
                status,
                raw_message: Some(body),
            });
        }
        // Listing is a bare JSON array, no envelope.
        HttpUtils::parse_json(&body, SERVICE_NAME)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<AuditRecord> {
        let (status, body) = self.get(&format!("/{id}")).await?;
        if !is_success(status) {
            return Err(ServiceError::RecordNotFound {
                service: SERVICE_NAME.to_string(),
                record_id: id.to_string(),
                status,
            });
        }
        HttpUtils::parse_json(&body, SERVICE_NAME)
    }

    async fn create_record(&self, record: &AuditRecord) -> Result<Option<String>> {
        let (status, body) = self.post("", record).await?;
        if !is_success(status) {
            return Err(ServiceError::CreateRejected {
                service: SERVICE_NAME.to_string(),
                status,
                raw_message: Some(body),
            });
        }
        let value: Value = HttpUtils::parse_json(&body, SERVICE_NAME)?;
        Ok(extract_id(&value))
    }
}
