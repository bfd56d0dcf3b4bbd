//! Audit trail HTTP request methods.

use reqwest::RequestBuilder;
use serde::Serialize;

use crate::error::{Result, ServiceError};
use crate::http_client::HttpUtils;

use super::{AUDIT_API_BASE, AuditTrailService, SERVICE_NAME};

impl AuditTrailService {
    /// Attach the bearer token when one can be obtained.
    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.ensure_token().await {
            Some(token) => builder.bearer_auth(token),
            None => {
                log::warn!("[{SERVICE_NAME}] Proceeding without a credential");
                builder
            }
        }
    }

    /// Perform a GET request, returning status and body text.
    pub(crate) async fn get(&self, path: &str) -> Result<(u16, String)> {
        let url = format!("{AUDIT_API_BASE}{path}");
        let builder = self.authorize(self.client.get(&url)).await;
        HttpUtils::execute_request(builder, SERVICE_NAME, "GET", &url).await
    }

    /// Perform a POST request with a JSON body, returning status and body text.
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String)> {
        let url = format!("{AUDIT_API_BASE}{path}");
        let payload =
            serde_json::to_vec(body).map_err(|e| ServiceError::SerializationError {
                service: SERVICE_NAME.to_string(),
                detail: e.to_string(),
            })?;
        let builder = self
            .authorize(self.client.post(&url))
            .await
            .header("Content-Type", "application/json")
            .body(payload);
        HttpUtils::execute_request(builder, SERVICE_NAME, "POST", &url).await
    }
}
