//! Product catalog HTTP request methods.

use serde::Serialize;

use crate::error::{Result, ServiceError};
use crate::http_client::HttpUtils;

use super::{FAKESTORE_API_BASE, ProductCatalogService, SERVICE_NAME};

impl ProductCatalogService {
    /// Perform a GET request, returning status and body text.
    pub(crate) async fn get(&self, path: &str) -> Result<(u16, String)> {
        let url = format!("{FAKESTORE_API_BASE}{path}");
        let builder = self.client.get(&url);
        HttpUtils::execute_request(builder, SERVICE_NAME, "GET", &url).await
    }

    /// Perform a POST request with a JSON body, returning status and body text.
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String)> {
        let url = format!("{FAKESTORE_API_BASE}{path}");
        let payload =
            serde_json::to_vec(body).map_err(|e| ServiceError::SerializationError {
                service: SERVICE_NAME.to_string(),
                detail: e.to_string(),
            })?;
        let builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(payload);
        HttpUtils::execute_request(builder, SERVICE_NAME, "POST", &url).await
    }
}
