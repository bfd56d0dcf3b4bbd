//! User directory HTTP request methods.

use serde::Serialize;

use crate::error::{Result, ServiceError};
use crate::http_client::HttpUtils;

use super::{API_KEY, API_KEY_HEADER, REQRES_API_BASE, SERVICE_NAME, UserDirectoryService};

impl UserDirectoryService {
    /// Perform a GET request, returning status and body text.
    pub(crate) async fn get(&self, path: &str) -> Result<(u16, String)> {
        let url = format!("{REQRES_API_BASE}{path}");
        let builder = self.client.get(&url).header(API_KEY_HEADER, API_KEY);
        HttpUtils::execute_request(builder, SERVICE_NAME, "GET", &url).await
    }

    /// Perform a POST request with a JSON body, returning status and body text.
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String)> {
        let url = format!("{REQRES_API_BASE}{path}");
        let payload =
            serde_json::to_vec(body).map_err(|e| ServiceError::SerializationError {
                service: SERVICE_NAME.to_string(),
                detail: e.to_string(),
            })?;
        let builder = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, API_KEY)
            .header("Content-Type", "application/json")
            .body(payload);
        HttpUtils::execute_request(builder, SERVICE_NAME, "POST", &url).await
    }
}
