//! Lazy bearer-token acquisition.
//!
//! The protected audit service authenticates with a bearer token issued by a
//! separate token endpoint. The token is fetched on first need with a fixed
//! identity, cached for the life of the process, and never refreshed or
//! invalidated. Acquisition failure is logged and degrades to `None`; callers
//! proceed without a credential and let the remote service reject them.

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::http_client::{HttpUtils, is_success};
use crate::services::common::create_http_client;

/// Token issuance endpoint.
const TOKEN_ENDPOINT: &str = "https://apitest.soliss.org/tokenservice/token";
/// Fixed identity presented to the token endpoint.
const IDENTITY_USER: &str = "030119";
const IDENTITY_PASSWORD: &str = "Con_030119";

const SERVICE_NAME: &str = "token";

/// Body of a successful token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Obtains and caches a bearer token.
pub struct TokenProvider {
    client: Client,
    endpoint: String,
    cached: RwLock<Option<String>>,
}

impl Default for TokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
            endpoint: TOKEN_ENDPOINT.to_string(),
            cached: RwLock::new(None),
        }
    }

    /// Create a provider preloaded with a token. No network call will ever
    /// be issued.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            endpoint: TOKEN_ENDPOINT.to_string(),
            cached: RwLock::new(Some(token.into())),
        }
    }

    /// Provider aimed at an alternate token endpoint.
    #[cfg(test)]
    pub(crate) fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            endpoint: endpoint.into(),
            cached: RwLock::new(None),
        }
    }

    /// Return the cached token, fetching it first if none is cached yet.
    ///
    /// Never fails: a failed acquisition is logged and reported as `None`.
    /// A later call will try again, since nothing was cached.
    pub async fn ensure_token(&self) -> Option<String> {
        if let Some(token) = self.cached.read().await.clone() {
            return Some(token);
        }

        let token = self.fetch_token().await?;
        *self.cached.write().await = Some(token.clone());
        Some(token)
    }

    /// Issue one authentication call. One attempt, no retry.
    async fn fetch_token(&self) -> Option<String> {
        let builder = self
            .client
            .get(&self.endpoint)
            .header("usuario", IDENTITY_USER)
            .header("password", IDENTITY_PASSWORD);

        let (status, body) =
            match HttpUtils::execute_request(builder, SERVICE_NAME, "GET", &self.endpoint).await {
                Ok(resp) => resp,
                Err(e) => {
                    log::error!("[{SERVICE_NAME}] Token acquisition failed: {e}");
                    return None;
                }
            };

        if !is_success(status) {
            log::warn!("[{SERVICE_NAME}] Token endpoint answered HTTP {status}");
            return None;
        }

        match HttpUtils::parse_json::<TokenResponse>(&body, SERVICE_NAME) {
            Ok(resp) => Some(resp.token),
            Err(e) => {
                log::error!("[{SERVICE_NAME}] Token acquisition failed: {e}");
                None
            }
        }
    }
}
