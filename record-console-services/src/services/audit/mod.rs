//! Audit trail service (protected, bearer-token auth)

mod http;
mod service;

use reqwest::Client;

use crate::services::common::create_http_client;
use crate::token::TokenProvider;

pub(crate) const AUDIT_API_BASE: &str = "https://apitest.soliss.org/informes/api/Auditoria";

pub(crate) const SERVICE_NAME: &str = "audit";

/// Audit trail client.
///
/// Every call asks the [`TokenProvider`] for a credential first. When none
/// can be obtained the request is still sent, without an `Authorization`
/// header; the server's rejection then surfaces through the ordinary
/// non-success paths.
pub struct AuditTrailService {
    pub(crate) client: Client,
    pub(crate) token: TokenProvider,
}

impl AuditTrailService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
            token: TokenProvider::new(),
        }
    }

    /// Build a client around an existing token provider, e.g. one preloaded
    /// with a known-good token.
    #[must_use]
    pub fn with_token_provider(token: TokenProvider) -> Self {
        Self {
            client: create_http_client(),
            token,
        }
    }
}

impl Default for AuditTrailService {
    fn default() -> Self {
        Self::new()
    }
}
