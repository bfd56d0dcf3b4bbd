//! Product catalog service (fakestoreapi.com)

mod http;
mod service;

use reqwest::Client;

use crate::services::common::create_http_client;

pub(crate) const FAKESTORE_API_BASE: &str = "https://fakestoreapi.com";

pub(crate) const SERVICE_NAME: &str = "products";

/// Product catalog client. The catalog is public; no auth of any kind.
pub struct ProductCatalogService {
    pub(crate) client: Client,
}

impl ProductCatalogService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
        }
    }
}

impl Default for ProductCatalogService {
    fn default() -> Self {
        Self::new()
    }
}
