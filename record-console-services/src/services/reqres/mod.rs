//! User directory service (reqres.in)

mod http;
mod service;
mod types;

use reqwest::Client;

use crate::services::common::create_http_client;

pub(crate) use types::{UserEnvelope, UserListEnvelope};

pub(crate) const REQRES_API_BASE: &str = "https://reqres.in/api";
/// Fixed API key sent with every call.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";
pub(crate) const API_KEY: &str = "reqres-free-v1";
/// Fixed page size for the listing call.
pub(crate) const LIST_PAGE_SIZE: u32 = 12;

pub(crate) const SERVICE_NAME: &str = "users";

/// User directory client.
pub struct UserDirectoryService {
    pub(crate) client: Client,
}

impl UserDirectoryService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
        }
    }
}

impl Default for UserDirectoryService {
    fn default() -> Self {
        Self::new()
    }
}
