//! User directory wire types.

use serde::Deserialize;

use crate::types::UserRecord;

/// Listing response: records arrive under a `data` field alongside paging
/// metadata this client does not use.
#[derive(Debug, Deserialize)]
pub struct UserListEnvelope {
    pub data: Vec<UserRecord>,
}

/// Fetch-by-id response: a single record under `data`.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub data: UserRecord,
}
