use async_trait::async_trait;

use crate::error::Result;
use crate::types::RecordFields;

/// A remote REST service the console can browse and write to.
///
/// One implementation per external service. The contract is deliberately
/// small: fetch everything, fetch one, create one. The same error taxonomy
/// applies everywhere, so a generic controller can react uniformly.
#[async_trait]
pub trait RecordService: Send + Sync {
    /// The record shape this service serves.
    type Record: RecordFields;

    /// Service identifier, used in logs and error messages.
    fn service_name(&self) -> &'static str;

    /// Fetch the full collection, bounded by the service's fixed page size
    /// where the remote API takes one. No pagination beyond that, no
    /// filtering, no sorting.
    async fn list_records(&self) -> Result<Vec<Self::Record>>;

    /// Fetch a single record by identifier.
    ///
    /// Any non-success status is reported as
    /// [`ServiceError::RecordNotFound`](crate::ServiceError::RecordNotFound).
    async fn fetch_by_id(&self, id: &str) -> Result<Self::Record>;

    /// Create a record from the given draft.
    ///
    /// Returns the identifier echoed by the service, or `None` when the
    /// success body carries no identifier.
    async fn create_record(&self, record: &Self::Record) -> Result<Option<String>>;
}
