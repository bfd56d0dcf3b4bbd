//! REST service client implementations.

/// Shared utilities used by service implementations.
pub mod common;

#[cfg(feature = "audit")]
mod audit;
#[cfg(feature = "fakestore")]
mod fakestore;
#[cfg(feature = "reqres")]
mod reqres;

#[cfg(feature = "audit")]
pub use audit::AuditTrailService;
#[cfg(feature = "fakestore")]
pub use fakestore::ProductCatalogService;
#[cfg(feature = "reqres")]
pub use reqres::UserDirectoryService;
