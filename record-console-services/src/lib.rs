//! # record-console-services
//!
//! REST clients for the record console: one client per external service,
//! all speaking the same [`RecordService`] contract so a single controller
//! can drive any of them.
//!
//! ## Supported Services
//!
//! | Service | Feature Flag | Auth Method |
//! |---------|-------------|-------------|
//! | User directory ([reqres.in](https://reqres.in/)) | `reqres` | Fixed API key header |
//! | Product catalog ([fakestoreapi.com](https://fakestoreapi.com/)) | `fakestore` | None |
//! | Audit trail (protected) | `audit` | Bearer token, fetched lazily |
//!
//! ## Feature Flags
//!
//! ### Service Selection
//!
//! - **`all-services`** *(default)* — Enable all services listed above.
//! - **`reqres`** — Enable only the user directory client.
//! - **`fakestore`** — Enable only the product catalog client.
//! - **`audit`** — Enable only the audit trail client.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use record_console_services::{RecordFields, RecordService, UserDirectoryService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = UserDirectoryService::new();
//!
//!     // Fetch the initial collection (fixed page size, no pagination).
//!     let users = service.list_records().await?;
//!     for user in &users {
//!         println!("{}", user.summary());
//!     }
//!
//!     // Fetch one record by id.
//!     let user = service.fetch_by_id("7").await?;
//!     println!("{} <{}>", user.summary(), user.email);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ServiceError>`](ServiceError). The enum
//! separates transport failures ([`ServiceError::NetworkError`],
//! [`ServiceError::Timeout`]) from application-level rejections carried by a
//! non-success status ([`ServiceError::RecordNotFound`],
//! [`ServiceError::CreateRejected`]). Nothing is retried: a failed call is
//! reported exactly once, and the process stays healthy after any failure.
//!
//! Bearer-token acquisition for the protected audit service never fails
//! loudly either: [`TokenProvider::ensure_token`] degrades to `None` and the
//! request proceeds without a credential.

mod error;
mod http_client;
mod services;
mod token;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{Result, ServiceError};

// Re-export core trait
pub use traits::RecordService;

// Re-export the token provider
pub use token::TokenProvider;

// Re-export record types
pub use types::{AuditRecord, ProductRecord, RecordFields, UserRecord};

// Re-export concrete services (behind feature flags)
#[cfg(feature = "reqres")]
pub use services::UserDirectoryService;

#[cfg(feature = "fakestore")]
pub use services::ProductCatalogService;

#[cfg(feature = "audit")]
pub use services::AuditTrailService;
