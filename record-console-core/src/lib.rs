//! Record Console Core Library
//!
//! The view-controller layer of the record console. One
//! [`RecordManager`] instance backs one record view: it owns the table
//! collection, the active form record, the lookup/create mode, and the
//! status line, and drives a [`RecordService`](record_console_services::RecordService)
//! from the services crate for all network traffic.
//!
//! The controller is generic over the service, so the same state machine
//! serves users, products, and audit entries alike; the frontends only
//! render its queries and call its commands.
//!
//! ```rust,no_run
//! use record_console_core::RecordManager;
//! use record_console_services::UserDirectoryService;
//!
//! # async fn example() {
//! let mut view = RecordManager::new(UserDirectoryService::new());
//! view.load_all().await;
//!
//! view.fetch_by_id("7").await;
//! if let Some(message) = view.message() {
//!     println!("{message}");
//! }
//! # }
//! ```

pub mod manager;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use manager::RecordManager;
pub use state::{Mode, StatusMessage};

// Re-export the service seam for convenience
pub use record_console_services::{RecordFields, RecordService, ServiceError};
