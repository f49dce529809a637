//! Result store abstraction.
//!
//! The review side of the system only ever sees a store through this trait:
//! an ordered "list everything" operation and a "create" operation. Order of
//! the listed sequence is defined by the store, not by the filtering layer.

pub mod http;

use async_trait::async_trait;

use crate::models::{NewTestResult, TestResultRecord};

pub use http::HttpResultStore;

/// Errors surfaced by a result store.
///
/// The filter engine has no visibility into these; they are the caller's to
/// report to the operator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a usable response (connect, timeout,
    /// body decode).
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store rejected request ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Backing service for test results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Fetch the full result collection, in store order.
    async fn list_results(&self) -> Result<Vec<TestResultRecord>, StoreError>;

    /// Create a new result. Callers are expected to reload the collection
    /// afterwards so the next filter pass sees the new record.
    async fn create_result(&self, new: &NewTestResult) -> Result<TestResultRecord, StoreError>;
}
