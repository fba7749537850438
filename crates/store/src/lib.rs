//! Access to the hosted data store backing fieldcraft.
//!
//! The store is an external service; this crate only consumes it, through
//! three table-scoped operations: select-all, insert, and update behind an
//! equality filter. Handlers hold the capability as a [`StoreHandle`] so
//! tests can swap the REST client for the in-memory implementation.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub mod memory;
pub mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

/// Shared, concurrency-safe handle to a store implementation.
pub type StoreHandle = Arc<dyn Store>;

/// Errors surfaced by store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered with a non-success status.
    #[error("store rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request never completed (connectivity, TLS, timeout).
    #[error("store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a payload we could not decode.
    #[error("store returned a malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single equality predicate, the only filter shape the API needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self {
            column: column.into(),
            value: value.to_string(),
        }
    }
}

/// Table-scoped operations against the external store.
///
/// Implementations must be safe to share across concurrent requests; the
/// handle carries credentials but no per-request mutable state.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetch every row of a table.
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, StoreError>;

    /// Insert one record into a table.
    async fn insert(&self, table: &str, record: Value) -> Result<(), StoreError>;

    /// Update rows matching the filter with the given record. An unmatched
    /// filter is a no-op success, mirroring the hosted store's semantics.
    async fn update(&self, table: &str, record: Value, filter: Filter) -> Result<(), StoreError>;
}
