//! crates/digest_core/src/ports.rs
//!
//! Defines the service contracts (traits) the core consumes.
//! The store and the markdown renderer live outside the core; these traits
//! are the boundary, so the core never depends on a database or a parser.

use crate::domain::{SummaryListing, WeeklySummary};
use async_trait::async_trait;
use uuid::Uuid;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Read-only access to the `weekly_summaries` store.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Returns up to `limit` listings starting at `offset`, newest week first.
    async fn list_summaries(&self, offset: usize, limit: usize) -> PortResult<Vec<SummaryListing>>;

    /// Returns the full record with the given primary key.
    async fn get_summary(&self, id: Uuid) -> PortResult<WeeklySummary>;
}

/// Converts markdown to an HTML fragment.
pub trait MarkdownRenderer: Send + Sync {
    fn to_html(&self, markdown: &str) -> String;
}

#[async_trait]
impl<T: SummaryStore + ?Sized> SummaryStore for std::sync::Arc<T> {
    async fn list_summaries(&self, offset: usize, limit: usize) -> PortResult<Vec<SummaryListing>> {
        (**self).list_summaries(offset, limit).await
    }

    async fn get_summary(&self, id: Uuid) -> PortResult<WeeklySummary> {
        (**self).get_summary(id).await
    }
}
