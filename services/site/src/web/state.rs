//! services/site/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use digest_core::ports::{MarkdownRenderer, SummaryStore};
use digest_core::SummaryFeed;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SummaryStore>,
    pub markdown: Arc<dyn MarkdownRenderer>,
    pub config: Arc<Config>,
}

impl AppState {
    /// A listing feed for one request, starting from the configured page size.
    pub fn feed(&self) -> SummaryFeed<Arc<dyn SummaryStore>> {
        SummaryFeed::new(self.store.clone(), self.config.initial_page_size)
    }
}
