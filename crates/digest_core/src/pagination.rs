//! crates/digest_core/src/pagination.rs
//!
//! Incremental loading of the summary listing.
//!
//! `SummaryListState` is a pure state machine: callers ask it for the next
//! `PageRequest`, perform the fetch themselves, and hand the outcome back to
//! `finish`. `SummaryFeed` wires that machine to a `SummaryStore`.

use crate::domain::SummaryListing;
use crate::ports::{PortResult, SummaryStore};
use tracing::{debug, error};

/// Number of summaries fetched on first load.
pub const INITIAL_PAGE_SIZE: usize = 3;

/// The message readers see for any listing failure. The cause is only logged.
pub const LIST_ERROR_MESSAGE: &str = "Failed to fetch summaries";

/// Why a page is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Replaces the list (first load or refetch).
    Replace,
    /// Appends to the list.
    Append,
}

/// A single range query against the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
    pub kind: PageKind,
}

#[derive(Debug, Clone)]
pub struct SummaryListState {
    summaries: Vec<SummaryListing>,
    initial_size: usize,
    next_page_size: usize,
    is_loading: bool,
    is_loading_more: bool,
    has_more: bool,
    error: Option<String>,
}

impl Default for SummaryListState {
    fn default() -> Self {
        Self::new(INITIAL_PAGE_SIZE)
    }
}

impl SummaryListState {
    /// A fresh listing. It reports `is_loading` until the first page resolves.
    pub fn new(initial_size: usize) -> Self {
        let initial_size = initial_size.max(1);
        Self {
            summaries: Vec::new(),
            initial_size,
            next_page_size: initial_size,
            is_loading: true,
            is_loading_more: false,
            has_more: true,
            error: None,
        }
    }

    pub fn summaries(&self) -> &[SummaryListing] {
        &self.summaries
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Page size the next `begin_load_more` will request.
    pub fn next_page_size(&self) -> usize {
        self.next_page_size
    }

    pub fn begin_initial(&mut self) -> PageRequest {
        self.is_loading = true;
        self.error = None;
        PageRequest {
            offset: 0,
            limit: self.initial_size,
            kind: PageKind::Replace,
        }
    }

    /// Starts a refetch from the top. The doubling sequence starts over too.
    pub fn begin_refetch(&mut self) -> PageRequest {
        self.next_page_size = self.initial_size;
        self.begin_initial()
    }

    /// Returns `None` when the listing is exhausted or a fetch is in flight.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if !self.has_more || self.is_loading || self.is_loading_more {
            return None;
        }
        let request = PageRequest {
            offset: self.summaries.len(),
            limit: self.next_page_size,
            kind: PageKind::Append,
        };
        self.is_loading_more = true;
        self.error = None;
        self.next_page_size = self.next_page_size.saturating_mul(2);
        Some(request)
    }

    pub fn finish(&mut self, request: PageRequest, result: PortResult<Vec<SummaryListing>>) {
        match result {
            Ok(page) => {
                self.has_more = page.len() == request.limit;
                match request.kind {
                    PageKind::Replace => self.summaries = page,
                    PageKind::Append => self.summaries.extend(page),
                }
            }
            Err(_) => {
                self.error = Some(LIST_ERROR_MESSAGE.to_string());
            }
        }
        self.is_loading = false;
        self.is_loading_more = false;
    }
}

//=========================================================================================
// SummaryFeed
//=========================================================================================

/// Drives a `SummaryListState` against a store.
pub struct SummaryFeed<S> {
    store: S,
    state: SummaryListState,
}

impl<S: SummaryStore> SummaryFeed<S> {
    pub fn new(store: S, initial_size: usize) -> Self {
        Self {
            store,
            state: SummaryListState::new(initial_size),
        }
    }

    pub fn state(&self) -> &SummaryListState {
        &self.state
    }

    pub async fn load_initial(&mut self) {
        let request = self.state.begin_initial();
        self.run(request).await;
    }

    /// Appends the next page. Returns false when nothing was requested.
    pub async fn load_more(&mut self) -> bool {
        match self.state.begin_load_more() {
            Some(request) => {
                self.run(request).await;
                true
            }
            None => false,
        }
    }

    pub async fn refetch(&mut self) {
        let request = self.state.begin_refetch();
        self.run(request).await;
    }

    async fn run(&mut self, request: PageRequest) {
        debug!(offset = request.offset, limit = request.limit, "Fetching summaries");
        let result = self.store.list_summaries(request.offset, request.limit).await;
        if let Err(e) = &result {
            error!("Error fetching summaries: {:?}", e);
        }
        self.state.finish(request, result);
    }
}
