pub mod disclosure;
pub mod domain;
pub mod format;
pub mod memory;
pub mod overview;
pub mod page;
pub mod pagination;
pub mod ports;
pub mod share;

#[cfg(test)]
mod testing;

pub use disclosure::{CardLevels, Disclosure, SummaryLevel};
pub use domain::{CommitfestTag, SummaryListing, TopDiscussion, WeeklySummary};
pub use memory::InMemorySummaryStore;
pub use page::{compose_detail_page, load_summary, DetailBody, DetailError, DetailPage, DetailView, DiscussionCard};
pub use pagination::{SummaryFeed, SummaryListState, INITIAL_PAGE_SIZE, LIST_ERROR_MESSAGE};
pub use ports::{MarkdownRenderer, PortError, PortResult, SummaryStore};
pub use share::ShareLinks;
