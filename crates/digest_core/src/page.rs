//! crates/digest_core/src/page.rs
//!
//! Detail-page composition: fetching one summary and deciding what the page
//! shows (header, overview, discussion cards, or the legacy full document).

use tracing::error;
use uuid::Uuid;

use crate::disclosure::{CardLevels, Disclosure, SummaryLevel};
use crate::domain::{TopDiscussion, WeeklySummary};
use crate::format::{date_time, date_with_ordinal, short_date};
use crate::overview::extract_overview;
use crate::ports::{PortError, SummaryStore};
use crate::share::ShareLinks;

pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load summary. Please try again later.";

//=========================================================================================
// Summary Detail Fetcher
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailError {
    NotFound,
    Failed,
}

impl DetailError {
    /// The single message shown to readers, whatever the cause.
    pub fn message(&self) -> &'static str {
        DETAIL_ERROR_MESSAGE
    }
}

pub async fn load_summary<S>(store: &S, id: Uuid) -> Result<WeeklySummary, DetailError>
where
    S: SummaryStore + ?Sized,
{
    store.get_summary(id).await.map_err(|e| {
        error!("Error fetching summary: {}", e);
        match e {
            PortError::NotFound(_) => DetailError::NotFound,
            PortError::Unexpected(_) => DetailError::Failed,
        }
    })
}

//=========================================================================================
// Page Composer
//=========================================================================================

/// Per-request view options for the detail page.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    /// 1-based card opened from a share link.
    pub expand: Option<usize>,
    pub levels: CardLevels,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryHeader {
    pub week_label: String,
    pub generated_on: String,
    pub total_posts: i64,
    pub total_participants: i64,
}

impl SummaryHeader {
    pub fn new(summary: &WeeklySummary) -> Self {
        Self {
            week_label: format!("Week of {}", date_with_ordinal(summary.week_end_date)),
            generated_on: format!("Generated on {}", date_time(summary.created_at)),
            total_posts: summary.total_posts,
            total_participants: summary.total_participants,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscussionCard<'a> {
    /// 1-based position, used for the anchor and share links.
    pub number: usize,
    pub discussion: &'a TopDiscussion,
    pub disclosure: Disclosure<'a>,
    pub share: ShareLinks,
    pub duration: String,
    levels: CardLevels,
}

impl<'a> DiscussionCard<'a> {
    pub fn anchor(&self) -> String {
        format!("discussion-{}", self.number)
    }

    /// Levels to carry forward when "show more" is followed.
    pub fn show_more_levels(&self) -> Option<CardLevels> {
        self.disclosure
            .expanded()
            .map(|next| self.levels.with(self.number, next))
    }

    /// Levels to carry forward when "show less" is followed.
    pub fn show_less_levels(&self) -> Option<CardLevels> {
        self.disclosure
            .can_collapse()
            .then(|| self.levels.with(self.number, SummaryLevel::Brief))
    }
}

#[derive(Debug, Clone)]
pub enum DetailBody<'a> {
    MultiLevel {
        /// Empty when the document has no overview section.
        overview: String,
        cards: Vec<DiscussionCard<'a>>,
    },
    /// Records without per-thread summaries render the whole document.
    Legacy { markdown: &'a str },
}

#[derive(Debug, Clone)]
pub struct DetailPage<'a> {
    pub summary: &'a WeeklySummary,
    pub header: SummaryHeader,
    pub body: DetailBody<'a>,
}

pub fn compose_detail_page<'a>(
    summary: &'a WeeklySummary,
    view: &DetailView,
    site_url: &str,
) -> DetailPage<'a> {
    let body = match summary.top_discussions.as_deref() {
        Some(discussions) if summary.has_multi_level() => DetailBody::MultiLevel {
            overview: extract_overview(&summary.summary_content),
            cards: discussions
                .iter()
                .enumerate()
                .map(|(i, discussion)| {
                    let number = i + 1;
                    DiscussionCard {
                        number,
                        discussion,
                        disclosure: view.levels.disclosure(discussion, number, view.expand),
                        share: ShareLinks::new(site_url, summary.id, number, discussion),
                        duration: format!(
                            "{} - {}",
                            short_date(discussion.first_post_at),
                            short_date(discussion.last_post_at)
                        ),
                        levels: view.levels.clone(),
                    }
                })
                .collect(),
        },
        _ => DetailBody::Legacy {
            markdown: &summary.summary_content,
        },
    };

    DetailPage {
        summary,
        header: SummaryHeader::new(summary),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemorySummaryStore;
    use crate::share::DEFAULT_SITE_URL;
    use crate::testing::{discussion, summary_for_week};
    use chrono::NaiveDate;

    fn week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn multi_level_summary() -> WeeklySummary {
        let mut summary = summary_for_week(week());
        summary.summary_content =
            "# Weekly\n\n## Overview\n\nBusy week.\n\n## Top Discussions\n\n...".to_string();
        summary.top_discussions = Some(vec![
            discussion(Some("b1"), Some("d1"), Some("x1")),
            discussion(Some("b2"), Some("d2"), None),
        ]);
        summary
    }

    #[test]
    fn test_header_uses_week_end_and_created_at() {
        let summary = summary_for_week(week());
        let header = SummaryHeader::new(&summary);
        assert_eq!(header.week_label, "Week of 12th Jan 2025");
        assert_eq!(header.generated_on, "Generated on Jan 13, 2025, 09:30 AM");
        assert_eq!(header.total_posts, 120);
    }

    #[test]
    fn test_legacy_body_without_discussions() {
        let summary = summary_for_week(week());
        let page = compose_detail_page(&summary, &DetailView::default(), DEFAULT_SITE_URL);
        assert!(matches!(page.body, DetailBody::Legacy { markdown } if markdown == summary.summary_content));
    }

    #[test]
    fn test_legacy_body_when_discussions_lack_summaries() {
        let mut summary = summary_for_week(week());
        summary.top_discussions = Some(vec![discussion(None, None, None)]);
        let page = compose_detail_page(&summary, &DetailView::default(), DEFAULT_SITE_URL);
        assert!(matches!(page.body, DetailBody::Legacy { .. }));
    }

    #[test]
    fn test_multi_level_body_has_overview_and_cards() {
        let summary = multi_level_summary();
        let view = DetailView {
            expand: Some(2),
            levels: CardLevels::default(),
        };
        let page = compose_detail_page(&summary, &view, DEFAULT_SITE_URL);
        let DetailBody::MultiLevel { overview, cards } = page.body else {
            panic!("expected multi-level body");
        };
        assert_eq!(overview, "Busy week.");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].anchor(), "discussion-1");
        assert_eq!(cards[0].disclosure.level(), SummaryLevel::Brief);
        assert_eq!(cards[1].disclosure.level(), SummaryLevel::Detailed);
        assert_eq!(cards[0].duration, "1/6/2025 - 1/10/2025");
        assert!(cards[1].share.share_url.ends_with("?expand=2#discussion-2"));
    }

    #[test]
    fn test_card_navigation_levels() {
        let summary = multi_level_summary();
        let view = DetailView {
            expand: None,
            levels: CardLevels::parse("1:detailed"),
        };
        let page = compose_detail_page(&summary, &view, DEFAULT_SITE_URL);
        let DetailBody::MultiLevel { cards, .. } = page.body else {
            panic!("expected multi-level body");
        };
        assert_eq!(
            cards[0].show_more_levels().map(|l| l.to_string()),
            Some("1:deep".to_string())
        );
        assert_eq!(
            cards[0].show_less_levels().map(|l| l.to_string()),
            Some("1:brief".to_string())
        );
        assert_eq!(
            cards[1].show_more_levels().map(|l| l.to_string()),
            Some("1:detailed,2:detailed".to_string())
        );
        assert!(cards[1].show_less_levels().is_none());
    }

    #[tokio::test]
    async fn test_load_summary_maps_missing_to_not_found() {
        let store = InMemorySummaryStore::default();
        let err = load_summary(&store, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, DetailError::NotFound);
        assert_eq!(err.message(), DETAIL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_load_summary_returns_record() {
        let summary = multi_level_summary();
        let store = InMemorySummaryStore::new([summary.clone()]);
        assert_eq!(load_summary(&store, summary.id).await.unwrap(), summary);
    }
}
