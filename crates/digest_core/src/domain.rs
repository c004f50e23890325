//! crates/digest_core/src/domain.rs
//!
//! Defines the pure, core data structures for the digest.
//! These structs are independent of any database or serialization format.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// One row of the summary listing. The listing never carries the markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryListing {
    pub id: Uuid,
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub total_posts: i64,
    pub total_participants: i64,
    pub created_at: DateTime<Utc>,
}

/// One week's AI-generated digest, as shown on the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub id: Uuid,
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub summary_content: String,
    pub top_discussions: Option<Vec<TopDiscussion>>,
    pub total_posts: i64,
    pub total_participants: i64,
    pub created_at: DateTime<Utc>,
}

impl WeeklySummary {
    /// The listing projection of this summary.
    pub fn listing(&self) -> SummaryListing {
        SummaryListing {
            id: self.id,
            week_start_date: self.week_start_date,
            week_end_date: self.week_end_date,
            total_posts: self.total_posts,
            total_participants: self.total_participants,
            created_at: self.created_at,
        }
    }

    /// True when at least one discussion carries per-thread summary text.
    pub fn has_multi_level(&self) -> bool {
        self.top_discussions
            .as_ref()
            .is_some_and(|ds| ds.iter().any(TopDiscussion::has_any_summary))
    }
}

/// A curated tag from the commitfest, with an optional `#rrggbb` colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitfestTag {
    pub name: String,
    pub color: Option<String>,
}

/// One mailing-list thread's aggregated activity and summary texts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopDiscussion {
    pub thread_id: Option<String>,
    pub subject: String,
    pub post_count: i64,
    pub participants: i64,
    pub first_post_at: DateTime<Utc>,
    pub last_post_at: DateTime<Utc>,
    pub thread_url: Option<String>,
    pub redirect_slug: Option<String>,
    pub commitfest_tags: Option<Vec<CommitfestTag>>,
    pub ai_tags: Option<Vec<String>>,
    pub summary_brief: Option<String>,
    pub summary_detailed: Option<String>,
    pub summary_deep: Option<String>,
}

impl TopDiscussion {
    pub fn has_any_summary(&self) -> bool {
        [&self.summary_brief, &self.summary_detailed, &self.summary_deep]
            .iter()
            .any(|s| s.as_deref().is_some_and(|t| !t.is_empty()))
    }
}
