//! services/site/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `SummaryStore` port from the `core` crate. It reads the
//! `weekly_summaries` table with `sqlx` and never writes to it.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use digest_core::domain::{CommitfestTag, SummaryListing, TopDiscussion, WeeklySummary};
use digest_core::ports::{PortError, PortResult, SummaryStore};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const LIST_QUERY: &str = "SELECT id, week_start_date, week_end_date, total_posts, total_participants, created_at \
     FROM weekly_summaries ORDER BY week_start_date DESC OFFSET $1 LIMIT $2";

const DETAIL_QUERY: &str = "SELECT id, week_start_date, week_end_date, summary_content, top_discussions, \
     total_posts, total_participants, created_at FROM weekly_summaries WHERE id = $1";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `SummaryStore` port.
#[derive(Clone)]
pub struct PgSummaryStore {
    pool: PgPool,
}

impl PgSummaryStore {
    /// Creates a new `PgSummaryStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct ListingRecord {
    id: Uuid,
    week_start_date: NaiveDate,
    week_end_date: NaiveDate,
    total_posts: i32,
    total_participants: i32,
    created_at: DateTime<Utc>,
}
impl ListingRecord {
    fn to_domain(self) -> SummaryListing {
        SummaryListing {
            id: self.id,
            week_start_date: self.week_start_date,
            week_end_date: self.week_end_date,
            total_posts: i64::from(self.total_posts),
            total_participants: i64::from(self.total_participants),
            created_at: self.created_at,
        }
    }
}

#[derive(FromRow)]
struct SummaryRecord {
    id: Uuid,
    week_start_date: NaiveDate,
    week_end_date: NaiveDate,
    summary_content: String,
    top_discussions: Option<Json<Vec<DiscussionRecord>>>,
    total_posts: i32,
    total_participants: i32,
    created_at: DateTime<Utc>,
}
impl SummaryRecord {
    fn to_domain(self) -> WeeklySummary {
        WeeklySummary {
            id: self.id,
            week_start_date: self.week_start_date,
            week_end_date: self.week_end_date,
            summary_content: self.summary_content,
            top_discussions: self
                .top_discussions
                .map(|Json(ds)| ds.into_iter().map(DiscussionRecord::to_domain).collect()),
            total_posts: i64::from(self.total_posts),
            total_participants: i64::from(self.total_participants),
            created_at: self.created_at,
        }
    }
}

/// One element of the `top_discussions` JSONB array.
#[derive(Deserialize)]
struct DiscussionRecord {
    thread_id: Option<String>,
    subject: String,
    #[serde(default)]
    post_count: i64,
    #[serde(default)]
    participants: i64,
    first_post_at: DateTime<Utc>,
    last_post_at: DateTime<Utc>,
    thread_url: Option<String>,
    redirect_slug: Option<String>,
    commitfest_tags: Option<Vec<CommitfestTagRecord>>,
    ai_tags: Option<Vec<String>>,
    summary_brief: Option<String>,
    summary_detailed: Option<String>,
    summary_deep: Option<String>,
}
impl DiscussionRecord {
    fn to_domain(self) -> TopDiscussion {
        TopDiscussion {
            thread_id: self.thread_id,
            subject: self.subject,
            post_count: self.post_count,
            participants: self.participants,
            first_post_at: self.first_post_at,
            last_post_at: self.last_post_at,
            thread_url: self.thread_url,
            redirect_slug: self.redirect_slug,
            commitfest_tags: self.commitfest_tags.map(|tags| {
                tags.into_iter()
                    .map(|t| CommitfestTag {
                        name: t.name,
                        color: t.color,
                    })
                    .collect()
            }),
            ai_tags: self.ai_tags,
            summary_brief: self.summary_brief,
            summary_detailed: self.summary_detailed,
            summary_deep: self.summary_deep,
        }
    }
}

#[derive(Deserialize)]
struct CommitfestTagRecord {
    name: String,
    color: Option<String>,
}

/// Postgres `OFFSET`/`LIMIT` take a bigint; anything past it saturates
/// instead of wrapping negative.
fn sql_bound(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

//=========================================================================================
// `SummaryStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl SummaryStore for PgSummaryStore {
    async fn list_summaries(&self, offset: usize, limit: usize) -> PortResult<Vec<SummaryListing>> {
        let records = sqlx::query_as::<_, ListingRecord>(LIST_QUERY)
            .bind(sql_bound(offset))
            .bind(sql_bound(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn get_summary(&self, id: Uuid) -> PortResult<WeeklySummary> {
        let record = sqlx::query_as::<_, SummaryRecord>(DETAIL_QUERY)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => PortError::NotFound(format!("Summary {} not found", id)),
                _ => PortError::Unexpected(e.to_string()),
            })?;
        Ok(record.to_domain())
    }
}
