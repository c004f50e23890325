//! In-memory [`SummaryStore`] for tests and local previews.
//!
//! Records are held in a `Vec` sorted by week start, newest first, so range
//! queries behave like the `ORDER BY week_start_date DESC` listing.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{SummaryListing, WeeklySummary};
use crate::ports::{PortError, PortResult, SummaryStore};

#[derive(Debug, Clone, Default)]
pub struct InMemorySummaryStore {
    summaries: Vec<WeeklySummary>,
}

impl InMemorySummaryStore {
    pub fn new(summaries: impl IntoIterator<Item = WeeklySummary>) -> Self {
        let mut summaries: Vec<_> = summaries.into_iter().collect();
        summaries.sort_by(|a, b| b.week_start_date.cmp(&a.week_start_date));
        Self { summaries }
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

#[async_trait]
impl SummaryStore for InMemorySummaryStore {
    async fn list_summaries(&self, offset: usize, limit: usize) -> PortResult<Vec<SummaryListing>> {
        Ok(self
            .summaries
            .iter()
            .skip(offset)
            .take(limit)
            .map(WeeklySummary::listing)
            .collect())
    }

    async fn get_summary(&self, id: Uuid) -> PortResult<WeeklySummary> {
        self.summaries
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Summary {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::summary_for_week;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let older = summary_for_week(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        let newer = summary_for_week(NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
        let store = InMemorySummaryStore::new([older.clone(), newer.clone()]);

        let page = store.list_summaries(0, 10).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, newer.id);
        assert_eq!(page[1].id, older.id);
    }

    #[tokio::test]
    async fn test_range_past_end_is_empty() {
        let store = InMemorySummaryStore::new([summary_for_week(
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
        )]);
        assert!(store.list_summaries(5, 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let store = InMemorySummaryStore::default();
        let err = store.get_summary(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
    }
}
