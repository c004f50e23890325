//! Fixtures shared by the unit tests.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{TopDiscussion, WeeklySummary};

pub fn summary_for_week(week_start: NaiveDate) -> WeeklySummary {
    let created = week_start + Duration::days(7);
    WeeklySummary {
        id: Uuid::new_v4(),
        week_start_date: week_start,
        week_end_date: week_start + Duration::days(6),
        summary_content: "# Weekly Summary\n\nNothing much happened.".to_string(),
        top_discussions: None,
        total_posts: 120,
        total_participants: 40,
        created_at: Utc.from_utc_datetime(&created.and_hms_opt(9, 30, 0).unwrap()),
    }
}

pub fn discussion(brief: Option<&str>, detailed: Option<&str>, deep: Option<&str>) -> TopDiscussion {
    TopDiscussion {
        subject: "Reduce WAL volume for hash indexes".to_string(),
        post_count: 14,
        participants: 5,
        first_post_at: Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap(),
        last_post_at: Utc.with_ymd_and_hms(2025, 1, 10, 17, 45, 0).unwrap(),
        summary_brief: brief.map(str::to_string),
        summary_detailed: detailed.map(str::to_string),
        summary_deep: deep.map(str::to_string),
        ..Default::default()
    }
}
