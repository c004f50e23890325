//! services/site/src/web/pages.rs
//!
//! Axum handlers for the HTML pages: the summary list and a single summary.

use crate::web::html::{render_detail, render_detail_error, render_home};
use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use digest_core::page::{compose_detail_page, load_summary, DetailError, DetailView, DETAIL_ERROR_MESSAGE};
use digest_core::CardLevels;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Upper bound on replayed "load more" steps for a single page view.
pub const MAX_LOAD_MORE_STEPS: usize = 8;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Number of "load more" steps to replay after the first page.
    pub more: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    /// 1-based card opened from a share link.
    pub expand: Option<String>,
    /// Explicit per-card levels, e.g. `1:detailed,3:deep`.
    pub levels: Option<String>,
}

/// GET / - the paginated summary list.
pub async fn home_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let steps = query
        .more
        .as_deref()
        .and_then(|m| m.trim().parse::<usize>().ok())
        .unwrap_or(0)
        .min(MAX_LOAD_MORE_STEPS);

    let mut feed = app_state.feed();
    feed.load_initial().await;
    // A failed page ends the replay; its message is what the reader sees.
    let mut taken = 0;
    while taken < steps && feed.state().error().is_none() && feed.load_more().await {
        taken += 1;
    }
    debug!(
        loaded = feed.state().summaries().len(),
        has_more = feed.state().has_more(),
        "Summary list assembled"
    );

    let status = if feed.state().error().is_some() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    (status, Html(render_home(feed.state(), taken)))
}

/// GET /summary/{id} - one weekly summary.
pub async fn summary_page_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> impl IntoResponse {
    let Ok(id) = Uuid::parse_str(id.trim()) else {
        info!("Rejected malformed summary id: {}", id);
        return (StatusCode::NOT_FOUND, Html(render_detail_error(DETAIL_ERROR_MESSAGE)));
    };

    let summary = match load_summary(app_state.store.as_ref(), id).await {
        Ok(summary) => summary,
        Err(e) => {
            let status = match e {
                DetailError::NotFound => StatusCode::NOT_FOUND,
                DetailError::Failed => StatusCode::INTERNAL_SERVER_ERROR,
            };
            return (status, Html(render_detail_error(e.message())));
        }
    };

    let view = DetailView {
        expand: query
            .expand
            .as_deref()
            .and_then(|e| e.trim().parse::<usize>().ok())
            .filter(|n| *n > 0),
        levels: query
            .levels
            .as_deref()
            .map(CardLevels::parse)
            .unwrap_or_default(),
    };
    let page = compose_detail_page(&summary, &view, &app_state.config.site_url);
    let html = render_detail(&page, view.expand, app_state.markdown.as_ref());
    (StatusCode::OK, Html(html))
}
