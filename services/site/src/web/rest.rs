//! services/site/src/web/rest.rs
//!
//! Contains the Axum handlers for the JSON API endpoints and the master
//! definition for the OpenAPI specification.

use crate::error::ApiError;
use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, NaiveDate, Utc};
use digest_core::domain::{CommitfestTag, SummaryListing, TopDiscussion, WeeklySummary};
use digest_core::ports::PortError;
use digest_core::LIST_ERROR_MESSAGE;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::{IntoParams, OpenApi, ToSchema};
use uuid::Uuid;

const MAX_PAGE_LIMIT: usize = 100;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_summaries_handler,
        get_summary_handler,
        health_handler,
    ),
    components(
        schemas(
            SummaryPageResponse,
            SummaryListingResponse,
            SummaryResponse,
            TopDiscussionResponse,
            CommitfestTagResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Hackers Digest API", description = "Read-only access to weekly pgsql-hackers summaries.")
    )
)]
pub struct ApiDoc;

/// Default output of the `openapi` binary.
pub const OPENAPI_FILE: &str = "openapi.json";

/// Serializes `ApiDoc` to `path`, replacing any existing file.
pub fn write_openapi(path: &std::path::Path) -> Result<(), ApiError> {
    let document = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(path, document)?;
    info!(path = %path.display(), "OpenAPI document written");
    Ok(())
}

//=========================================================================================
// API Response and Query Structs
//=========================================================================================

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of summaries to skip.
    pub offset: Option<usize>,
    /// Page size, clamped to 1..=100.
    pub limit: Option<usize>,
}

/// One page of the summary listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryPageResponse {
    pub items: Vec<SummaryListingResponse>,
    /// True when the page came back full, so another page may exist.
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryListingResponse {
    pub id: Uuid,
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub total_posts: i64,
    pub total_participants: i64,
    pub created_at: DateTime<Utc>,
}

impl From<SummaryListing> for SummaryListingResponse {
    fn from(s: SummaryListing) -> Self {
        Self {
            id: s.id,
            week_start_date: s.week_start_date,
            week_end_date: s.week_end_date,
            total_posts: s.total_posts,
            total_participants: s.total_participants,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub id: Uuid,
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub summary_content: String,
    pub top_discussions: Option<Vec<TopDiscussionResponse>>,
    pub total_posts: i64,
    pub total_participants: i64,
    pub created_at: DateTime<Utc>,
}

impl From<WeeklySummary> for SummaryResponse {
    fn from(s: WeeklySummary) -> Self {
        Self {
            id: s.id,
            week_start_date: s.week_start_date,
            week_end_date: s.week_end_date,
            summary_content: s.summary_content,
            top_discussions: s
                .top_discussions
                .map(|ds| ds.into_iter().map(TopDiscussionResponse::from).collect()),
            total_posts: s.total_posts,
            total_participants: s.total_participants,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopDiscussionResponse {
    pub thread_id: Option<String>,
    pub subject: String,
    pub post_count: i64,
    pub participants: i64,
    pub first_post_at: DateTime<Utc>,
    pub last_post_at: DateTime<Utc>,
    pub thread_url: Option<String>,
    pub redirect_slug: Option<String>,
    pub commitfest_tags: Option<Vec<CommitfestTagResponse>>,
    pub ai_tags: Option<Vec<String>>,
    pub summary_brief: Option<String>,
    pub summary_detailed: Option<String>,
    pub summary_deep: Option<String>,
}

impl From<TopDiscussion> for TopDiscussionResponse {
    fn from(d: TopDiscussion) -> Self {
        Self {
            thread_id: d.thread_id,
            subject: d.subject,
            post_count: d.post_count,
            participants: d.participants,
            first_post_at: d.first_post_at,
            last_post_at: d.last_post_at,
            thread_url: d.thread_url,
            redirect_slug: d.redirect_slug,
            commitfest_tags: d
                .commitfest_tags
                .map(|tags| tags.into_iter().map(CommitfestTagResponse::from).collect()),
            ai_tags: d.ai_tags,
            summary_brief: d.summary_brief,
            summary_detailed: d.summary_detailed,
            summary_deep: d.summary_deep,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommitfestTagResponse {
    pub name: String,
    pub color: Option<String>,
}

impl From<CommitfestTag> for CommitfestTagResponse {
    fn from(t: CommitfestTag) -> Self {
        Self {
            name: t.name,
            color: t.color,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List summaries, newest week first.
#[utoipa::path(
    get,
    path = "/api/summaries",
    params(PageParams),
    responses(
        (status = 200, description = "A page of summaries", body = SummaryPageResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_summaries_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let offset = params.offset.unwrap_or(0);
    let limit = params
        .limit
        .unwrap_or(app_state.config.initial_page_size)
        .clamp(1, MAX_PAGE_LIMIT);

    let page = app_state
        .store
        .list_summaries(offset, limit)
        .await
        .map_err(|e| {
            error!("Error fetching summaries: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, LIST_ERROR_MESSAGE.to_string())
        })?;

    let response = SummaryPageResponse {
        has_more: page.len() == limit,
        items: page.into_iter().map(SummaryListingResponse::from).collect(),
    };
    Ok(Json(response))
}

/// Fetch one summary with its discussions.
#[utoipa::path(
    get,
    path = "/api/summaries/{id}",
    params(
        ("id" = Uuid, Path, description = "The summary's identifier.")
    ),
    responses(
        (status = 200, description = "The summary", body = SummaryResponse),
        (status = 404, description = "No summary with this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_summary_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match app_state.store.get_summary(id).await {
        Ok(summary) => Ok(Json(SummaryResponse::from(summary))),
        Err(PortError::NotFound(_)) => Err((StatusCode::NOT_FOUND, "Summary not found".to_string())),
        Err(e) => {
            error!("Error fetching summary: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load summary. Please try again later.".to_string(),
            ))
        }
    }
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_openapi_lists_every_route() {
        let path = std::env::temp_dir().join(format!("digest-openapi-{}.json", Uuid::new_v4()));
        write_openapi(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let doc: serde_json::Value = serde_json::from_str(&written).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/summaries"));
        assert!(paths.contains_key("/api/summaries/{id}"));
        assert!(paths.contains_key("/health"));
        assert!(doc["components"]["schemas"]["SummaryPageResponse"].is_object());
    }

    #[test]
    fn test_write_openapi_reports_unwritable_path() {
        let dir = std::env::temp_dir().join(format!("digest-missing-{}", Uuid::new_v4()));
        let err = write_openapi(&dir.join(OPENAPI_FILE)).unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
