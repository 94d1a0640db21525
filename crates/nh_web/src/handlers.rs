use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use nh_core::{DecisionFilter, DecisionRecord, DecisionStatus, FeedItem};
use nh_feeds::{FeedSource, ItemFilter};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Error envelope matching the `{"detail": ...}` shape the dashboard
/// expects.
pub struct ApiError(StatusCode, String);

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self(StatusCode::BAD_REQUEST, detail.into())
    }

    fn internal(detail: impl Into<String>) -> Self {
        Self(StatusCode::INTERNAL_SERVER_ERROR, detail.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "detail": self.1 }))).into_response()
    }
}

#[derive(Deserialize)]
pub struct FetchParams {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub keyword: Option<String>,
}

#[derive(Serialize)]
pub struct SourcesResponse {
    pub sources: Vec<FeedSource>,
}

#[derive(Serialize)]
pub struct ItemsResponse {
    pub entries: Vec<FeedItem>,
}

#[derive(Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Deserialize)]
pub struct SaveStatusRequest {
    pub entry: FeedItem,
    pub status: String,
}

#[derive(Deserialize)]
pub struct FilteredNewsQuery {
    #[serde(default)]
    pub status_filter: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub keyword_filter: Option<String>,
}

#[derive(Serialize)]
pub struct DecisionsResponse {
    pub entries: Vec<DecisionRecord>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| ApiError::bad_request(format!("Invalid date format: {}", e)))
}

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "newshub API" }))
}

pub async fn rss_sources(State(state): State<Arc<AppState>>) -> Json<SourcesResponse> {
    Json(SourcesResponse {
        sources: state.sources.clone(),
    })
}

pub async fn fetch_rss(
    State(state): State<Arc<AppState>>,
    Json(params): Json<FetchParams>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let start_date = parse_date(&params.start_date)?;
    let end_date = parse_date(&params.end_date)?;
    let filter = ItemFilter::new(start_date, end_date).with_keyword(params.keyword);

    let items = state.feeds.fetch_all(&state.sources).await;
    Ok(Json(ItemsResponse {
        entries: filter.apply(items),
    }))
}

pub async fn extract_description(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<DescriptionResponse>, ApiError> {
    let url = request
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("URL is required"))?;

    let description = state.pipeline.extract_description(&url).await;
    Ok(Json(DescriptionResponse { description }))
}

pub async fn save_news_status(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status: DecisionStatus = request
        .status
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid status: {}", request.status)))?;

    let record = DecisionRecord::from_item(&request.entry, status);
    state
        .store
        .save_decision(&record)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(json!({
        "message": format!("News status saved as {}", status)
    })))
}

pub async fn filtered_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilteredNewsQuery>,
) -> Result<Json<DecisionsResponse>, ApiError> {
    let status = match query.status_filter.as_deref() {
        None | Some("All") | Some("") => None,
        Some(raw) => Some(
            raw.parse::<DecisionStatus>()
                .map_err(|_| ApiError::bad_request(format!("Invalid status filter: {}", raw)))?,
        ),
    };
    let start_date = query.start_date.as_deref().map(parse_date).transpose()?;
    let end_date = query.end_date.as_deref().map(parse_date).transpose()?;

    let filter = DecisionFilter {
        status,
        start_date,
        end_date,
        keyword: query.keyword_filter.filter(|k| !k.trim().is_empty()),
    };

    let entries = state
        .store
        .list_decisions(&filter)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(DecisionsResponse { entries }))
}
