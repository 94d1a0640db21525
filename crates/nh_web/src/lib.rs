use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/rss-sources", get(handlers::rss_sources))
        .route("/api/fetch-rss", post(handlers::fetch_rss))
        .route("/api/extract-description", post(handlers::extract_description))
        .route("/api/save-news-status", post(handlers::save_news_status))
        .route("/api/filtered-news", get(handlers::filtered_news))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind `addr` and run the API until the process exits.
pub async fn serve(addr: &str, state: AppState) -> nh_core::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use nh_core::{Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use nh_core::{Error, Result};
    use nh_extract::{DescriptionPipeline, PageFetcher};
    use nh_inference::RemoteFallback;
    use nh_storage::MemoryDecisionStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct OfflineFetcher;

    #[async_trait]
    impl PageFetcher for OfflineFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            Err(Error::Fetch(format!("{} offline in tests", url)))
        }
    }

    async fn test_app() -> Router {
        let pipeline = DescriptionPipeline::new(RemoteFallback::disabled())
            .with_fetcher(Arc::new(OfflineFetcher));
        let state = AppState::new(pipeline, Arc::new(MemoryDecisionStore::new()));
        create_app(state).await
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_banner() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rss_sources_lists_builtins() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/api/rss-sources").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(!json["sources"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extract_description_requires_url() {
        let app = test_app().await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/extract-description",
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_description_never_errors_on_unreachable_url() {
        let app = test_app().await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/extract-description",
                serde_json::json!({ "url": "https://example.com/gone" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(!json["description"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_filter_round_trip() {
        let app = test_app().await;

        let entry = serde_json::json!({
            "title": "A story",
            "link": "https://example.com/story",
            "description": "Something happened somewhere.",
            "published_date": "2024-05-01",
            "source": "Test Source",
            "image": ""
        });
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/save-news-status",
                serde_json::json!({ "entry": entry, "status": "Accepted" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/filtered-news?status_filter=Accepted")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["link"], "https://example.com/story");

        let response = app
            .oneshot(
                Request::get("/api/filtered-news?status_filter=Rejected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert!(json["entries"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_rejects_unknown_status() {
        let app = test_app().await;
        let entry = serde_json::json!({
            "title": "A story",
            "link": "https://example.com/story",
            "description": "",
            "published_date": "",
            "source": "Test Source"
        });
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/save-news-status",
                serde_json::json!({ "entry": entry, "status": "Maybe" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fetch_rss_rejects_bad_dates() {
        let app = test_app().await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/fetch-rss",
                serde_json::json!({ "start_date": "05/01/2024", "end_date": "2024-05-02" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
