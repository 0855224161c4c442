pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::explore::handlers as explore;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/catalog/jobs", get(catalog::handle_list_jobs))
        .route("/api/v1/catalog/jobs/:name", get(catalog::handle_get_job))
        .route(
            "/api/v1/catalog/interests",
            get(catalog::handle_list_interests),
        )
        // Exploration API
        .route(
            "/api/v1/interests/normalize",
            post(explore::handle_normalize),
        )
        .route("/api/v1/combinations", post(explore::handle_combinations))
        .route("/api/v1/score", post(explore::handle_score))
        .route("/api/v1/rank", post(explore::handle_rank))
        .route("/api/v1/suggestions", post(explore::handle_suggestions))
        .route("/api/v1/explore", post(explore::handle_explore))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Catalog::builtin().unwrap(), Config::default()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }

    async fn read(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog_jobs"], 8);
    }

    #[tokio::test]
    async fn test_catalog_jobs_and_lookup() {
        let (status, body) = get_json("/api/v1/catalog/jobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 8);

        let (status, body) = get_json("/api/v1/catalog/jobs/UX%20Designer").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "UX Designer");

        let (status, body) = get_json("/api/v1/catalog/jobs/Astronaut").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_catalog_interests() {
        let (status, body) = get_json("/api/v1/catalog/interests").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggested"].as_array().unwrap().len(), 15);
        assert_eq!(body["default_selection"], json!(["sport", "tecnologia", "scrittura"]));
    }

    #[tokio::test]
    async fn test_normalize_endpoint() {
        let (status, body) = post_json(
            "/api/v1/interests/normalize",
            json!({"text": " Cucina, SPORT,,", "preselected": ["sport"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["interests"], json!(["sport", "cucina"]));
    }

    #[tokio::test]
    async fn test_combinations_endpoint_pages() {
        let (status, body) = post_json(
            "/api/v1/combinations",
            json!({"interests": ["a", "b", "c"], "offset": 2, "limit": 3}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 7);
        assert_eq!(body["combinations"], json!([["c"], ["a", "b"], ["a", "c"]]));
    }

    #[tokio::test]
    async fn test_combinations_endpoint_rejects_oversized_input() {
        let interests: Vec<String> = (0..21).map(|i| format!("i{i}")).collect();
        let (status, body) =
            post_json("/api/v1/combinations", json!({ "interests": interests })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "TOO_MANY_INTERESTS");
    }

    #[tokio::test]
    async fn test_combinations_endpoint_rejects_huge_page() {
        let (status, _) = post_json(
            "/api/v1/combinations",
            json!({"interests": ["a"], "limit": 5000}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_score_endpoint_applies_penalty() {
        let (status, body) = post_json(
            "/api/v1/score",
            json!({
                "interests": ["sport", "tecnologia", "scrittura"],
                "tags": ["sport", "scrittura", "media"],
                "weights": {"sport": 3.0}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_f64().unwrap();
        assert!((score - (2.0 / 3.0 - 0.1)).abs() < 1e-9, "score was {score}");
        assert_eq!(body["scorer_backend"], "overlap");
    }

    #[tokio::test]
    async fn test_score_endpoint_requires_tags() {
        let (status, body) =
            post_json("/api/v1/score", json!({"interests": ["sport"], "tags": [" "]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rank_endpoint() {
        let (status, body) = post_json(
            "/api/v1/rank",
            json!({"interests": ["sport", "tecnologia", "scrittura"], "top_k": 2}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_matches"], 8);
        let ranking = body["ranking"].as_array().unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0]["name"], "Sports Journalist");
        assert_eq!(ranking[1]["name"], "Product Manager (Sport-Tech)");
    }

    #[tokio::test]
    async fn test_rank_endpoint_empty_interests() {
        let (status, body) = post_json("/api/v1/rank", json!({"interests": []})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INSUFFICIENT_INPUT");
    }

    #[tokio::test]
    async fn test_suggestions_endpoint_fallback() {
        let (status, body) = post_json("/api/v1/suggestions", json!({"top_jobs": []})).await;
        assert_eq!(status, StatusCode::OK);
        let suggestions = body["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].as_str().unwrap().starts_with("Portfolio career"));
    }

    #[tokio::test]
    async fn test_explore_endpoint() {
        let (status, body) = post_json(
            "/api/v1/explore",
            json!({"selected": ["sport", "tecnologia", "scrittura"], "weights": {"sport": 1.5}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["combinations"]["total"], 7);
        assert_eq!(body["ranking"][0]["name"], "Sports Journalist");
        assert_eq!(body["weights"]["sport"], 1.5);
        assert_eq!(body["weights"]["tecnologia"], 1.0);
        assert!(body["graph"]["edges"].as_array().unwrap().len() > 0);
        assert!(body["message"].is_null());
    }

    #[tokio::test]
    async fn test_explore_endpoint_without_input() {
        let (status, body) =
            post_json("/api/v1/explore", json!({"use_defaults": false, "custom_text": ""})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INSUFFICIENT_INPUT");
    }
}
