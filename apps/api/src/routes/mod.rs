pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches/score", post(handlers::handle_score))
        .route(
            "/api/v1/matches/recommendations",
            post(handlers::handle_recommendations),
        )
        .route(
            "/api/v1/matches/skill-gaps",
            post(handlers::handle_skill_gaps),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::matcher::WeightedJobMatcher;

    fn test_router() -> Router {
        build_router(AppState {
            config: Config {
                max_jobs_per_request: 3,
                ..Config::default()
            },
            matcher: Arc::new(WeightedJobMatcher::default()),
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn unity_profile() -> Value {
        json!({ "experience": 4, "skills": ["Unity", "C#"] })
    }

    fn unity_job(id: &str) -> Value {
        json!({
            "id": id,
            "requirements": ["Unity", "C#", "Blender"],
            "experience_level": "mid"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_score_endpoint() {
        let (status, body) = post_json(
            "/api/v1/matches/score",
            json!({ "profile": unity_profile(), "job": unity_job("job-1") }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_id"], "job-1");
        assert_eq!(body["match_score"], 76);
        assert_eq!(body["missing_skills"], json!(["Blender"]));
    }

    #[tokio::test]
    async fn test_score_rejects_inverted_salary() {
        let mut job = unity_job("job-1");
        job["salary"] = json!({ "min": 90000, "max": 50000 });
        let (status, body) =
            post_json("/api/v1/matches/score", json!({ "profile": unity_profile(), "job": job })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_recommendations_endpoint() {
        let (status, body) = post_json(
            "/api/v1/matches/recommendations",
            json!({
                "profile": unity_profile(),
                "jobs": [unity_job("a"), { "id": "b", "requirements": ["Houdini", "ZBrush"], "experience_level": "director" }],
                "limit": 5
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_jobs_scored"], 2);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
        assert_eq!(body["recommendations"][0]["job_id"], "a");
    }

    #[tokio::test]
    async fn test_recommendations_rejects_oversized_batch_and_zero_limit() {
        let jobs = json!([unity_job("a"), unity_job("b"), unity_job("c"), unity_job("d")]);
        let (status, _) = post_json(
            "/api/v1/matches/recommendations",
            json!({ "profile": unity_profile(), "jobs": jobs }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_json(
            "/api/v1/matches/recommendations",
            json!({ "profile": unity_profile(), "jobs": [unity_job("a")], "limit": 0 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_skill_gaps_endpoint() {
        let (status, body) = post_json(
            "/api/v1/matches/skill-gaps",
            json!({
                "profile": { "skills": { "technical": ["Unity"] } },
                "jobs": [
                    { "id": "1", "requirements": ["C++", "Unity"] },
                    { "id": "2", "requirements": ["C++"] }
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["missing_critical_skills"], json!(["C++"]));
        assert_eq!(body["strength_areas"], json!(["Unity"]));
        assert_eq!(body["learning_recommendations"][0]["priority"], "high");
    }
}
