use axum::Json;

use crate::models::challenge::{self, Challenge};

/// GET /api/challenges — static catalog, fresh ids on every call.
pub async fn list_challenges() -> Json<Vec<Challenge>> {
    Json(challenge::catalog())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_challenges_route_returns_full_catalog() {
        let app = Router::new().route("/api/challenges", get(list_challenges));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/challenges")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let challenges: Vec<Challenge> = serde_json::from_slice(&body).unwrap();
        assert_eq!(challenges.len(), 4);
    }
}
