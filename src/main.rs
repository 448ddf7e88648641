use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;
use services::insight::InsightClient;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub insights: InsightClient,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodspace_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    // Database
    let db = db::create_pool(&config.database_url).await;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    let insights = InsightClient::new(
        config.anthropic_api_key.clone(),
        config.insight_model.clone(),
        config.insight_timeout_secs,
    )
    .expect("Failed to build insight client");

    let state = AppState { db, insights };

    let api_routes = Router::new()
        .route("/api/", get(handlers::health::api_root))
        // Mood tracking
        .route("/api/mood", post(handlers::mood::create_mood_entry))
        .route("/api/mood/:session", get(handlers::mood::get_mood_history))
        // Anonymous stories
        .route("/api/stories", post(handlers::stories::create_story))
        .route("/api/stories", get(handlers::stories::list_stories))
        .route(
            "/api/stories/:id/support",
            post(handlers::stories::support_story),
        )
        // AI chat companion
        .route("/api/chat", post(handlers::chat::chat))
        // Wellness challenges
        .route("/api/challenges", get(handlers::challenges::list_challenges))
        // Progress & analytics
        .route("/api/progress/:session", get(handlers::progress::get_progress))
        .route(
            "/api/analytics/:session",
            get(handlers::analytics::get_analytics),
        );

    let health_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    // CORS: explicit origin list with credentials, or a permissive wildcard
    // policy (credentials are not allowed with a wildcard origin).
    let cors = match config.allowed_origins() {
        Some(origins) => {
            let origins: Vec<axum::http::HeaderValue> = origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
