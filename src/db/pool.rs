use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Bounded pool; the acquire timeout keeps a saturated store from queueing
/// requests indefinitely instead of failing them.
pub async fn create_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
        .expect("Failed to create database pool")
}
