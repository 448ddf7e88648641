use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-session progress counters. At most one row per session (enforced by
/// a UNIQUE constraint); every mutation is an additive increment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProgress {
    pub id: Uuid,
    pub user_session: String,
    pub total_points: i32,
    pub completed_challenges: Vec<String>,
    pub current_streak: i32,
    pub mood_entries_count: i32,
}
