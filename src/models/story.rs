use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// An anonymous story. Created unapproved; approval happens outside this
/// service. `support_count` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Story {
    pub id: Uuid,
    pub user_session: String,
    pub title: String,
    pub story: String,
    pub category: String,
    pub is_approved: bool,
    pub support_count: i32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStoryRequest {
    #[validate(length(min = 1, max = 128, message = "user_session is required"))]
    pub user_session: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Story must be 1-10000 characters"))]
    pub story: String,

    #[validate(length(min = 1, max = 64, message = "Category is required"))]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct StoryListQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

impl StoryListQuery {
    const DEFAULT_LIMIT: i64 = 20;
    const MAX_LIMIT: i64 = 100;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}
