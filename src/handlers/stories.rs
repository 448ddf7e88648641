use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::story::{CreateStoryRequest, Story, StoryListQuery};
use crate::AppState;

/// POST /api/stories — stories start unapproved; approval is a manual act
/// outside this service.
pub async fn create_story(
    State(state): State<AppState>,
    Json(body): Json<CreateStoryRequest>,
) -> AppResult<Json<Story>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let story = sqlx::query_as::<_, Story>(
        r#"
        INSERT INTO stories (id, user_session, title, story, category)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.user_session)
    .bind(&body.title)
    .bind(&body.story)
    .bind(&body.category)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(story))
}

/// GET /api/stories?category=&limit=20 — approved stories only.
pub async fn list_stories(
    State(state): State<AppState>,
    Query(query): Query<StoryListQuery>,
) -> AppResult<Json<Vec<Story>>> {
    let stories = match &query.category {
        Some(category) => {
            sqlx::query_as::<_, Story>(
                r#"
                SELECT * FROM stories
                WHERE is_approved = TRUE AND category = $1
                ORDER BY timestamp DESC
                LIMIT $2
                "#,
            )
            .bind(category)
            .bind(query.limit())
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as::<_, Story>(
                r#"
                SELECT * FROM stories
                WHERE is_approved = TRUE
                ORDER BY timestamp DESC
                LIMIT $1
                "#,
            )
            .bind(query.limit())
            .fetch_all(&state.db)
            .await?
        }
    };

    Ok(Json(stories))
}

/// POST /api/stories/{id}/support
///
/// Unconditional increment with no de-duplication; an unknown id is a
/// silent success rather than a 404, logged at debug.
pub async fn support_story(
    State(state): State<AppState>,
    Path(story_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let result = sqlx::query("UPDATE stories SET support_count = support_count + 1 WHERE id = $1")
        .bind(story_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        tracing::debug!(%story_id, "Support increment matched no story");
    }

    Ok(Json(json!({ "message": "Support added" })))
}
