use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodEntryRequest, MoodEntry, MoodHistoryQuery};
use crate::services::progress::{self, ActivityKind, DEFAULT_ACTIVITY_POINTS};
use crate::services::prompts;
use crate::AppState;

/// POST /api/mood
///
/// Insight generation, the entry insert, and the progress update are
/// all-or-nothing: if any step fails the client gets an error and must
/// treat the submission as not recorded.
pub async fn create_mood_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateMoodEntryRequest>,
) -> AppResult<Json<MoodEntry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    body.validate_emotions().map_err(AppError::Validation)?;

    let prompt = prompts::mood_insight_prompt(body.mood_score, &body.emotions, &body.description);
    let insight = state
        .insights
        .generate(prompts::WELLNESS_PERSONA, &prompt)
        .await
        .map_err(AppError::InsightGeneration)?;

    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries (id, user_session, mood_score, emotions, description, ai_insights)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.user_session)
    .bind(body.mood_score)
    .bind(&body.emotions)
    .bind(&body.description)
    .bind(&insight)
    .fetch_one(&state.db)
    .await?;

    progress::record_activity(
        &state.db,
        &body.user_session,
        ActivityKind::MoodEntry,
        DEFAULT_ACTIVITY_POINTS,
    )
    .await?;

    tracing::info!(session = %body.user_session, entry_id = %entry.id, "Mood entry recorded");

    Ok(Json(entry))
}

/// GET /api/mood/{session}?limit=30
pub async fn get_mood_history(
    State(state): State<AppState>,
    Path(user_session): Path<String>,
    Query(query): Query<MoodHistoryQuery>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        WHERE user_session = $1
        ORDER BY timestamp DESC
        LIMIT $2
        "#,
    )
    .bind(&user_session)
    .bind(query.limit())
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}
