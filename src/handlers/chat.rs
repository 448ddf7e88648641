use axum::{extract::State, Json};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::chat::{ChatMessage, ChatRequest, ChatResponse};
use crate::services::prompts;
use crate::AppState;

/// POST /api/chat — companion reply, persisted to the append-only history.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = state
        .insights
        .generate(prompts::CHAT_PERSONA, &body.message)
        .await
        .map_err(AppError::InsightGeneration)?;

    let entry = ChatMessage {
        id: Uuid::new_v4(),
        user_session: body.user_session,
        message: body.message,
        response,
        timestamp: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO chat_messages (id, user_session, message, response, timestamp)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(entry.id)
    .bind(&entry.user_session)
    .bind(&entry.message)
    .bind(&entry.response)
    .bind(entry.timestamp)
    .execute(&state.db)
    .await?;

    Ok(Json(ChatResponse {
        response: entry.response,
    }))
}
