use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::progress::UserProgress;
use crate::services::progress;
use crate::AppState;

/// GET /api/progress/{session} — lazily creates the row on first query.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_session): Path<String>,
) -> AppResult<Json<UserProgress>> {
    let progress = progress::get_or_create(&state.db, &user_session).await?;
    Ok(Json(progress))
}
