use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::services::analytics::{self, MoodAnalytics, DEFAULT_WINDOW};
use crate::AppState;

/// GET /api/analytics/{session} — numeric summary plus narrative over the
/// recent mood window, or a no-data message.
pub async fn get_analytics(
    State(state): State<AppState>,
    Path(user_session): Path<String>,
) -> AppResult<Json<MoodAnalytics>> {
    let result =
        analytics::compute(&state.db, &state.insights, &user_session, DEFAULT_WINDOW).await?;
    Ok(Json(result))
}
