use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A single journal entry. Immutable after insert; `ai_insights` is filled
/// in at creation time and never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_session: String,
    /// 1-10 scale
    pub mood_score: i32,
    pub emotions: Vec<String>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub ai_insights: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMoodEntryRequest {
    #[validate(length(min = 1, max = 128, message = "user_session is required"))]
    pub user_session: String,

    #[validate(range(min = 1, max = 10, message = "mood_score must be between 1 and 10"))]
    pub mood_score: i32,

    #[validate(length(min = 1, message = "At least one emotion is required"))]
    pub emotions: Vec<String>,

    #[validate(length(max = 5000, message = "Description must be under 5000 characters"))]
    pub description: String,
}

impl CreateMoodEntryRequest {
    /// Emotion labels must be non-empty strings; `validator` can't reach
    /// into the Vec, so this check stays explicit.
    pub fn validate_emotions(&self) -> Result<(), String> {
        if self.emotions.iter().any(|e| e.trim().is_empty()) {
            return Err("Emotion labels must be non-empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct MoodHistoryQuery {
    pub limit: Option<i64>,
}

impl MoodHistoryQuery {
    const DEFAULT_LIMIT: i64 = 30;
    const MAX_LIMIT: i64 = 200;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mood_score: i32) -> CreateMoodEntryRequest {
        CreateMoodEntryRequest {
            user_session: "session-1".into(),
            mood_score,
            emotions: vec!["calm".into()],
            description: "an ordinary day".into(),
        }
    }

    #[test]
    fn test_mood_score_boundaries() {
        assert!(request(1).validate().is_ok());
        assert!(request(10).validate().is_ok());
        assert!(request(0).validate().is_err());
        assert!(request(11).validate().is_err());
    }

    #[test]
    fn test_empty_emotions_rejected() {
        let mut req = request(5);
        req.emotions.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_emotion_label_rejected() {
        let mut req = request(5);
        req.emotions.push("  ".into());
        assert!(req.validate_emotions().is_err());
    }

    #[test]
    fn test_history_limit_clamped() {
        assert_eq!(MoodHistoryQuery { limit: None }.limit(), 30);
        assert_eq!(MoodHistoryQuery { limit: Some(0) }.limit(), 1);
        assert_eq!(MoodHistoryQuery { limit: Some(9999) }.limit(), 200);
    }
}
