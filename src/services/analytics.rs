//! Analytics aggregator: numeric summary plus a narrative read of a
//! session's recent mood window.
//!
//! The numeric steps (mean, rounding, trend) are pure functions over the
//! fetched scores; only the fetch and the generator call do I/O.

use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::mood::MoodEntry;
use crate::services::insight::InsightClient;
use crate::services::prompts;

/// Default analytics window: the most recent two weeks of entries.
pub const DEFAULT_WINDOW: i64 = 14;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub analysis: String,
    pub average_mood: f64,
    pub total_entries: usize,
    pub trend: Trend,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MoodAnalytics {
    NoData { message: String },
    Summary(AnalyticsSummary),
}

/// Rounds to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean mood score rounded to one decimal. Callers must pass a non-empty
/// slice.
pub fn average_mood(scores: &[i32]) -> f64 {
    let sum: i32 = scores.iter().sum();
    round1(sum as f64 / scores.len() as f64)
}

/// Two-bucket heuristic: "improving" when the single most recent score sits
/// strictly above the window mean, else "stable". The most recent sample is
/// part of the mean it is compared against, which biases toward "stable".
pub fn classify_trend(scores_newest_first: &[i32]) -> Trend {
    let avg = average_mood(scores_newest_first);
    if scores_newest_first[0] as f64 > avg {
        Trend::Improving
    } else {
        Trend::Stable
    }
}

/// Fetches the most recent `window` entries for the session and summarizes
/// them. An empty window short-circuits to the no-data result without
/// touching the insight generator; a generator failure fails the whole
/// operation (no partial numeric-only result).
pub async fn compute(
    pool: &PgPool,
    insights: &InsightClient,
    user_session: &str,
    window: i64,
) -> AppResult<MoodAnalytics> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        WHERE user_session = $1
        ORDER BY timestamp DESC
        LIMIT $2
        "#,
    )
    .bind(user_session)
    .bind(window)
    .fetch_all(pool)
    .await?;

    if entries.is_empty() {
        return Ok(MoodAnalytics::NoData {
            message: "No mood data available".into(),
        });
    }

    let scores: Vec<i32> = entries.iter().map(|e| e.mood_score).collect();

    let analysis = insights
        .generate(prompts::WELLNESS_PERSONA, &prompts::pattern_prompt(&entries))
        .await
        .map_err(AppError::InsightGeneration)?;

    Ok(MoodAnalytics::Summary(AnalyticsSummary {
        analysis,
        average_mood: average_mood(&scores),
        total_entries: entries.len(),
        trend: classify_trend(&scores),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_eq!(round1(7.25), 7.3);
        assert_eq!(round1(-7.25), -7.3);
        assert_eq!(round1(7.0), 7.0);
        assert_eq!(round1(6.666_666), 6.7);
    }

    #[test]
    fn test_average_of_window() {
        assert_eq!(average_mood(&[8, 6, 7]), 7.0);
        assert_eq!(average_mood(&[1, 2]), 1.5);
        assert_eq!(average_mood(&[10]), 10.0);
    }

    #[test]
    fn test_recent_above_mean_is_improving() {
        // newest first: 8 against a mean of 7.0
        assert_eq!(classify_trend(&[8, 6, 7]), Trend::Improving);
    }

    #[test]
    fn test_recent_at_or_below_mean_is_stable() {
        assert_eq!(classify_trend(&[6, 7, 8]), Trend::Stable);
        // single entry equals its own mean
        assert_eq!(classify_trend(&[5]), Trend::Stable);
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Trend::Improving).unwrap(),
            "\"improving\""
        );
        assert_eq!(serde_json::to_string(&Trend::Stable).unwrap(), "\"stable\"");
    }
}
