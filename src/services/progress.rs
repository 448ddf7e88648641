//! Progress tracker: per-session cumulative points and activity counts.
//!
//! All mutation goes through a single atomic upsert keyed on the
//! `user_progress.user_session` UNIQUE constraint, so two concurrent first
//! activities for the same session cannot create duplicate rows.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::progress::UserProgress;

/// Points awarded per qualifying activity unless the caller says otherwise.
pub const DEFAULT_ACTIVITY_POINTS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    MoodEntry,
}

/// The increments one activity applies to a progress row.
#[derive(Debug, PartialEq, Eq)]
pub struct ProgressDelta {
    pub points: i32,
    pub mood_entries: i32,
}

pub fn delta_for(activity: ActivityKind, points: i32) -> ProgressDelta {
    ProgressDelta {
        points,
        mood_entries: match activity {
            ActivityKind::MoodEntry => 1,
        },
    }
}

/// Applies one activity's increments. Creates the progress row on first
/// activity; otherwise only `total_points` (and `mood_entries_count` for
/// mood entries) move.
pub async fn record_activity(
    pool: &PgPool,
    user_session: &str,
    activity: ActivityKind,
    points: i32,
) -> AppResult<()> {
    let delta = delta_for(activity, points);

    sqlx::query(
        r#"
        INSERT INTO user_progress (id, user_session, total_points, mood_entries_count)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_session) DO UPDATE SET
            total_points = user_progress.total_points + $3,
            mood_entries_count = user_progress.mood_entries_count + $4
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_session)
    .bind(delta.points)
    .bind(delta.mood_entries)
    .execute(pool)
    .await?;

    Ok(())
}

/// Returns the session's progress row, creating a zero-valued one if none
/// exists yet. `ON CONFLICT DO NOTHING` keeps concurrent first queries from
/// racing each other.
pub async fn get_or_create(pool: &PgPool, user_session: &str) -> AppResult<UserProgress> {
    sqlx::query(
        r#"
        INSERT INTO user_progress (id, user_session)
        VALUES ($1, $2)
        ON CONFLICT (user_session) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_session)
    .execute(pool)
    .await?;

    let progress = sqlx::query_as::<_, UserProgress>(
        "SELECT * FROM user_progress WHERE user_session = $1",
    )
    .bind(user_session)
    .fetch_one(pool)
    .await?;

    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_entry_delta() {
        let delta = delta_for(ActivityKind::MoodEntry, DEFAULT_ACTIVITY_POINTS);
        assert_eq!(
            delta,
            ProgressDelta {
                points: 5,
                mood_entries: 1
            }
        );
    }

    #[test]
    fn test_two_activities_accumulate() {
        // Two mood entries on a fresh session must end at 10 points and an
        // entry count of 2; the upsert applies exactly one delta per call.
        let d1 = delta_for(ActivityKind::MoodEntry, DEFAULT_ACTIVITY_POINTS);
        let d2 = delta_for(ActivityKind::MoodEntry, DEFAULT_ACTIVITY_POINTS);
        assert_eq!(d1.points + d2.points, 10);
        assert_eq!(d1.mood_entries + d2.mood_entries, 2);
    }
}
