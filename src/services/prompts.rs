//! Prompt construction for the insight generator.
//!
//! Pure string building from structured inputs; no network or storage
//! access. The persona texts are configuration, not logic: the load-bearing
//! parts are the empathetic, culturally sensitive framing and the safety
//! redirect on crisis language.

use crate::models::mood::MoodEntry;

/// Default system persona for mood insights and pattern analysis.
pub const WELLNESS_PERSONA: &str = "You are a supportive mental wellness AI assistant \
focused on helping young people. Be empathetic, culturally sensitive, and provide \
practical guidance.";

/// System persona for the chat companion path.
pub const CHAT_PERSONA: &str = "You are MoodSpace AI, a supportive mental wellness \
companion for young people.
Your role is to:
1. Listen empathetically and validate feelings
2. Provide culturally sensitive guidance
3. Suggest practical coping strategies
4. Encourage professional help when needed
5. Be warm, non-judgmental, and understanding of family dynamics
6. Use simple, encouraging language
7. Never provide medical diagnoses or replace professional therapy

Always prioritize safety - if someone expresses suicidal thoughts, immediately \
encourage them to seek help from professionals or crisis helplines.";

/// Prompt for a single mood submission: asks for a brief, gentle insight.
pub fn mood_insight_prompt(mood_score: i32, emotions: &[String], description: &str) -> String {
    format!(
        "A young person has shared their mood:\n\
         Mood Score: {}/10\n\
         Emotions: {}\n\
         Description: {}\n\n\
         Provide a brief, culturally sensitive insight (2-3 sentences) that \
         acknowledges their feelings and offers gentle guidance or encouragement.",
        mood_score,
        emotions.join(", "),
        description
    )
}

/// One line per entry, in the order given (newest first).
pub fn render_mood_lines(entries: &[MoodEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "Date: {}, Score: {}, Emotions: {}",
                e.timestamp.format("%Y-%m-%d"),
                e.mood_score,
                e.emotions.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for the analytics path: asks for a short growth-oriented read of
/// the recent mood window.
pub fn pattern_prompt(entries: &[MoodEntry]) -> String {
    format!(
        "Analyze this 2-week mood pattern for a young person:\n{}\n\n\
         Provide a brief, encouraging analysis (3-4 sentences) highlighting:\n\
         1. Any positive trends or patterns\n\
         2. Areas for gentle attention\n\
         3. One specific, actionable suggestion for improvement\n\n\
         Be supportive and focus on growth rather than problems.",
        render_mood_lines(entries)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn entry(day: u32, score: i32, emotions: &[&str]) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            user_session: "s".into(),
            mood_score: score,
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            description: "".into(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
            ai_insights: None,
        }
    }

    #[test]
    fn test_mood_prompt_embeds_inputs() {
        let prompt = mood_insight_prompt(7, &["hopeful".into(), "tired".into()], "long week");
        assert!(prompt.contains("Mood Score: 7/10"));
        assert!(prompt.contains("Emotions: hopeful, tired"));
        assert!(prompt.contains("Description: long week"));
    }

    #[test]
    fn test_mood_lines_keep_given_order() {
        let entries = vec![entry(20, 8, &["calm"]), entry(19, 6, &["anxious", "tired"])];
        let lines = render_mood_lines(&entries);
        assert_eq!(
            lines,
            "Date: 2026-08-20, Score: 8, Emotions: calm\n\
             Date: 2026-08-19, Score: 6, Emotions: anxious, tired"
        );
    }

    #[test]
    fn test_pattern_prompt_embeds_lines() {
        let entries = vec![entry(20, 8, &["calm"])];
        let prompt = pattern_prompt(&entries);
        assert!(prompt.contains("Date: 2026-08-20, Score: 8, Emotions: calm"));
        assert!(prompt.contains("actionable suggestion"));
    }

    #[test]
    fn test_chat_persona_has_safety_redirect() {
        assert!(CHAT_PERSONA.contains("crisis helplines"));
        assert!(CHAT_PERSONA.contains("Never provide medical diagnoses"));
    }
}
