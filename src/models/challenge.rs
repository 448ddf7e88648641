use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A wellness challenge from the static catalog. Not persisted: ids are
/// minted per request, so they are not stable across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub points: i32,
    pub duration_days: i32,
}

/// The built-in catalog. Regenerated on every call with fresh identifiers.
pub fn catalog() -> Vec<Challenge> {
    [
        (
            "Daily Gratitude",
            "Write down 3 things you're grateful for each day",
            "mindfulness",
            10,
            7,
        ),
        (
            "5-Minute Breathing",
            "Practice deep breathing for 5 minutes daily",
            "relaxation",
            15,
            5,
        ),
        (
            "Digital Detox Hour",
            "Stay off social media for 1 hour each day",
            "balance",
            20,
            3,
        ),
        (
            "Connect with Nature",
            "Spend 15 minutes outdoors daily",
            "nature",
            12,
            7,
        ),
    ]
    .into_iter()
    .map(|(title, description, category, points, duration_days)| Challenge {
        id: Uuid::new_v4(),
        title: title.into(),
        description: description.into(),
        category: category.into(),
        points,
        duration_days,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_four_challenges() {
        assert_eq!(catalog().len(), 4);
    }

    #[test]
    fn test_ids_distinct_within_a_call() {
        let ids: HashSet<Uuid> = catalog().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_ids_differ_between_calls() {
        let first: HashSet<Uuid> = catalog().into_iter().map(|c| c.id).collect();
        let second: HashSet<Uuid> = catalog().into_iter().map(|c| c.id).collect();
        assert!(first.is_disjoint(&second));
    }

    #[test]
    fn test_point_values_positive() {
        assert!(catalog().iter().all(|c| c.points > 0 && c.duration_days > 0));
    }
}
