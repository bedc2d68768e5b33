use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub is_collaborative: bool,
    pub is_active: bool,
    pub average_rating: Option<f64>, // None until the first rating lands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Quiz {
    pub fn new(owner_id: &str, title: &str, difficulty: Difficulty, is_collaborative: bool) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            description: None,
            difficulty,
            is_collaborative,
            is_active: true,
            average_rating: None,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_quiz_starts_active_and_unrated() {
        let quiz = Quiz::new("user-1", "Capitals of Europe", Difficulty::Easy, false);

        assert!(quiz.is_active);
        assert_eq!(quiz.average_rating, None);
        assert!(quiz.is_owned_by("user-1"));
        assert!(!quiz.is_owned_by("user-2"));
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).expect("difficulty should serialize");
        assert_eq!(json, "\"medium\"");
    }
}
