use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A participant's 1-5 rating of a quiz, tied to one completed attempt.
/// Identity is the (user, quiz, attempt) triple; resubmitting replaces the
/// stored row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rating {
    pub id: String,
    pub quiz_id: String,
    pub user_id: String,
    pub attempt_id: String,
    pub value: i32,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(quiz_id: &str, user_id: &str, attempt_id: &str, value: i32) -> Self {
        Rating {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            attempt_id: attempt_id.to_string(),
            value,
            created_at: Utc::now(),
        }
    }
}
