use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One participant's pass through a quiz. `total_possible_points` is
/// snapshotted when the attempt opens; later question edits never change it.
///
/// `score` and `completed_at` are always serialized (null while the attempt
/// is open) so the storage layer can index open attempts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attempt {
    pub id: String,
    pub quiz_id: String,
    pub user_id: String,
    pub total_possible_points: i32,
    pub score: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Attempt {
    pub fn new(quiz_id: &str, user_id: &str, total_possible_points: i32) -> Self {
        Attempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            total_possible_points,
            score: None,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}
