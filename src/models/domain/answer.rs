use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A graded answer row. `submitted_text` is stored verbatim and `is_correct`
/// is fixed at grading time; later edits to the question's correct answer do
/// not change it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub id: String,
    pub attempt_id: String,
    pub question_id: String,
    pub submitted_text: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(attempt_id: &str, question_id: &str, submitted_text: &str, is_correct: bool) -> Self {
        Answer {
            id: Uuid::new_v4().to_string(),
            attempt_id: attempt_id.to_string(),
            question_id: question_id.to_string(),
            submitted_text: submitted_text.to_string(),
            is_correct,
            created_at: Utc::now(),
        }
    }
}
