use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub quiz_id: String,
    pub created_by_user_id: String,
    pub text: String,
    pub points: i32,
    pub kind: QuestionKind,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Question variant, decoded once at load time. Rows carrying a type tag this
/// build does not know still deserialize (as `Unknown`) and always grade
/// incorrect.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Mcq {
        options: Vec<String>,
        correct_answer: String,
    },
    #[serde(rename = "enum")]
    Enumeration { correct_answer: String },
    Identification { correct_answer: String },
    #[serde(other)]
    Unknown,
}

impl QuestionKind {
    pub fn correct_answer(&self) -> Option<&str> {
        match self {
            QuestionKind::Mcq { correct_answer, .. }
            | QuestionKind::Enumeration { correct_answer }
            | QuestionKind::Identification { correct_answer } => Some(correct_answer),
            QuestionKind::Unknown => None,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionKind::Mcq { options, .. } => Some(options),
            _ => None,
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            QuestionKind::Mcq { .. } => "mcq",
            QuestionKind::Enumeration { .. } => "enum",
            QuestionKind::Identification { .. } => "identification",
            QuestionKind::Unknown => "unknown",
        }
    }
}

impl Question {
    pub fn new(
        quiz_id: &str,
        created_by_user_id: &str,
        text: &str,
        points: i32,
        kind: QuestionKind,
        is_approved: bool,
    ) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            created_by_user_id: created_by_user_id.to_string(),
            text: text.to_string(),
            points,
            kind,
            is_approved,
            created_at: Utc::now(),
        }
    }
}
