use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{quiz::Difficulty, Question, Quiz};

/// Participant-facing view of a question. Never carries the stored correct
/// answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub points: i32,
    pub question_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub is_approved: bool,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            points: question.points,
            question_type: question.kind.type_label().to_string(),
            options: question.kind.options().map(<[String]>::to_vec),
            is_approved: question.is_approved,
        }
    }
}

/// One line of an answer sheet. Question text and points come from a live
/// join against the question catalog, not from the answer row.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerBreakdownDto {
    pub question_id: String,
    pub question_text: String,
    pub points: i32,
    pub submitted_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptResultDto {
    pub attempt_id: String,
    pub quiz_id: String,
    pub user_id: String,
    pub score: i32,
    pub total_possible_points: i32,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub answers: Vec<AnswerBreakdownDto>,
}

/// Host-test result: the same scoring computation as a real attempt, but
/// nothing was persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EphemeralResultDto {
    pub quiz_id: String,
    pub score: i32,
    pub total_possible_points: i32,
    pub percentage: f64,
    pub answers: Vec<AnswerBreakdownDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizStatisticsDto {
    pub attempt_count: i64,
    pub avg_score: f64,
    pub max_score: i32,
    pub min_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionStatisticsDto {
    pub question_id: String,
    pub question_text: String,
    pub total_answers: i64,
    pub correct_answers: i64,
    pub correct_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingSummaryDto {
    pub average_rating: Option<f64>,
    pub rating_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopularQuizDto {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub average_rating: Option<f64>,
    pub play_count: u64,
}

impl PopularQuizDto {
    pub fn from_quiz(quiz: Quiz, play_count: u64) -> Self {
        PopularQuizDto {
            id: quiz.id,
            title: quiz.title,
            difficulty: quiz.difficulty,
            average_rating: quiz.average_rating,
            play_count,
        }
    }
}
