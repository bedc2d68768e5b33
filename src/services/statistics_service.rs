use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::{PopularQuizDto, QuestionStatisticsDto, QuizStatisticsDto},
    repositories::{AnswerRepository, AttemptRepository, QuizRepository},
    services::{question_catalog::QuestionCatalogService, round2},
};

/// Aggregates over completed attempts. Open attempts never contribute to any
/// figure reported here.
pub struct StatisticsService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn AttemptRepository>,
    answers: Arc<dyn AnswerRepository>,
    catalog: Arc<QuestionCatalogService>,
}

impl StatisticsService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        attempts: Arc<dyn AttemptRepository>,
        answers: Arc<dyn AnswerRepository>,
        catalog: Arc<QuestionCatalogService>,
    ) -> Self {
        Self {
            quizzes,
            attempts,
            answers,
            catalog,
        }
    }

    /// Attempt count and score spread for one quiz. All fields are zero when
    /// nobody has completed the quiz yet.
    pub async fn quiz_statistics(&self, quiz_id: &str) -> AppResult<QuizStatisticsDto> {
        self.require_quiz(quiz_id).await?;

        let completed = self.attempts.find_completed_by_quiz(quiz_id).await?;
        let scores: Vec<i32> = completed
            .iter()
            .map(|attempt| attempt.score.unwrap_or(0))
            .collect();

        if scores.is_empty() {
            return Ok(QuizStatisticsDto {
                attempt_count: 0,
                avg_score: 0.0,
                max_score: 0,
                min_score: 0,
            });
        }

        let sum: i64 = scores.iter().map(|score| i64::from(*score)).sum();
        Ok(QuizStatisticsDto {
            attempt_count: scores.len() as i64,
            avg_score: round2(sum as f64 / scores.len() as f64),
            max_score: scores.iter().copied().max().unwrap_or(0),
            min_score: scores.iter().copied().min().unwrap_or(0),
        })
    }

    /// Per-question answer counts for the approved catalog, computed only
    /// over answers belonging to completed attempts.
    pub async fn question_statistics(&self, quiz_id: &str) -> AppResult<Vec<QuestionStatisticsDto>> {
        self.require_quiz(quiz_id).await?;

        let questions = self.catalog.questions_for(quiz_id, true).await?;
        let completed = self.attempts.find_completed_by_quiz(quiz_id).await?;
        let attempt_ids: Vec<String> = completed.into_iter().map(|attempt| attempt.id).collect();
        let answers = self.answers.find_by_attempts(&attempt_ids).await?;

        let stats = questions
            .into_iter()
            .map(|question| {
                let mut total_answers: i64 = 0;
                let mut correct_answers: i64 = 0;
                for answer in answers.iter().filter(|a| a.question_id == question.id) {
                    total_answers += 1;
                    if answer.is_correct {
                        correct_answers += 1;
                    }
                }

                let correct_percentage = if total_answers == 0 {
                    0.0
                } else {
                    round2(100.0 * correct_answers as f64 / total_answers as f64)
                };

                QuestionStatisticsDto {
                    question_id: question.id,
                    question_text: question.text,
                    total_answers,
                    correct_answers,
                    correct_percentage,
                }
            })
            .collect();

        Ok(stats)
    }

    /// Completed-attempt count, the popularity measure.
    pub async fn play_count(&self, quiz_id: &str) -> AppResult<u64> {
        self.attempts.count_completed_by_quiz(quiz_id).await
    }

    /// Active quizzes ranked by play count, ties broken by average rating
    /// descending; unrated quizzes sort after rated ones.
    pub async fn popular_quizzes(&self, limit: usize) -> AppResult<Vec<PopularQuizDto>> {
        let active = self.quizzes.find_active().await?;

        let mut ranked = Vec::with_capacity(active.len());
        for quiz in active {
            let play_count = self.play_count(&quiz.id).await?;
            ranked.push(PopularQuizDto::from_quiz(quiz, play_count));
        }

        ranked.sort_by(|a, b| {
            b.play_count.cmp(&a.play_count).then_with(|| {
                b.average_rating
                    .unwrap_or(f64::NEG_INFINITY)
                    .total_cmp(&a.average_rating.unwrap_or(f64::NEG_INFINITY))
            })
        });
        ranked.truncate(limit);

        Ok(ranked)
    }

    async fn require_quiz(&self, quiz_id: &str) -> AppResult<()> {
        self.quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;
        Ok(())
    }
}
